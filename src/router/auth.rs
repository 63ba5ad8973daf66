// src/router/auth.rs
use crate::api::ApiError;
use crate::domain::{Role, Session};
use crate::errors::{ResultResp, ServerError};
use crate::guard::safe_next;
use crate::responses::{html_response, html_response_with_status, redirect};
use crate::router::forms::FormData;
use crate::router::AppState;
use crate::templates::pages::{self, AuthTab, LoginVm};
use crate::templates::Notice;
use std::collections::HashMap;
use tracing::{error, warn};

fn login_page_vm(params: &HashMap<String, String>) -> LoginVm {
    LoginVm {
        tab: match params.get("tab").map(String::as_str) {
            Some("signup") => AuthTab::Signup,
            _ => AuthTab::Login,
        },
        next: safe_next(params.get("next").map(String::as_str)).map(str::to_string),
        ..LoginVm::default()
    }
}

pub fn login_page(params: &HashMap<String, String>) -> ResultResp {
    html_response(pages::login_page(&login_page_vm(params)))
}

pub fn login(state: &AppState, form: FormData) -> ResultResp {
    let mut vm = LoginVm {
        tab: AuthTab::Login,
        next: safe_next(Some(form.get("next"))).map(str::to_string),
        username: form.get("username").trim().to_string(),
        ..LoginVm::default()
    };

    if vm.username.is_empty() || form.get("password").is_empty() {
        vm.error = Some("Username and password are required".into());
        return html_response_with_status(400, pages::login_page(&vm));
    }

    match state.api.login(&vm.username, form.get("password")) {
        Ok(session) => start_session(state, session, vm.next.as_deref(), Notice::SignedIn),
        Err(e) => {
            warn!(username = %vm.username, kind = e.kind().as_str(), error = %e, "login failed");
            vm.error = Some(format!("Login failed: {e}"));
            html_response_with_status(failure_status(&e), pages::login_page(&vm))
        }
    }
}

pub fn signup(state: &AppState, form: FormData) -> ResultResp {
    let mut vm = LoginVm {
        tab: AuthTab::Signup,
        next: safe_next(Some(form.get("next"))).map(str::to_string),
        username: form.get("username").trim().to_string(),
        email: form.get("email").trim().to_string(),
        role: Role::from_form(form.get("role")),
        ..LoginVm::default()
    };

    let password = form.get("password");
    let problem = if vm.username.is_empty() || vm.email.is_empty() || password.is_empty() {
        Some("Username, email and password are required")
    } else if password != form.get("confirm_password") {
        Some("Passwords do not match")
    } else if vm.role.is_none() {
        Some("Please choose a role")
    } else {
        None
    };
    if let Some(msg) = problem {
        vm.error = Some(msg.to_string());
        return html_response_with_status(400, pages::login_page(&vm));
    }

    let role = vm.role.unwrap_or(Role::Student);
    match state.api.signup(&vm.username, &vm.email, password, role) {
        Ok(session) => start_session(state, session, vm.next.as_deref(), Notice::SignedUp),
        Err(e) => {
            warn!(username = %vm.username, kind = e.kind().as_str(), error = %e, "signup failed");
            vm.error = Some(format!("Signup failed: {e}"));
            html_response_with_status(failure_status(&e), pages::login_page(&vm))
        }
    }
}

pub fn logout(state: &AppState) -> ResultResp {
    if let Err(e) = state.session.clear_session() {
        // Memory is already cleared; the next start would restore the old session.
        error!(error = %e, "failed to clear stored session");
    }
    redirect(&format!("/?notice={}", Notice::SignedOut.as_param()))
}

fn start_session(
    state: &AppState,
    session: Session,
    next: Option<&str>,
    notice: Notice,
) -> ResultResp {
    let role = session.user.role;
    state.session.set_session(session.user, session.token)?;

    let target = next.unwrap_or(role.home_path());
    let sep = if target.contains('?') { '&' } else { '?' };
    redirect(&format!("{target}{sep}notice={}", notice.as_param()))
}

fn failure_status(e: &ApiError) -> u16 {
    ServerError::Api(e.clone()).status()
}
