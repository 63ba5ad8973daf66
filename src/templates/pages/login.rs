use crate::domain::Role;
use crate::templates::{components::error_banner, desktop_layout};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

/// Everything the login page needs to re-render after a failed attempt.
#[derive(Debug, Default)]
pub struct LoginVm {
    pub tab: AuthTab,
    /// Where to go after signing in.
    pub next: Option<String>,
    pub error: Option<String>,
    pub username: String,
    pub email: String,
    pub role: Option<Role>,
}

pub fn login_page(vm: &LoginVm) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            section class="card narrow" {
                h1 { "Welcome to SRM Accommodation Finder" }
                p class="lead" { "Access your account or create a new one" }

                @if let Some(err) = &vm.error {
                    (error_banner(err))
                }

                nav class="tabs" {
                    a href=(tab_href(vm, AuthTab::Login)) class=[(vm.tab == AuthTab::Login).then_some("active")] { "Login" }
                    a href=(tab_href(vm, AuthTab::Signup)) class=[(vm.tab == AuthTab::Signup).then_some("active")] { "Sign Up" }
                }

                @match vm.tab {
                    AuthTab::Login => { (login_form(vm)) }
                    AuthTab::Signup => { (signup_form(vm)) }
                }
            }
        },
    )
}

fn tab_href(vm: &LoginVm, tab: AuthTab) -> String {
    let mut q = url::form_urlencoded::Serializer::new(String::new());
    if tab == AuthTab::Signup {
        q.append_pair("tab", "signup");
    }
    if let Some(next) = &vm.next {
        q.append_pair("next", next);
    }
    let q = q.finish();
    if q.is_empty() {
        "/login".to_string()
    } else {
        format!("/login?{q}")
    }
}

fn next_field(vm: &LoginVm) -> Markup {
    html! {
        @if let Some(next) = &vm.next {
            input type="hidden" name="next" value=(next);
        }
    }
}

fn login_form(vm: &LoginVm) -> Markup {
    html! {
        form action="/auth/login" method="post" {
            (next_field(vm))
            label for="username" { "Username" }
            input id="username" name="username" type="text" value=(vm.username) required;

            label for="password" { "Password" }
            input id="password" name="password" type="password" required;

            button type="submit" class="btn" { "Login" }
        }
    }
}

fn signup_form(vm: &LoginVm) -> Markup {
    let role = vm.role.unwrap_or(Role::Student);
    html! {
        form action="/auth/signup" method="post" {
            (next_field(vm))
            label for="signup-username" { "Username" }
            input id="signup-username" name="username" type="text" value=(vm.username) required;

            label for="signup-email" { "Email" }
            input id="signup-email" name="email" type="email" value=(vm.email) required;

            label for="signup-password" { "Password" }
            input id="signup-password" name="password" type="password" required;

            label for="signup-confirm" { "Confirm Password" }
            input id="signup-confirm" name="confirm_password" type="password" required;

            label for="signup-role" { "I am a" }
            select id="signup-role" name="role" {
                option value="STUDENT" selected[role == Role::Student] { "Student" }
                option value="BROKER" selected[role == Role::Broker] { "Property Broker" }
            }

            button type="submit" class="btn" { "Sign Up" }
        }
    }
}
