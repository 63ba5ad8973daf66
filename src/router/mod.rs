// src/router/mod.rs
use crate::api::ListingApi;
use crate::errors::{ResultResp, ServerError};
use crate::guard::{self, Decision, RouteTable};
use crate::responses::{html_response, redirect};
use crate::session::SessionContext;
use crate::templates::{pages, Notice};
use astra::Request;
use std::collections::HashMap;
use tracing::{debug, info};
use url::form_urlencoded;

mod auth;
pub mod forms;
mod listings;
mod search;

/// Everything a handler may touch. Built once in `main`.
pub struct AppState {
    pub api: Box<dyn ListingApi>,
    pub session: SessionContext,
    pub routes: RouteTable,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let requested = match &query {
        Some(q) => format!("{path}?{q}"),
        None => path.clone(),
    };

    debug!(%method, %path, "request");

    // One split feeds both the guard and the dispatch below.
    let segments = guard::path_segments(&path);

    let session = state.session.current();
    match guard::decide(session.as_ref(), state.routes.policy_for(&segments), &requested) {
        Decision::Allow => {}
        Decision::RedirectToLogin { from } => {
            info!(%from, "sign-in required");
            // Only GETs can be resumed; a replayed POST would lose its body.
            if method == "GET" {
                let next: String = form_urlencoded::byte_serialize(from.as_bytes()).collect();
                return redirect(&format!("/login?next={next}"));
            }
            return redirect("/login");
        }
        Decision::RedirectToHomeDenied => {
            info!(%path, "navigation denied for role");
            return redirect(&format!("/?notice={}", Notice::Denied.as_param()));
        }
    }

    let params = parse_query(query.as_deref());
    let notice = params.get("notice").and_then(|n| Notice::from_param(n));
    let user = session.as_ref().map(|s| &s.user);

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => html_response(pages::home_page(user, notice)),

        ("GET", ["login"]) => auth::login_page(&params),
        ("POST", ["auth", "login"]) => auth::login(state, forms::FormData::read(req)?),
        ("POST", ["auth", "signup"]) => auth::signup(state, forms::FormData::read(req)?),
        ("POST", ["auth", "logout"]) => auth::logout(state),

        ("GET", ["search"]) => {
            search::search(state, signed_in(user)?, query.as_deref(), notice)
        }
        ("GET", ["search", "export"]) => search::export(state, query.as_deref()),

        ("GET", ["upload"]) => listings::upload_page(state, signed_in(user)?, notice),
        ("POST", ["upload"]) => {
            listings::upload(state, signed_in(user)?, forms::FormData::read(req)?)
        }

        ("GET", ["accommodation", id]) => listings::details(state, user, parse_id(id)?, notice),
        ("GET", ["accommodation", id, "edit"]) => {
            listings::edit_page(state, signed_in(user)?, parse_id(id)?)
        }
        ("POST", ["accommodation", id, "edit"]) => {
            let id = parse_id(id)?;
            listings::edit(state, signed_in(user)?, id, forms::FormData::read(req)?)
        }
        ("POST", ["accommodation", id, "delete"]) => {
            listings::delete(state, signed_in(user)?, parse_id(id)?)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Guarded routes always have a user; this only fails if the table and the
/// dispatch above disagree.
fn signed_in<T>(user: Option<T>) -> Result<T, ServerError> {
    user.ok_or(ServerError::InternalError)
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
