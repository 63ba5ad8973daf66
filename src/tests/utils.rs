use crate::api::ListingApi;
use crate::guard::RouteTable;
use crate::router::AppState;
use crate::session::{SessionContext, SessionStore};
use crate::storage::Database;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A fresh storage file path, unique per call.
pub fn temp_storage_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("af_{prefix}_{nanos}_{n}.sqlite"))
}

/// App state over a fresh storage file. Returns the path so tests can "restart".
pub fn test_state(api: impl ListingApi + 'static, protect_details: bool) -> (AppState, PathBuf) {
    let path = temp_storage_path("router");
    let db = Database::open(&path).unwrap();
    let state = AppState {
        api: Box::new(api),
        session: SessionContext::restore(SessionStore::new(db)),
        routes: RouteTable::new(protect_details),
    };
    (state, path)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
