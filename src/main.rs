use crate::api::ApiClient;
use crate::config::Config;
use crate::guard::RouteTable;
use crate::responses::html_error_response;
use crate::router::{handle, AppState};
use crate::session::{SessionContext, SessionStore};
use crate::storage::Database;
use astra::Server;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod domain;
mod errors;
mod guard;
mod redact;
mod responses;
mod router;
mod search;
mod session;
mod spreadsheets;
mod storage;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("accommodation_finder=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load();

    // Durable client storage; the session is read from it exactly once, here.
    let db = match Database::open(&config.storage_path) {
        Ok(db) => db,
        Err(e) => {
            error!(path = %config.storage_path, error = %e, "client storage unavailable");
            std::process::exit(1);
        }
    };
    let session = SessionContext::restore(SessionStore::new(db.clone()));

    let api = match ApiClient::new(&config.api_base_url, config.http_timeout, session.clone()) {
        Ok(api) => api,
        Err(e) => {
            error!(error = %e, "API client init failed");
            std::process::exit(1);
        }
    };

    let state = AppState {
        api: Box::new(api),
        session,
        routes: RouteTable::new(config.protect_details),
    };

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(bind_addr = %config.bind_addr, error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };

    info!(
        %addr,
        api = %config.api_base_url,
        storage = %db.path().display(),
        workers = config.max_workers,
        "starting server at http://{addr}"
    );

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
