// src/api/client.rs
use crate::api::models::{AuthResponse, ErrorBody, LoginRequest, SignupRequest};
use crate::api::{ApiError, ListingApi};
use crate::domain::{Listing, NewListing, Role, Session};
use crate::redact::{fingerprint, PASSWORD_PLACEHOLDER};
use crate::session::SessionContext;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("accommodation-finder/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the listings API. One request per call, no retries.
pub struct ApiClient {
    client: Client,
    base: Url,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, session: SessionContext) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| ApiError::failed(None, format!("invalid API base URL {base_url}: {e}")))?;

        // Url::join drops the last segment unless the path ends with a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::failed(None, format!("HTTP client init failed: {e}")))?;

        Ok(Self {
            client,
            base,
            session,
        })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::failed(None, format!("bad request path {path}: {e}")))
    }

    /// Attaches the bearer token when signed in, sends, and returns status + body.
    fn send(&self, req: RequestBuilder, op: &'static str) -> Result<(u16, Vec<u8>), ApiError> {
        let req = match self.session.token() {
            Some(token) => {
                debug!(op, token = %fingerprint(&token), "authorized request");
                req.bearer_auth(token)
            }
            None => req,
        };

        let resp = req.send().map_err(|e| {
            warn!(op, error = %e, "request did not complete");
            ApiError::Network(format!("{}: {e}", fallback_message(op)))
        })?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .map_err(|e| ApiError::Network(format!("reading {op} response failed: {e}")))?;

        debug!(op, status, bytes = body.len(), "response received");
        Ok((status, body.to_vec()))
    }

    fn fetch_listings(&self, req: RequestBuilder, op: &'static str) -> Result<Vec<Listing>, ApiError> {
        let (status, body) = self.send(req, op)?;
        let listings: Vec<Listing> = decode_success(status, &body, op)?;
        for listing in &listings {
            check_listing(listing)?;
        }
        Ok(listings)
    }

    fn fetch_listing(&self, req: RequestBuilder, op: &'static str) -> Result<Listing, ApiError> {
        let (status, body) = self.send(req, op)?;
        let listing: Listing = decode_success(status, &body, op)?;
        check_listing(&listing)?;
        Ok(listing)
    }
}

impl ListingApi for ApiClient {
    fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        info!(username, password = PASSWORD_PLACEHOLDER, "logging in");

        let req = self
            .client
            .post(self.url("auth/login")?)
            .json(&LoginRequest { username, password });
        let (status, body) = self.send(req, "login")?;

        let session = interpret_auth(status, &body, "login")?;
        info!(user_id = session.user.id, role = %session.user.role, "login accepted");
        Ok(session)
    }

    fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Session, ApiError> {
        info!(username, email, %role, password = PASSWORD_PLACEHOLDER, "signing up");

        let req = self.client.post(self.url("auth/signup")?).json(&SignupRequest {
            username,
            email,
            password,
            role,
        });
        let (status, body) = self.send(req, "signup")?;

        let session = interpret_auth(status, &body, "signup")?;
        info!(user_id = session.user.id, role = %session.user.role, "signup accepted");
        Ok(session)
    }

    fn list_all(&self) -> Result<Vec<Listing>, ApiError> {
        let req = self.client.get(self.url("accommodations")?);
        self.fetch_listings(req, "list_all")
    }

    fn get_by_id(&self, id: i64) -> Result<Listing, ApiError> {
        let req = self.client.get(self.url(&format!("accommodations/{id}"))?);
        self.fetch_listing(req, "get_by_id")
    }

    fn create(&self, listing: &NewListing) -> Result<Listing, ApiError> {
        let req = self.client.post(self.url("accommodations")?).json(listing);
        let created = self.fetch_listing(req, "create")?;
        info!(id = created.id, broker_id = created.broker_id, "listing created");
        Ok(created)
    }

    fn update(&self, id: i64, listing: &NewListing) -> Result<Listing, ApiError> {
        let req = self
            .client
            .put(self.url(&format!("accommodations/{id}"))?)
            .json(listing);
        let updated = self.fetch_listing(req, "update")?;
        info!(id, "listing updated");
        Ok(updated)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        let req = self.client.delete(self.url(&format!("accommodations/{id}"))?);
        let (status, body) = self.send(req, "delete")?;
        if !is_success(status) {
            return Err(failure(status, &body, fallback_message("delete")));
        }
        info!(id, "listing deleted");
        Ok(())
    }

    fn list_by_broker(&self, broker_id: i64) -> Result<Vec<Listing>, ApiError> {
        let req = self
            .client
            .get(self.url(&format!("accommodations/broker/{broker_id}"))?);
        self.fetch_listings(req, "list_by_broker")
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn fallback_message(op: &str) -> &'static str {
    match op {
        "login" => "Login failed",
        "signup" => "Signup failed",
        "list_all" | "list_by_broker" => "Failed to fetch accommodations",
        "get_by_id" => "Failed to fetch accommodation",
        "create" => "Failed to upload accommodation",
        "update" => "Failed to update accommodation",
        "delete" => "Failed to delete accommodation",
        _ => "Request failed",
    }
}

/// Maps a login/signup response onto a session or the matching error kind.
fn interpret_auth(status: u16, body: &[u8], op: &str) -> Result<Session, ApiError> {
    if status == 401 {
        return Err(ApiError::InvalidCredentials);
    }
    if !is_success(status) {
        return Err(failure(status, body, fallback_message(op)));
    }

    let parsed: AuthResponse = serde_json::from_slice(body)
        .map_err(|e| ApiError::ProtocolViolation(format!("{op} response is not valid JSON: {e}")))?;

    match (parsed.token, parsed.user) {
        (Some(token), Some(user)) if !token.is_empty() => Ok(Session::new(user, token)),
        (token, user) => {
            warn!(
                op,
                has_token = token.map(|t| !t.is_empty()).unwrap_or(false),
                has_user = user.is_some(),
                "auth response incomplete"
            );
            Err(ApiError::ProtocolViolation(
                "response must contain both token and user".into(),
            ))
        }
    }
}

fn decode_success<T: DeserializeOwned>(status: u16, body: &[u8], op: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(failure(status, body, fallback_message(op)));
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::ProtocolViolation(format!("{op} response: {e}")))
}

fn check_listing(listing: &Listing) -> Result<(), ApiError> {
    listing
        .validate()
        .map_err(|e| ApiError::ProtocolViolation(format!("listing {}: {e}", listing.id)))
}

/// Server message if it sent one (JSON `message` or plain text), else `fallback`.
fn failure(status: u16, body: &[u8], fallback: &str) -> ApiError {
    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(m) }) if !m.trim().is_empty() => m,
        Ok(_) => fallback.to_string(),
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            if text.is_empty() || text.starts_with('{') || text.starts_with('<') {
                fallback.to_string()
            } else {
                text.to_string()
            }
        }
    };
    ApiError::failed(Some(status), message)
}
