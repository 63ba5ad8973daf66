// src/domain/session.rs
use crate::domain::User;

/// Client-held proof of authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    /// Opaque bearer token. Do not log it; use `redact::fingerprint`.
    pub token: String,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }
}
