// Wire shapes for the auth endpoints. Listings use the domain types directly.
use crate::domain::{Role, User};
use serde::{Deserialize, Serialize};

// No Debug: these carry a password.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

/// Both fields are optional here so a missing one can be reported as a
/// protocol violation rather than a decode error.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
