// src/redact.rs
use base64::Engine;
use sha2::{Digest, Sha256};

/// The only form a password may take in logs.
pub const PASSWORD_PLACEHOLDER: &str = "****";

/// Short, stable identifier for a bearer token so log lines can be correlated
/// without exposing the token itself.
pub fn fingerprint(token: &str) -> String {
    let hash = Sha256::digest(token.as_bytes());
    let short = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&hash[..6]);
    format!("sha256:{short}")
}
