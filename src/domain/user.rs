// src/domain/user.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the marketplace an account is on.
///
/// The legacy backend still emits `"USER"` for students, so that spelling is
/// accepted on input. We always write `"STUDENT"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[serde(alias = "USER")]
    Student,
    Broker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Broker => "BROKER",
        }
    }

    /// Where a freshly signed-in user lands when no destination was saved.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Student => "/search",
            Role::Broker => "/upload",
        }
    }

    /// Parse the value posted by the signup form.
    pub fn from_form(value: &str) -> Option<Role> {
        match value.trim().to_ascii_uppercase().as_str() {
            "STUDENT" | "USER" => Some(Role::Student),
            "BROKER" => Some(Role::Broker),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account record as issued by the API. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_broker(&self) -> bool {
        self.role == Role::Broker
    }
}
