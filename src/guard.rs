// src/guard.rs
//! Route admission.
//!
//! `decide` is a pure function of the session and the target's policy.
//! `RouteTable` maps UI paths onto policies.

use crate::domain::{Role, Session};

const SIGNED_IN: &[Role] = &[Role::Student, Role::Broker];
const BROKERS: &[Role] = &[Role::Broker];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    Public,
    Roles(&'static [Role]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Not signed in. `from` is where to resume after login.
    RedirectToLogin { from: String },
    /// Signed in, but the role may not view the target.
    RedirectToHomeDenied,
}

pub fn decide(session: Option<&Session>, policy: RoutePolicy, requested: &str) -> Decision {
    let RoutePolicy::Roles(allowed) = policy else {
        return Decision::Allow;
    };

    match session {
        None => Decision::RedirectToLogin {
            from: requested.to_string(),
        },
        Some(s) if allowed.contains(&s.user.role) => Decision::Allow,
        Some(_) => Decision::RedirectToHomeDenied,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTable {
    /// Put `/accommodation/{id}` behind sign-in.
    pub protect_details: bool,
}

impl RouteTable {
    pub fn new(protect_details: bool) -> Self {
        Self { protect_details }
    }

    /// `segments` must come from `path_segments`, the same split the router
    /// dispatches on.
    pub fn policy_for(&self, segments: &[&str]) -> RoutePolicy {
        match segments {
            ["search"] | ["search", "export"] => RoutePolicy::Roles(SIGNED_IN),
            ["upload"] => RoutePolicy::Roles(BROKERS),
            ["accommodation", _, "edit"] | ["accommodation", _, "delete"] => {
                RoutePolicy::Roles(BROKERS)
            }
            ["accommodation", _] if self.protect_details => RoutePolicy::Roles(SIGNED_IN),
            _ => RoutePolicy::Public,
        }
    }
}

/// Splits a request path into its non-empty segments.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Accepts a post-login destination only if it stays on this site and can be
/// sent back in a `Location` header.
pub fn safe_next(next: Option<&str>) -> Option<&str> {
    next.map(str::trim).filter(|n| {
        n.starts_with('/')
            && !n.starts_with("//")
            && !n.contains('\\')
            && !n.starts_with("/login")
            && !n.chars().any(char::is_control)
    })
}
