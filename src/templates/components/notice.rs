use maud::{html, Markup};

/// One-shot messages carried across a redirect in the `notice` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SignedIn,
    SignedUp,
    Denied,
    SignedOut,
    Uploaded,
    Updated,
    Deleted,
    NotOwner,
}

impl Notice {
    pub fn as_param(&self) -> &'static str {
        match self {
            Notice::SignedIn => "signed_in",
            Notice::SignedUp => "signed_up",
            Notice::Denied => "denied",
            Notice::SignedOut => "signed_out",
            Notice::Uploaded => "uploaded",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::NotOwner => "not_owner",
        }
    }

    pub fn from_param(value: &str) -> Option<Notice> {
        [
            Notice::SignedIn,
            Notice::SignedUp,
            Notice::Denied,
            Notice::SignedOut,
            Notice::Uploaded,
            Notice::Updated,
            Notice::Deleted,
            Notice::NotOwner,
        ]
        .into_iter()
        .find(|n| n.as_param() == value)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::SignedIn => "Login successful!",
            Notice::SignedUp => "Signup successful!",
            Notice::Denied => "You don't have permission to access this page.",
            Notice::SignedOut => "You have been logged out.",
            Notice::Uploaded => "Accommodation uploaded successfully",
            Notice::Updated => "Accommodation updated successfully",
            Notice::Deleted => "Accommodation deleted",
            Notice::NotOwner => "You can only change your own listings.",
        }
    }

    fn level(&self) -> &'static str {
        match self {
            Notice::Denied | Notice::NotOwner => "error",
            Notice::SignedOut => "info",
            Notice::SignedIn
            | Notice::SignedUp
            | Notice::Uploaded
            | Notice::Updated
            | Notice::Deleted => "success",
        }
    }

    pub fn banner(&self) -> Markup {
        html! {
            div class=(format!("notice {}", self.level())) role="status" { (self.message()) }
        }
    }
}

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="notice error" role="alert" { (message) }
    }
}
