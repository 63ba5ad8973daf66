use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 from login or signup.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// A 2xx response that does not have the shape we rely on.
    #[error("Invalid response from server: {0}")]
    ProtocolViolation(String),

    /// Any other non-2xx response, or a request we could not build.
    #[error("{message}")]
    RequestFailed { status: Option<u16>, message: String },

    /// The request or its response body never made it across the wire.
    #[error("{0}")]
    Network(String),
}

/// The user-facing classes API failures fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCredentials,
    ProtocolViolation,
    RequestFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorKind::ProtocolViolation => "PROTOCOL_VIOLATION",
            ErrorKind::RequestFailed => "REQUEST_FAILED",
        }
    }
}

impl ApiError {
    pub fn failed(status: Option<u16>, message: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            status,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidCredentials => ErrorKind::InvalidCredentials,
            ApiError::ProtocolViolation(_) => ErrorKind::ProtocolViolation,
            ApiError::RequestFailed { .. } | ApiError::Network(_) => ErrorKind::RequestFailed,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::InvalidCredentials => Some(401),
            ApiError::ProtocolViolation(_) | ApiError::Network(_) => None,
            ApiError::RequestFailed { status, .. } => *status,
        }
    }
}
