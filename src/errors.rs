// errors.rs
use crate::api::ApiError;
use crate::storage::StorageError;
use astra::Response;
use thiserror::Error;

/// Errors raised while serving a UI request, either locally
/// (routing, form input) or from the layers underneath (API, storage).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Storage Error: {0}")]
    Storage(#[from] StorageError),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Api(e) => match e.status() {
                Some(s) if (400..500).contains(&s) => s,
                _ => 502,
            },
            ServerError::Storage(_) | ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
