use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// 303 so a redirect after a form POST is followed with GET.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
