pub mod errors;
pub mod html;
pub mod redirect;
pub mod xlsx;

pub use errors::html_error_response;
pub use html::{html_response, html_response_with_status};
pub use redirect::redirect;
pub use xlsx::xlsx_response;
