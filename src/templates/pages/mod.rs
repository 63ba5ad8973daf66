pub mod details;
pub mod edit;
pub mod error;
pub mod home;
pub mod login;
pub mod search;
pub mod upload;

pub use details::details_page;
pub use edit::edit_page;
pub use error::error_page;
pub use home::home_page;
pub use login::{login_page, AuthTab, LoginVm};
pub use search::{search_page, SearchVm};
pub use upload::{upload_page, UploadVm};
