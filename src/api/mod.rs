mod client;
mod error;
mod models;

pub use client::ApiClient;
pub use error::ApiError;

use crate::domain::{Listing, NewListing, Role, Session};

/// Operations the front-end needs from the listings backend.
///
/// `ApiClient` is the HTTP implementation; router tests swap in an
/// in-memory one.
pub trait ListingApi: Send + Sync {
    fn login(&self, username: &str, password: &str) -> Result<Session, ApiError>;
    fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Session, ApiError>;

    fn list_all(&self) -> Result<Vec<Listing>, ApiError>;
    fn get_by_id(&self, id: i64) -> Result<Listing, ApiError>;
    fn create(&self, listing: &NewListing) -> Result<Listing, ApiError>;
    fn update(&self, id: i64, listing: &NewListing) -> Result<Listing, ApiError>;
    fn delete(&self, id: i64) -> Result<(), ApiError>;
    fn list_by_broker(&self, broker_id: i64) -> Result<Vec<Listing>, ApiError>;
}
