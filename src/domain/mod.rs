pub mod listing;
pub mod session;
pub mod user;

pub use listing::{Listing, NewListing, AMENITY_CHOICES};
pub use session::Session;
pub use user::{Role, User};
