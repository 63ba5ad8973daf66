mod context;
mod store;

pub use context::SessionContext;
pub use store::SessionStore;
