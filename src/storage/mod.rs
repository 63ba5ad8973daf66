mod connection;
mod local_storage;

pub use connection::{Database, StorageError};
pub use local_storage::{get_item, remove_items, set_items};
