use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

const SCHEMA: &str = r#"
create table if not exists local_storage (
  key   text primary key,
  value text not null
);
"#;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage error: {0}")]
    Db(String),

    /// Persisted state exists but cannot be parsed.
    #[error("stored data is corrupt: {0}")]
    Corrupt(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Db(e.to_string())
    }
}

/// Handle to the durable client storage file. Cheap to clone.
#[derive(Clone)]
pub struct Database {
    path: PathBuf,
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the storage file and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)
            .map_err(|e| StorageError::Db(format!("Open storage failed: {e}")))?;

        conn.execute_batch(SCHEMA)
            .map_err(|e| StorageError::Db(format!("Failed to apply schema: {e}")))?;

        info!(path = %path.display(), "client storage ready");

        Ok(Self {
            path,
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StorageError>,
    {
        let mut conn = self.conn.lock();
        f(&mut *conn)
    }
}
