// src/session/store.rs
use crate::domain::{Session, User};
use crate::redact::fingerprint;
use crate::storage::{get_item, remove_items, set_items, Database, StorageError};
use tracing::{debug, warn};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Persists the session under the `token` and `user` storage keys.
/// Both keys are always written or removed together.
#[derive(Clone)]
pub struct SessionStore {
    db: Database,
}

impl SessionStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Reads the persisted session. Absent or unreadable state yields `None`;
    /// unreadable state is wiped so the next start is clean.
    pub fn restore(&self) -> Option<Session> {
        match self.load() {
            Ok(session) => session,
            Err(StorageError::Corrupt(reason)) => {
                warn!(%reason, "discarding corrupt stored session");
                if let Err(e) = self.erase() {
                    warn!(error = %e, "failed to clear corrupt session");
                }
                None
            }
            Err(e) => {
                warn!(error = %e, "could not read stored session");
                None
            }
        }
    }

    pub fn persist(&self, session: &Session) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(&session.user)
            .map_err(|e| StorageError::Db(format!("serialize user failed: {e}")))?;

        self.db.with_conn(|conn| {
            set_items(
                conn,
                &[(TOKEN_KEY, session.token.as_str()), (USER_KEY, user_json.as_str())],
            )
        })?;

        debug!(user_id = session.user.id, token = %fingerprint(&session.token), "session persisted");
        Ok(())
    }

    pub fn erase(&self) -> Result<(), StorageError> {
        self.db
            .with_conn(|conn| remove_items(conn, &[TOKEN_KEY, USER_KEY]))
    }

    fn load(&self) -> Result<Option<Session>, StorageError> {
        let (token, user) = self.db.with_conn(|conn| {
            Ok((get_item(conn, TOKEN_KEY)?, get_item(conn, USER_KEY)?))
        })?;

        match (token, user) {
            (None, None) => Ok(None),
            (Some(token), Some(user_json)) => {
                if token.trim().is_empty() {
                    return Err(StorageError::Corrupt("empty token".into()));
                }
                let user: User = serde_json::from_str(&user_json)
                    .map_err(|e| StorageError::Corrupt(format!("user record: {e}")))?;
                Ok(Some(Session::new(user, token)))
            }
            (Some(_), None) => Err(StorageError::Corrupt("token without user".into())),
            (None, Some(_)) => Err(StorageError::Corrupt("user without token".into())),
        }
    }
}
