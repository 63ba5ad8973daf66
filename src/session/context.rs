// src/session/context.rs
use crate::domain::{Session, User};
use crate::redact::fingerprint;
use crate::session::SessionStore;
use crate::storage::StorageError;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// The one place auth state lives. Handlers receive a clone; all clones share
/// the same in-memory session and the same storage.
#[derive(Clone)]
pub struct SessionContext {
    store: SessionStore,
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionContext {
    /// Builds the context from whatever was persisted. Called once at start-up.
    pub fn restore(store: SessionStore) -> Self {
        let current = store.restore();
        match &current {
            Some(s) => info!(
                user_id = s.user.id,
                role = %s.user.role,
                token = %fingerprint(&s.token),
                "restored session"
            ),
            None => info!("no stored session"),
        }

        Self {
            store,
            current: Arc::new(RwLock::new(current)),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.token.clone())
    }

    /// Persists first; memory only changes once both fields are stored.
    pub fn set_session(&self, user: User, token: String) -> Result<Session, StorageError> {
        let session = Session::new(user, token);

        let mut slot = self.current.write();
        self.store.persist(&session)?;
        *slot = Some(session.clone());

        info!(user_id = session.user.id, token = %fingerprint(&session.token), "signed in");
        Ok(session)
    }

    /// Memory is reset even if storage fails, so the user is signed out
    /// for this process either way.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        let mut slot = self.current.write();
        *slot = None;
        info!("signed out");
        self.store.erase()
    }
}
