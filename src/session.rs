//! The current-user session. Separate persistence domain from the store:
//! it lives for the browsing session only and is never merged into the
//! snapshot document.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::warn;

use crate::models::User;

/// Session-scoped storage for one structured-text entry.
pub trait SessionStore: Send + Sync {
    fn read(&self) -> Result<Option<String>>;

    /// `None` clears the entry.
    fn write(&self, document: Option<&str>) -> Result<()>;
}

/// Process-lifetime session entry, the headless analogue of per-tab
/// session storage.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    cell: Arc<Mutex<Option<String>>>,
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.cell.lock().expect("session cell poisoned").clone())
    }

    fn write(&self, document: Option<&str>) -> Result<()> {
        *self.cell.lock().expect("session cell poisoned") = document.map(ToString::to_string);
        Ok(())
    }
}

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::default()))
    }

    /// Returns the active user, or `None`. A malformed entry is treated as
    /// signed out.
    pub fn current_user(&self) -> Result<Option<User>> {
        let Some(raw) = self.store.read()? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Discarding malformed session entry: {e}");
                Ok(None)
            }
        }
    }

    /// Sets or clears the active user.
    pub fn set_current_user(&self, user: Option<&User>) -> Result<()> {
        match user {
            Some(user) => {
                let raw = serde_json::to_string(user)?;
                self.store.write(Some(&raw))
            }
            None => self.store.write(None),
        }
    }
}
