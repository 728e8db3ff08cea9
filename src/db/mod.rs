use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::storage::STORE_FILE;
use crate::models::{Artist, Artwork, CartEntry, Event, User};

pub mod seed;

/// One opaque text document, whole-document reads and writes. The gallery
/// snapshot is always persisted in a single `write` call, so a reader never
/// observes a partial save.
pub trait StorageBackend: Send + Sync {
    /// Returns the persisted document, or `None` if nothing was ever saved.
    fn read(&self) -> Result<Option<String>>;

    fn write(&self, document: &str) -> Result<()>;
}

/// JSON file on local disk.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORE_FILE),
        }
    }
}

impl StorageBackend for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(Some(raw))
    }

    fn write(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, document)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// In-memory backend for tests. Clones share the same document, which lets
/// a test reopen a "second process" over the same storage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    cell: Arc<Mutex<Option<String>>>,
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.cell.lock().expect("storage cell poisoned").clone())
    }

    fn write(&self, document: &str) -> Result<()> {
        *self.cell.lock().expect("storage cell poisoned") = Some(document.to_string());
        Ok(())
    }
}

/// The full persisted state of the gallery at a point in time.
///
/// Invariant: id references (`artist_id`, `items`, `art_id`) should resolve
/// within the snapshot, but every lookup tolerates dangling ids by
/// returning `None` rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub artists: Vec<Artist>,
    pub artworks: Vec<Artwork>,
    pub events: Vec<Event>,
    pub cart: Vec<CartEntry>,
}

impl Snapshot {
    #[must_use]
    pub fn artist_by_id(&self, id: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn artwork_by_id(&self, id: &str) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn event_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }
}

/// Owns the storage backend and the seed dataset.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// File-backed store rooted at `data_dir`.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self::new(Arc::new(FileStorage::new(data_dir)))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Loads the persisted snapshot. A missing or malformed document is
    /// treated as absence: the store reinitializes from the seed dataset
    /// and persists it.
    pub fn load(&self) -> Result<Snapshot> {
        match self.backend.read()? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(snapshot) => Ok(snapshot),
                Err(e) => {
                    warn!("Discarding malformed snapshot, reseeding: {e}");
                    self.init()
                }
            },
            None => self.init(),
        }
    }

    /// Persists the full snapshot, replacing prior content.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let raw = serde_json::to_string(snapshot).context("Failed to serialize snapshot")?;
        self.backend.write(&raw)
    }

    /// Reinitializes storage from the seed dataset.
    pub fn init(&self) -> Result<Snapshot> {
        let snapshot = seed::snapshot();
        self.save(&snapshot)?;
        info!("Store initialized from seed dataset");
        Ok(snapshot)
    }

    /// Backfills any seed entity missing from the live snapshot, matching
    /// by natural key: email for users, id for everything else. Idempotent;
    /// persists once iff anything was added. Existing entities are never
    /// overwritten.
    pub fn ensure_seed_merged(&self) -> Result<Snapshot> {
        let mut snapshot = self.load()?;
        let seed = seed::snapshot();
        let mut changed = false;

        for user in seed.users {
            if snapshot.user_by_email(&user.email).is_none() {
                snapshot.users.push(user);
                changed = true;
            }
        }
        for artist in seed.artists {
            if snapshot.artist_by_id(&artist.id).is_none() {
                snapshot.artists.push(artist);
                changed = true;
            }
        }
        for artwork in seed.artworks {
            if snapshot.artwork_by_id(&artwork.id).is_none() {
                snapshot.artworks.push(artwork);
                changed = true;
            }
        }
        for event in seed.events {
            if snapshot.event_by_id(&event.id).is_none() {
                snapshot.events.push(event);
                changed = true;
            }
        }

        if changed {
            self.save(&snapshot)?;
        }
        Ok(snapshot)
    }
}
