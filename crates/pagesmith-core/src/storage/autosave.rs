//! Periodic persistence of the present snapshot.

use crate::config::DEFAULT_AUTOSAVE_INTERVAL_SECS;
use crate::document::Snapshot;
use crate::storage::{Storage, StorageError, StorageResult};
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Key the page elements are stored under.
pub const ELEMENTS_KEY: &str = "websiteElements";

/// Saves the page after changes, at most once per interval.
///
/// The manager does not own the session. Hosts report the session's
/// revision after each event and call [`AutoSaveManager::maybe_save`] from
/// their tick.
pub struct AutoSaveManager<S: Storage> {
    storage: Arc<S>,
    interval: Duration,
    last_save: Option<Instant>,
    dirty: bool,
    /// Session revision seen at the last [`AutoSaveManager::observe`].
    revision: Option<u64>,
}

impl<S: Storage> AutoSaveManager<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            interval: Duration::from_secs(DEFAULT_AUTOSAVE_INTERVAL_SECS),
            last_save: None,
            dirty: false,
            revision: None,
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record the session revision, marking the page dirty if it moved.
    pub fn observe(&mut self, revision: u64) {
        if self.revision.is_some_and(|seen| seen != revision) {
            self.dirty = true;
        }
        self.revision = Some(revision);
    }

    /// Whether a save is due: dirty and the interval has elapsed.
    pub fn should_save(&self) -> bool {
        if !self.dirty {
            return false;
        }
        match self.last_save {
            Some(last) => last.elapsed() >= self.interval,
            None => true,
        }
    }

    /// Save if due. Returns true if a save was performed.
    pub async fn maybe_save(&mut self, snapshot: &Snapshot) -> StorageResult<bool> {
        if !self.should_save() {
            return Ok(false);
        }
        self.save(snapshot).await?;
        Ok(true)
    }

    /// Save immediately.
    pub async fn save(&mut self, snapshot: &Snapshot) -> StorageResult<()> {
        self.storage.save(ELEMENTS_KEY, snapshot).await?;
        log::debug!("Saved {} elements", snapshot.len());
        self.last_save = Some(Instant::now());
        self.dirty = false;
        Ok(())
    }

    /// Load the saved page. Returns `None` if nothing was saved or the
    /// stored page can't be read.
    pub async fn load(&mut self) -> Option<Snapshot> {
        match self.storage.load(ELEMENTS_KEY).await {
            Ok(snapshot) => {
                self.dirty = false;
                self.last_save = Some(Instant::now());
                Some(snapshot)
            }
            Err(StorageError::NotFound(_)) => None,
            Err(e) => {
                log::warn!("Failed to load saved page: {}", e);
                None
            }
        }
    }

    /// Whether a page has been saved before.
    pub async fn has_saved_page(&self) -> StorageResult<bool> {
        self.storage.exists(ELEMENTS_KEY).await
    }

    /// Remove the saved page.
    pub async fn clear(&mut self) -> StorageResult<()> {
        self.storage.delete(ELEMENTS_KEY).await?;
        self.dirty = false;
        Ok(())
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

/// Auto-save manager backed by files in the platform data directory.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformAutoSaveManager = AutoSaveManager<crate::storage::FileStorage>;

/// Create an auto-save manager with the default file storage and the
/// interval from `interval_secs`.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_autosave_manager(interval_secs: u64) -> StorageResult<PlatformAutoSaveManager> {
    let storage = Arc::new(crate::storage::FileStorage::default_location()?);
    let mut manager = AutoSaveManager::new(storage);
    manager.set_interval(Duration::from_secs(interval_secs));
    Ok(manager)
}
