//! In-memory storage.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::document::Snapshot;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory storage for tests and ephemeral sessions.
///
/// Snapshots are cheap to clone, so saving just stores another handle to
/// the same elements.
#[derive(Default)]
pub struct MemoryStorage {
    snapshots: RwLock<HashMap<String, Snapshot>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, HashMap<String, Snapshot>>> {
        self.snapshots
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, HashMap<String, Snapshot>>> {
        self.snapshots
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, snapshot: &Snapshot) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        let snapshot = snapshot.clone();
        Box::pin(async move {
            self.write()?.insert(key, snapshot);
            Ok(())
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<Snapshot>> {
        let key = key.to_string();
        Box::pin(async move {
            let stored = self.read()?.get(&key).cloned();
            stored.ok_or(StorageError::NotFound(key))
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        Box::pin(async move {
            self.write()?.remove(&key);
            Ok(())
        })
    }

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let key = key.to_string();
        Box::pin(async move { Ok(self.read()?.contains_key(&key)) })
    }
}
