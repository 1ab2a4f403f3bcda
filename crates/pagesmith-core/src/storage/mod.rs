//! Persistence of document snapshots.

mod autosave;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use autosave::{AutoSaveManager, ELEMENTS_KEY};
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use autosave::{PlatformAutoSaveManager, create_autosave_manager};
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::document::Snapshot;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Key/value store for snapshots.
///
/// On native platforms implementations must be `Send + Sync`.
#[cfg(not(target_arch = "wasm32"))]
pub trait Storage: Send + Sync {
    fn save(&self, key: &str, snapshot: &Snapshot) -> BoxFuture<'_, StorageResult<()>>;

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<Snapshot>>;

    /// Delete a snapshot. Missing keys are not an error.
    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// Key/value store for snapshots (single-threaded WASM version).
#[cfg(target_arch = "wasm32")]
pub trait Storage {
    fn save(&self, key: &str, snapshot: &Snapshot) -> BoxFuture<'_, StorageResult<()>>;

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<Snapshot>>;

    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    // Storage futures never actually suspend, so polling in a loop is enough.
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        if let Poll::Ready(result) = f.as_mut().poll(&mut cx) {
            return result;
        }
    }
}
