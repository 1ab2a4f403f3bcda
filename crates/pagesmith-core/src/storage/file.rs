//! File-based storage for native platforms.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::document::Snapshot;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each snapshot as a JSON array in `<base>/<key>.json`.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `base_path`, creating the directory
    /// if needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(|e| StorageError::Io(format!("Failed to create storage directory: {}", e)))?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the platform data directory.
    ///
    /// On Linux: `~/.local/share/pagesmith/documents/`
    /// On Windows: `%LOCALAPPDATA%\pagesmith\documents\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Self::new(base.join("pagesmith").join("documents"))
    }

    fn snapshot_path(&self, key: &str) -> PathBuf {
        let safe_key: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_key))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&self, key: &str, snapshot: &Snapshot) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.snapshot_path(key);
        let json = snapshot.to_json();
        Box::pin(async move {
            let json = json.map_err(|e| StorageError::Serialization(e.to_string()))?;
            fs::write(&path, json)
                .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<Snapshot>> {
        let path = self.snapshot_path(key);
        let key = key.to_string();
        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(key));
            }
            let json = fs::read_to_string(&path)
                .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
            Snapshot::from_json(&json)
                .map_err(|e| StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e)))
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.snapshot_path(key);
        Box::pin(async move {
            if path.exists() {
                fs::remove_file(&path)
                    .map_err(|e| StorageError::Io(format!("Failed to delete {}: {}", path.display(), e)))?;
            }
            Ok(())
        })
    }

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let path = self.snapshot_path(key);
        Box::pin(async move { Ok(path.exists()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementPatch, ElementType};
    use crate::factory::Theme;
    use crate::storage::block_on;
    use kurbo::Point;
    use tempfile::tempdir;

    fn sample() -> Snapshot {
        let (doc, heading) = Snapshot::new().add_element(ElementType::Heading, Point::new(20.0, 20.0), &Theme::default());
        doc.update_element(&heading.id, &ElementPatch::new().with_content("Acme"))
    }

    #[test]
    fn test_file_storage_save_load() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let doc = sample();

        block_on(storage.save("site", &doc)).unwrap();
        let loaded = block_on(storage.load("site")).unwrap();

        assert_eq!(loaded, doc);
        assert_eq!(loaded.iter().next().unwrap().content, "Acme");
    }

    #[test]
    fn test_file_storage_not_found() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let result = block_on(storage.load("nonexistent"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_file_storage_corrupt_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let result = block_on(storage.load("broken"));
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_file_storage_exists_and_delete() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        block_on(storage.save("site", &Snapshot::new())).unwrap();
        assert!(block_on(storage.exists("site")).unwrap());
        assert!(dir.path().join("site.json").exists());

        block_on(storage.delete("site")).unwrap();
        assert!(!block_on(storage.exists("site")).unwrap());
        block_on(storage.delete("site")).unwrap();
    }

    #[test]
    fn test_file_storage_sanitizes_key() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let doc = sample();

        block_on(storage.save("site/../home:page", &doc)).unwrap();

        assert!(dir.path().join("site____home_page.json").exists());
        assert_eq!(block_on(storage.load("site/../home:page")).unwrap(), doc);
    }
}
