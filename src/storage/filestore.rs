//! File-backed key-value store.

use crate::base::syncerror::SyncError;
use crate::storage::KeyValueStore;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Stores each record as one file named after its key under a base
/// directory. The directory is created lazily on first write.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, SyncError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SyncError::store_read(e.to_string())),
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<(), SyncError> {
        fs::create_dir_all(&self.base_dir).map_err(|e| SyncError::store_write(e.to_string()))?;
        fs::write(self.path_for(key), value).map_err(|e| SyncError::store_write(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), SyncError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SyncError::store_write(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_absent_key() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.load("cookies").unwrap(), None);
    }

    #[test]
    fn test_store_load_remove() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("state"));

        store.store("cookies", "[1, 2]").unwrap();
        assert_eq!(store.load("cookies").unwrap().as_deref(), Some("[1, 2]"));

        store.store("cookies", "[]").unwrap();
        assert_eq!(store.load("cookies").unwrap().as_deref(), Some("[]"));

        store.remove("cookies").unwrap();
        assert_eq!(store.load("cookies").unwrap(), None);
    }

    #[test]
    fn test_remove_absent_key_succeeds() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.remove("never-written").unwrap();
    }
}
