//! In-memory key-value store.

use crate::base::syncerror::SyncError;
use crate::storage::KeyValueStore;
use dashmap::DashMap;

/// DashMap-backed store for tests and embedders without a disk.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, SyncError> {
        Ok(self.records.get(key).map(|v| v.value().clone()))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), SyncError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SyncError> {
        self.records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_load_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.load("cookies").unwrap(), None);

        store.store("cookies", "[]").unwrap();
        assert_eq!(store.load("cookies").unwrap().as_deref(), Some("[]"));

        store.remove("cookies").unwrap();
        store.remove("cookies").unwrap();
        assert_eq!(store.load("cookies").unwrap(), None);
    }
}
