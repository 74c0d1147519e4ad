//! Durable key-value storage.
//!
//! The durable cookie record lives as one opaque string under a fixed key in
//! a [`KeyValueStore`]. The store is injected at construction so embedders
//! can swap the file-backed implementation for the in-memory one in tests.

pub mod filestore;
pub mod memstore;

use crate::base::syncerror::SyncError;

/// Process-lifetime-crossing key-value storage for opaque records.
///
/// Writes have whole-record replace semantics; concurrent writers follow
/// last-write-wins on the full value.
pub trait KeyValueStore: Send + Sync {
    /// Read the record under `key`. An absent key is `Ok(None)`.
    fn load(&self, key: &str) -> Result<Option<String>, SyncError>;

    /// Replace the whole record under `key`.
    fn store(&self, key: &str, value: &str) -> Result<(), SyncError>;

    /// Drop the record under `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), SyncError>;
}
