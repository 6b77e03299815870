//! # Outbound Ports (Driven Ports)
//!
//! The storage engine interface this library requires the host to provide.
//!
//! Production hosts back this with a real engine (see the RocksDB adapter in
//! `score-host`); tests and light hosts use `MemoryBackend` below. Backends
//! are internally synchronized so a single physical engine can be shared by
//! every contract instance in the process, with isolation handled by key
//! prefixing in `StateStore`.

use crate::domain::errors::StateError;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Abstract key-value engine provided by the host.
pub trait KeyValueBackend: Send + Sync {
    /// Get a value by key. Absence is `Ok(None)`, not an error.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;

    /// Put a single key-value pair.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StateError>;

    /// Delete a key. Deleting an absent key succeeds.
    fn delete(&self, key: &[u8]) -> Result<(), StateError>;

    /// Check whether a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, StateError> {
        Ok(self.get(key)?.is_some())
    }

    /// All entries whose key starts with `prefix`, in key order.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StateError>;
}

/// In-memory backend for unit tests and light hosts.
#[derive(Default)]
pub struct MemoryBackend {
    data: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, across every namespace.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.data.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), StateError> {
        self.data.write().remove(key);
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, StateError> {
        Ok(self.data.read().contains_key(key))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StateError> {
        let data = self.data.read();
        Ok(data
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
