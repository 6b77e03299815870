//! # RocksDB Storage Backend
//!
//! Production implementation of the `KeyValueBackend` port. One database
//! holds the state of every contract instance in the process; isolation is
//! the shell's key-prefixing, so the backend stays a flat byte-keyed store.
//!
//! Writes go through the write-ahead log and, with `sync_writes` enabled,
//! fsync before returning. A value written during one invocation is durable
//! and visible to every later read on the same path.

use rocksdb::{Direction, IteratorMode, Options, WriteOptions, DB};
use score_shell::{KeyValueBackend, StateError};
use std::path::Path;

/// Backend configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Path to the database directory.
    pub path: String,
    /// Create the database if it does not exist yet (default: true).
    pub create_if_missing: bool,
    /// fsync after each write for durability (default: true).
    pub sync_writes: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            path: "./data/score".to_string(),
            create_if_missing: true,
            sync_writes: true,
        }
    }
}

impl BackendConfig {
    /// Config for tests: no fsync, temp-friendly.
    pub fn for_testing(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            create_if_missing: true,
            sync_writes: false,
        }
    }
}

/// RocksDB-backed key-value engine implementing the shell's storage port.
pub struct RocksDbBackend {
    db: DB,
    sync_writes: bool,
}

impl RocksDbBackend {
    /// Open or create a database at the configured path.
    pub fn open(config: BackendConfig) -> Result<Self, StateError> {
        let mut opts = Options::default();
        opts.create_if_missing(config.create_if_missing);

        let db = DB::open(&opts, &config.path)
            .map_err(|e| StateError::backend(format!("failed to open RocksDB: {e}")))?;

        Ok(Self {
            db,
            sync_writes: config.sync_writes,
        })
    }

    /// Open with default options at `path`.
    pub fn open_default(path: impl AsRef<Path>) -> Result<Self, StateError> {
        Self::open(BackendConfig {
            path: path.as_ref().to_string_lossy().to_string(),
            ..Default::default()
        })
    }

    fn write_opts(&self) -> WriteOptions {
        let mut opts = WriteOptions::default();
        opts.set_sync(self.sync_writes);
        opts
    }
}

impl KeyValueBackend for RocksDbBackend {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        self.db
            .get(key)
            .map_err(|e| StateError::backend(format!("RocksDB get failed: {e}")))
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.db
            .put_opt(key, value, &self.write_opts())
            .map_err(|e| StateError::backend(format!("RocksDB put failed: {e}")))
    }

    fn delete(&self, key: &[u8]) -> Result<(), StateError> {
        self.db
            .delete_opt(key, &self.write_opts())
            .map_err(|e| StateError::backend(format!("RocksDB delete failed: {e}")))
    }

    fn exists(&self, key: &[u8]) -> Result<bool, StateError> {
        self.db
            .get_pinned(key)
            .map(|v| v.is_some())
            .map_err(|e| StateError::backend(format!("RocksDB exists check failed: {e}")))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StateError> {
        let mut results = Vec::new();
        let iter = self
            .db
            .iterator(IteratorMode::From(prefix, Direction::Forward));

        for item in iter {
            match item {
                Ok((key, value)) => {
                    if !key.starts_with(prefix) {
                        break;
                    }
                    results.push((key.to_vec(), value.to_vec()));
                }
                Err(e) => {
                    return Err(StateError::backend(format!("RocksDB scan failed: {e}")));
                }
            }
        }

        Ok(results)
    }
}

// =============================================================================
// TESTS
// =============================================================================
