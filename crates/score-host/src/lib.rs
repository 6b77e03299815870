//! # SCORE Host Support
//!
//! The pieces a host runtime wires around the execution shell: a production
//! storage backend over RocksDB and tracing setup. The shell itself stays
//! engine-agnostic; everything engine-specific lives here.

pub mod adapters;
pub mod telemetry;

pub use adapters::rocksdb_backend::{BackendConfig, RocksDbBackend};
