//! Adapter implementations of the shell's outbound ports.

pub mod rocksdb_backend;
