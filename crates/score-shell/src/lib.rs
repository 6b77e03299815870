//! # SCORE Execution Shell
//!
//! Hosts a smart contract inside a blockchain runtime. The shell receives
//! state-changing transactions (`invoke`) and read-only requests (`query`),
//! routes them to handler functions registered under method names, and
//! persists contract state in a key-value store namespaced per contract
//! instance. Every call returns a fixed-shape JSON-RPC 2.0 envelope; handler
//! failures never escape to the host as faults.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (metadata, requests, envelopes, registry)
//! - `ports/` - Port traits (inbound contract API, outbound storage engine)
//! - `store.rs` - Namespaced state access over a host-provided engine
//! - `dispatch.rs` - Payload parsing, handler resolution, envelope assembly
//! - `service.rs` - The `ContractShell` lifecycle wrapper
//!
//! ## Usage
//!
//! ```ignore
//! use score_shell::{ContractShell, MemoryBackend, ScoreApi, StateStore};
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let store = StateStore::open(backend, "my_contract")?;
//! let shell = ContractShell::new(MyContract::new(store), None)?;
//!
//! let response = shell.query(r#"{"method":"balance","params":{"address":"X"}}"#);
//! ```

pub mod dispatch;
pub mod domain;
pub mod ports;
pub mod service;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export key types for convenience
pub use domain::context::{Block, Hash, Timestamp, Transaction};
pub use domain::envelope::{codes, ErrorObject, ResponseEnvelope, JSONRPC_VERSION};
pub use domain::errors::{ConstructError, DispatchError, HandlerError, MethodKind, StateError};
pub use domain::metadata::{ContractMetadata, PACKAGE_FILE};
pub use domain::registry::{HandlerResult, InvokeFn, MethodRegistry, Params, QueryFn};
pub use domain::request::Request;
pub use ports::inbound::{Score, ScoreApi};
pub use ports::outbound::{KeyValueBackend, MemoryBackend};
pub use service::ContractShell;
pub use store::StateStore;
