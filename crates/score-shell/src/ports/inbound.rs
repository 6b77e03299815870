//! # Inbound Ports (Driving Ports)
//!
//! The surface the host runtime calls into, and the trait a contract type
//! implements to be hosted.

use crate::domain::context::{Block, Transaction};
use crate::domain::errors::ConstructError;
use crate::domain::metadata::ContractMetadata;
use crate::domain::registry::MethodRegistry;

/// Host-facing surface of a hosted contract.
///
/// These three operations are the entire ABI the host depends on. `invoke`
/// and `query` always return a serialized response envelope; request-time
/// failures are encoded in the envelope, never raised.
pub trait ScoreApi {
    /// The metadata loaded at construction, verbatim. No side effects,
    /// never fails.
    fn info(&self) -> &ContractMetadata;

    /// Execute a state-changing call. The request payload is read from the
    /// transaction's data.
    fn invoke(&mut self, transaction: &Transaction, block: &Block) -> String;

    /// Execute a read-only call against the supplied request payload.
    fn query(&self, payload: &str) -> String;
}

/// Implemented by contract types hosted inside a `ContractShell`.
///
/// Registration runs exactly once, during shell construction. Handler
/// identity is fixed from then on: between calls the only thing that
/// changes about a hosted contract is what its state store holds.
pub trait Score: Sized {
    /// Raw packaged descriptor text, when the contract ships one
    /// (conventionally `include_str!("../package.json")`). Consulted only
    /// when the host does not supply metadata explicitly.
    const DESCRIPTOR: Option<&'static str> = None;

    /// Register every callable method, split into the invoke-capable and
    /// query-capable sets.
    ///
    /// ## Errors
    ///
    /// `DuplicateMethod` when a name is registered twice in one set. The
    /// error aborts shell construction.
    fn register(registry: &mut MethodRegistry<Self>) -> Result<(), ConstructError>;
}
