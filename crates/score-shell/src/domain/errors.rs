//! # Error Types
//!
//! Error families for the execution shell, one per concern:
//!
//! - `DispatchError` - request-time failures, converted to error envelopes
//!   at the dispatch boundary and never surfaced to the host as faults
//! - `ConstructError` - construction-time failures, fatal; no contract
//!   instance exists after one of these
//! - `StateError` - state access failures surfaced to handler code
//! - `HandlerError` - the explicit failure type returned by handlers

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Which handler table a method name belongs to.
///
/// The invoke set and the query set are independent namespaces. A name
/// registered in one is not resolvable in the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// State-changing call driven by a committed transaction.
    Invoke,
    /// Read-only call; must not mutate persistent state.
    Query,
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodKind::Invoke => write!(f, "invoke"),
            MethodKind::Query => write!(f, "query"),
        }
    }
}

// =============================================================================
// REQUEST-TIME ERRORS
// =============================================================================

/// Failure returned by a contract handler.
///
/// Handlers report failure through this type instead of panicking. The
/// message and optional data end up in the error envelope, so the root
/// cause survives the trip back to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct HandlerError {
    /// Human-readable failure description.
    pub message: String,
    /// Structured detail attached to the envelope's error `data`.
    pub data: Option<Value>,
}

impl HandlerError {
    /// Create a handler error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    /// Create a handler error carrying structured detail.
    pub fn with_data(message: impl Into<String>, data: Value) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl From<StateError> for HandlerError {
    fn from(err: StateError) -> Self {
        HandlerError::new(err.to_string())
    }
}

/// Errors produced while turning a raw payload into a completed call.
///
/// Resolution failures and execution failures both mean "the call did not
/// succeed", but they stay distinct kinds here and carry distinct codes on
/// the wire. Callers discriminate on the envelope `code`, never on message
/// text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// The payload was not a well-formed request object. No handler ran.
    #[error("malformed request: {reason}")]
    MalformedRequest { reason: String },

    /// No handler is registered under this name in the resolved table.
    #[error("method not found: {method}")]
    MethodNotFound { method: String, kind: MethodKind },

    /// The handler ran and reported failure.
    #[error("method {method} failed: {source}")]
    HandlerFailed {
        method: String,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// Shorthand for a malformed-request error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        DispatchError::MalformedRequest {
            reason: reason.into(),
        }
    }

    /// The stable wire code for this error kind.
    pub fn code(&self) -> i32 {
        use crate::domain::envelope::codes;
        match self {
            DispatchError::MalformedRequest { .. } => codes::INVALID_REQUEST,
            DispatchError::MethodNotFound { .. } => codes::METHOD_NOT_FOUND,
            DispatchError::HandlerFailed { .. } => codes::HANDLER_ERROR,
        }
    }
}

// =============================================================================
// CONSTRUCTION-TIME ERRORS
// =============================================================================

/// Fatal errors raised while constructing a contract instance.
///
/// Construction either completes fully or fails with one of these; a
/// partially-initialized shell (registry with missing handlers, unscoped
/// state) is never observable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructError {
    /// No metadata was supplied and the contract packages no descriptor.
    #[error("no metadata supplied and no packaged descriptor available")]
    DescriptorMissing,

    /// The descriptor text did not parse into valid metadata.
    #[error("contract descriptor invalid: {reason}")]
    DescriptorInvalid { reason: String },

    /// A descriptor file could not be read from disk.
    #[error("cannot read descriptor {path}: {reason}")]
    DescriptorUnreadable { path: String, reason: String },

    /// Two handlers were registered under the same name in the same set.
    #[error("duplicate {kind} method: {name}")]
    DuplicateMethod {
        name: &'static str,
        kind: MethodKind,
    },

    /// The metadata declares a method no handler was registered for.
    #[error("declared method {name} has no registered handler")]
    MissingHandler { name: String },

    /// The contract identifier cannot scope a state namespace.
    #[error("invalid contract identifier {id:?}: {reason}")]
    InvalidContractId { id: String, reason: &'static str },
}

// =============================================================================
// STATE ERRORS
// =============================================================================

/// Errors from state access operations.
///
/// Key absence is not an error; `StateStore::get` reports it as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    /// The underlying key-value engine failed.
    #[error("state backend error: {message}")]
    Backend { message: String },

    /// A stored value could not be encoded or decoded.
    #[error("state value for key {key:?}: {message}")]
    Serialization { key: String, message: String },
}

impl StateError {
    /// Wrap an engine-level failure.
    pub fn backend(message: impl Into<String>) -> Self {
        StateError::Backend {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
