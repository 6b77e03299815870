//! # Dispatcher
//!
//! Turns a raw payload into a resolved handler call and a response envelope:
//! parse, resolve against the kind-correct registry, run the handler, wrap
//! the outcome. All three failure kinds stay distinct internally and carry
//! distinct codes on the wire:
//!
//! - malformed payload: rejected before any handler runs
//! - unknown method: a structured error response, not a fault
//! - handler failure: the root cause survives into the envelope's `data`
//!
//! Invoke calls read their payload from the transaction; query calls bring
//! their own payload and resolve against the query set only.

use crate::domain::context::{Block, Transaction};
use crate::domain::envelope::ResponseEnvelope;
use crate::domain::errors::DispatchError;
use crate::domain::registry::MethodRegistry;
use crate::domain::request::Request;
use tracing::{debug, warn};

/// Execute a state-changing call against the invoke registry.
pub fn dispatch_invoke<C>(
    registry: &MethodRegistry<C>,
    contract: &mut C,
    transaction: &Transaction,
    block: &Block,
) -> ResponseEnvelope {
    debug!(sender = transaction.sender(), height = block.height, "invoke begin");

    let payload = transaction.data();
    let request = match Request::from_payload(payload) {
        Ok(request) => request,
        Err(err) => {
            debug!(error = %err, "invoke rejected");
            return ResponseEnvelope::failure(Request::salvage_id(payload), &err);
        }
    };

    let handler = match registry.resolve_invoke(&request.method) {
        Ok(handler) => handler,
        Err(err) => {
            debug!(method = %request.method, "invoke method not found");
            return ResponseEnvelope::failure(request.id, &err);
        }
    };

    match handler(contract, transaction, block, &request.params) {
        Ok(result) => {
            debug!(method = %request.method, "invoke ok");
            ResponseEnvelope::success(request.id, result)
        }
        Err(source) => {
            let err = DispatchError::HandlerFailed {
                method: request.method,
                source,
            };
            warn!(error = %err, "invoke handler failed");
            ResponseEnvelope::failure(request.id, &err)
        }
    }
}

/// Execute a read-only call against the query registry.
pub fn dispatch_query<C>(
    registry: &MethodRegistry<C>,
    contract: &C,
    payload: &str,
) -> ResponseEnvelope {
    debug!("query begin");

    let request = match Request::from_payload(payload) {
        Ok(request) => request,
        Err(err) => {
            debug!(error = %err, "query rejected");
            return ResponseEnvelope::failure(Request::salvage_id(payload), &err);
        }
    };

    let handler = match registry.resolve_query(&request.method) {
        Ok(handler) => handler,
        Err(err) => {
            debug!(method = %request.method, "query method not found");
            return ResponseEnvelope::failure(request.id, &err);
        }
    };

    match handler(contract, &request.params) {
        Ok(result) => {
            debug!(method = %request.method, "query ok");
            ResponseEnvelope::success(request.id, result)
        }
        Err(source) => {
            let err = DispatchError::HandlerFailed {
                method: request.method,
                source,
            };
            warn!(error = %err, "query handler failed");
            ResponseEnvelope::failure(request.id, &err)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
