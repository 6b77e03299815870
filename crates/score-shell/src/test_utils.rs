//! Shared fixtures for unit tests: a tiny counter contract plus payload and
//! context builders.

use crate::domain::context::{Block, Transaction};
use crate::domain::errors::{ConstructError, HandlerError};
use crate::domain::registry::{HandlerResult, MethodRegistry, Params};
use crate::ports::inbound::Score;
use crate::ports::outbound::{KeyValueBackend, MemoryBackend};
use crate::store::StateStore;
use serde_json::json;
use std::sync::Arc;

pub const ZERO_HASH: [u8; 32] = [0; 32];

/// A counter contract: `add` accumulates into state, `total` reads it back,
/// `fail` always reports a handler error.
pub struct Counter {
    pub store: StateStore,
}

impl Counter {
    pub fn open(backend: Arc<dyn KeyValueBackend>, contract_id: &str) -> Self {
        Self {
            store: StateStore::open(backend, contract_id).unwrap(),
        }
    }

    pub fn in_memory(contract_id: &str) -> Self {
        Self::open(Arc::new(MemoryBackend::new()), contract_id)
    }

    pub fn total(&self) -> i64 {
        self.store.get_json::<i64>("total").unwrap().unwrap_or(0)
    }
}

fn invoke_add(
    contract: &mut Counter,
    _transaction: &Transaction,
    _block: &Block,
    params: &Params,
) -> HandlerResult {
    let amount = params
        .get("amount")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| HandlerError::new("amount must be an integer"))?;
    let total = contract.total() + amount;
    contract.store.put_json("total", &total)?;
    Ok(json!({ "total": total }))
}

fn query_total(contract: &Counter, _params: &Params) -> HandlerResult {
    Ok(json!({ "total": contract.total() }))
}

fn invoke_fail(
    _contract: &mut Counter,
    _transaction: &Transaction,
    _block: &Block,
    _params: &Params,
) -> HandlerResult {
    Err(HandlerError::with_data("intentional failure", json!({"hint": "fixture"})))
}

impl Score for Counter {
    const DESCRIPTOR: Option<&'static str> =
        Some(r#"{"name": "counter", "version": "0.1.0", "methods": ["add", "total"]}"#);

    fn register(registry: &mut MethodRegistry<Self>) -> Result<(), ConstructError> {
        registry.register_invoke("add", invoke_add)?;
        registry.register_invoke("fail", invoke_fail)?;
        registry.register_query("total", query_total)?;
        Ok(())
    }
}

/// A transaction whose data is a request payload for `method`.
pub fn tx(sender: &str, method: &str, params: serde_json::Value) -> Transaction {
    Transaction::new(
        sender,
        json!({ "method": method, "params": params }).to_string(),
        ZERO_HASH,
    )
}

/// A transaction carrying an arbitrary raw payload.
pub fn raw_tx(payload: &str) -> Transaction {
    Transaction::new("hx0", payload, ZERO_HASH)
}

pub fn block(height: u64) -> Block {
    Block::new(height, 1_700_000_000 + height, [height as u8; 32])
}
