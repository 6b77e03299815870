//! # ScoreEx
//!
//! Example SCORE contract: a minimal asset ledger. Two invoke methods move
//! and create balance (`transfer`, `mint`), two query methods read it back
//! (`balance`, `supply`). Balances live in the contract's state store under
//! `bal:{address}`; the total supply under `supply`.
//!
//! The contract ships its own descriptor (`package.json`), so hosts can
//! construct it without supplying metadata:
//!
//! ```ignore
//! let store = StateStore::open(backend, "scoreex_db")?;
//! let shell = ContractShell::new(ScoreEx::new(store), None)?;
//! ```

use score_shell::{
    Block, ConstructError, HandlerError, HandlerResult, MethodRegistry, Params, Score, StateStore,
    Transaction,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// Ledger-level failures. Converted into handler errors at the method
/// boundary, so callers see them as code -32000 envelopes with the cause
/// preserved in `data`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Sender balance cannot cover the transfer.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: u64, need: u64 },

    /// Amounts must be positive integers.
    #[error("amount must be a positive integer")]
    InvalidAmount,

    /// A required parameter is absent or has the wrong type.
    #[error("parameter {name} is missing or not a {expected}")]
    BadParam {
        name: &'static str,
        expected: &'static str,
    },

    /// State access failed underneath the ledger.
    #[error("{0}")]
    State(String),
}

impl From<LedgerError> for HandlerError {
    fn from(err: LedgerError) -> Self {
        let data = match &err {
            LedgerError::InsufficientBalance { have, need } => {
                Some(json!({ "have": have, "need": need }))
            }
            _ => None,
        };
        match data {
            Some(data) => HandlerError::with_data(err.to_string(), data),
            None => HandlerError::new(err.to_string()),
        }
    }
}

impl From<score_shell::StateError> for LedgerError {
    fn from(err: score_shell::StateError) -> Self {
        LedgerError::State(err.to_string())
    }
}

fn param_str<'a>(params: &'a Params, name: &'static str) -> Result<&'a str, LedgerError> {
    params
        .get(name)
        .and_then(Value::as_str)
        .ok_or(LedgerError::BadParam {
            name,
            expected: "string",
        })
}

fn param_amount(params: &Params) -> Result<u64, LedgerError> {
    let amount = params
        .get("amount")
        .and_then(Value::as_u64)
        .ok_or(LedgerError::BadParam {
            name: "amount",
            expected: "non-negative integer",
        })?;
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(amount)
}

/// The example asset-ledger contract.
pub struct ScoreEx {
    store: StateStore,
}

impl ScoreEx {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }

    /// The state store this instance is scoped to.
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    fn balance_key(address: &str) -> String {
        format!("bal:{address}")
    }

    /// Current balance of `address`; absent accounts hold zero.
    pub fn balance_of(&self, address: &str) -> Result<u64, LedgerError> {
        Ok(self
            .store
            .get_json::<u64>(&Self::balance_key(address))?
            .unwrap_or(0))
    }

    /// Total minted supply.
    pub fn supply(&self) -> Result<u64, LedgerError> {
        Ok(self.store.get_json::<u64>("supply")?.unwrap_or(0))
    }

    fn set_balance(&mut self, address: &str, amount: u64) -> Result<(), LedgerError> {
        let key = Self::balance_key(address);
        if amount == 0 {
            self.store.delete(&key)?;
        } else {
            self.store.put_json(&key, &amount)?;
        }
        Ok(())
    }

    fn credit(&mut self, address: &str, amount: u64) -> Result<(), LedgerError> {
        let balance = self.balance_of(address)?.saturating_add(amount);
        self.set_balance(address, balance)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

fn invoke_transfer(
    contract: &mut ScoreEx,
    transaction: &Transaction,
    _block: &Block,
    params: &Params,
) -> HandlerResult {
    let to = param_str(params, "to")?;
    let amount = param_amount(params)?;
    let from = transaction.sender();

    let have = contract.balance_of(from)?;
    if have < amount {
        return Err(LedgerError::InsufficientBalance { have, need: amount }.into());
    }

    contract.set_balance(from, have - amount)?;
    contract.credit(to, amount)?;
    debug!(from, to, amount, "transfer");

    Ok(json!({ "ok": true }))
}

fn invoke_mint(
    contract: &mut ScoreEx,
    _transaction: &Transaction,
    _block: &Block,
    params: &Params,
) -> HandlerResult {
    let to = param_str(params, "to")?;
    let amount = param_amount(params)?;

    contract.credit(to, amount)?;
    let supply = contract.supply()?.saturating_add(amount);
    contract.store.put_json("supply", &supply)?;
    debug!(to, amount, supply, "mint");

    Ok(json!({ "ok": true }))
}

fn query_balance(contract: &ScoreEx, params: &Params) -> HandlerResult {
    let address = param_str(params, "address")?;
    let balance = contract.balance_of(address)?;
    Ok(json!({ "balance": balance }))
}

fn query_supply(contract: &ScoreEx, _params: &Params) -> HandlerResult {
    Ok(json!({ "supply": contract.supply()? }))
}

impl Score for ScoreEx {
    const DESCRIPTOR: Option<&'static str> = Some(include_str!("../package.json"));

    fn register(registry: &mut MethodRegistry<Self>) -> Result<(), ConstructError> {
        registry.register_invoke("transfer", invoke_transfer)?;
        registry.register_invoke("mint", invoke_mint)?;
        registry.register_query("balance", query_balance)?;
        registry.register_query("supply", query_supply)?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
