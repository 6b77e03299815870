//! # State Store
//!
//! Durable per-contract key-value access. Every store is opened against a
//! host-provided engine with an explicit contract identifier, and every key
//! it touches is prefixed with that identifier internally. Two stores opened
//! with different identifiers never observe each other's entries, even when
//! their key strings collide; there is no ambient or global handle.
//!
//! Reads take `&self`, mutations take `&mut self`. Query handlers only ever
//! see a shared reference to their contract, so the compiler keeps read-only
//! calls away from `put` and `delete`.

use crate::domain::errors::{ConstructError, StateError};
use crate::ports::outbound::KeyValueBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::trace;

/// Tag in front of every state key, keeping contract state apart from
/// anything else the host stores in the same engine.
const NAMESPACE_TAG: &[u8] = b"s:";

/// Namespaced, typed access to one contract's persistent state.
pub struct StateStore {
    backend: Arc<dyn KeyValueBackend>,
    contract_id: String,
    prefix: Vec<u8>,
}

impl StateStore {
    /// Open a store scoped to `contract_id` on a shared engine.
    ///
    /// ## Errors
    ///
    /// `InvalidContractId` when the identifier is empty or contains `:`,
    /// which would let two identifiers alias one key range.
    pub fn open(
        backend: Arc<dyn KeyValueBackend>,
        contract_id: impl Into<String>,
    ) -> Result<Self, ConstructError> {
        let contract_id = contract_id.into();
        if contract_id.is_empty() {
            return Err(ConstructError::InvalidContractId {
                id: contract_id,
                reason: "identifier is empty",
            });
        }
        if contract_id.contains(':') {
            return Err(ConstructError::InvalidContractId {
                id: contract_id,
                reason: "identifier contains ':'",
            });
        }

        let mut prefix = NAMESPACE_TAG.to_vec();
        prefix.extend_from_slice(contract_id.as_bytes());
        prefix.push(b':');

        Ok(Self {
            backend,
            contract_id,
            prefix,
        })
    }

    /// The identifier this store is scoped to.
    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    fn full_key(&self, key: &str) -> Vec<u8> {
        let mut full = self.prefix.clone();
        full.extend_from_slice(key.as_bytes());
        full
    }

    /// Read a raw value. Absence is a normal outcome.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        self.backend.get(&self.full_key(key))
    }

    /// Write a raw value, visible to every later read in this and
    /// subsequent invocations.
    pub fn put(&mut self, key: &str, value: impl AsRef<[u8]>) -> Result<(), StateError> {
        let value = value.as_ref();
        trace!(contract = %self.contract_id, key, len = value.len(), "state put");
        self.backend.put(&self.full_key(key), value)
    }

    /// Remove an entry. Subsequent reads return absent.
    pub fn delete(&mut self, key: &str) -> Result<(), StateError> {
        trace!(contract = %self.contract_id, key, "state delete");
        self.backend.delete(&self.full_key(key))
    }

    /// Check whether an entry exists.
    pub fn exists(&self, key: &str) -> Result<bool, StateError> {
        self.backend.exists(&self.full_key(key))
    }

    /// Every key in this contract's namespace, prefix stripped, in order.
    pub fn keys(&self) -> Result<Vec<String>, StateError> {
        let entries = self.backend.prefix_scan(&self.prefix)?;
        Ok(entries
            .into_iter()
            .map(|(key, _)| String::from_utf8_lossy(&key[self.prefix.len()..]).into_owned())
            .collect())
    }

    /// Read a value and decode it as JSON.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StateError> {
        match self.get(key)? {
            Some(bytes) => {
                let value =
                    serde_json::from_slice(&bytes).map_err(|e| StateError::Serialization {
                        key: key.to_string(),
                        message: e.to_string(),
                    })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Encode a value as JSON and write it.
    pub fn put_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StateError> {
        let bytes = serde_json::to_vec(value).map_err(|e| StateError::Serialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.put(key, bytes)
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("contract_id", &self.contract_id)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
