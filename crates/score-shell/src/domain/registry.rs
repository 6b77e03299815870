//! # Method Registry
//!
//! Late-bound dispatch from external string input to typed handler
//! references. The registry holds two disjoint tables, one for invoke
//! methods and one for query methods, built exactly once at contract
//! construction and immutable afterwards. Handlers are plain `fn` pointers,
//! so every entry is checked at compile time and identity never changes
//! after registration.

use crate::domain::context::{Block, Transaction};
use crate::domain::errors::{ConstructError, DispatchError, HandlerError, MethodKind};
use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Named parameters of a request.
pub type Params = serde_json::Map<String, Value>;

/// Outcome of one handler call.
pub type HandlerResult = Result<Value, HandlerError>;

/// A state-changing handler. Receives the contract mutably plus the full
/// transaction and block context.
pub type InvokeFn<C> = fn(&mut C, &Transaction, &Block, &Params) -> HandlerResult;

/// A read-only handler. The shared receiver is what keeps query handlers
/// away from state mutation.
pub type QueryFn<C> = fn(&C, &Params) -> HandlerResult;

/// Name-to-handler tables for one contract type.
pub struct MethodRegistry<C> {
    invoke: HashMap<&'static str, InvokeFn<C>>,
    query: HashMap<&'static str, QueryFn<C>>,
}

impl<C> MethodRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            invoke: HashMap::new(),
            query: HashMap::new(),
        }
    }

    /// Register a state-changing method.
    ///
    /// ## Errors
    ///
    /// `DuplicateMethod` when `name` is already present in the invoke set.
    pub fn register_invoke(
        &mut self,
        name: &'static str,
        handler: InvokeFn<C>,
    ) -> Result<(), ConstructError> {
        match self.invoke.entry(name) {
            Entry::Occupied(_) => Err(ConstructError::DuplicateMethod {
                name,
                kind: MethodKind::Invoke,
            }),
            Entry::Vacant(slot) => {
                slot.insert(handler);
                Ok(())
            }
        }
    }

    /// Register a read-only method.
    ///
    /// ## Errors
    ///
    /// `DuplicateMethod` when `name` is already present in the query set.
    pub fn register_query(
        &mut self,
        name: &'static str,
        handler: QueryFn<C>,
    ) -> Result<(), ConstructError> {
        match self.query.entry(name) {
            Entry::Occupied(_) => Err(ConstructError::DuplicateMethod {
                name,
                kind: MethodKind::Query,
            }),
            Entry::Vacant(slot) => {
                slot.insert(handler);
                Ok(())
            }
        }
    }

    /// Resolve an invoke method by name.
    ///
    /// ## Errors
    ///
    /// `MethodNotFound` when the name is absent from the invoke set. This
    /// is a distinct, caller-visible outcome from a handler that ran and
    /// failed.
    pub fn resolve_invoke(&self, name: &str) -> Result<InvokeFn<C>, DispatchError> {
        self.invoke
            .get(name)
            .copied()
            .ok_or_else(|| DispatchError::MethodNotFound {
                method: name.to_string(),
                kind: MethodKind::Invoke,
            })
    }

    /// Resolve a query method by name.
    pub fn resolve_query(&self, name: &str) -> Result<QueryFn<C>, DispatchError> {
        self.query
            .get(name)
            .copied()
            .ok_or_else(|| DispatchError::MethodNotFound {
                method: name.to_string(),
                kind: MethodKind::Query,
            })
    }

    /// True when `name` is registered in the given set.
    pub fn contains(&self, name: &str, kind: MethodKind) -> bool {
        match kind {
            MethodKind::Invoke => self.invoke.contains_key(name),
            MethodKind::Query => self.query.contains_key(name),
        }
    }

    /// Registered invoke method names, sorted for stable diagnostics.
    pub fn invoke_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.invoke.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered query method names, sorted for stable diagnostics.
    pub fn query_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.query.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<C> Default for MethodRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
