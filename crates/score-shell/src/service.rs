//! # Contract Shell
//!
//! The lifecycle wrapper around a hosted contract. Construction resolves
//! metadata, builds the method registry, and validates that every declared
//! method has a handler; any failure aborts construction, so a shell that
//! exists is fully initialized. Afterwards the shell exposes exactly the
//! three host-facing operations: `info`, `invoke`, `query`.

use crate::dispatch::{dispatch_invoke, dispatch_query};
use crate::domain::context::{Block, Transaction};
use crate::domain::errors::{ConstructError, MethodKind};
use crate::domain::metadata::ContractMetadata;
use crate::domain::registry::MethodRegistry;
use crate::ports::inbound::{Score, ScoreApi};
use tracing::{error, info};

/// A contract instance wired to its registry and metadata.
pub struct ContractShell<C: Score> {
    metadata: ContractMetadata,
    registry: MethodRegistry<C>,
    contract: C,
}

impl<C: Score> ContractShell<C> {
    /// Construct a shell around `contract`.
    ///
    /// Metadata comes from `metadata` when supplied, otherwise from the
    /// contract's packaged descriptor.
    ///
    /// ## Errors
    ///
    /// - `DescriptorMissing` / `DescriptorInvalid`: no usable metadata
    /// - `DuplicateMethod`: a name registered twice within one set
    /// - `MissingHandler`: the metadata declares a method with no handler
    pub fn new(contract: C, metadata: Option<ContractMetadata>) -> Result<Self, ConstructError> {
        let metadata = match metadata {
            Some(metadata) => metadata,
            None => {
                let text = C::DESCRIPTOR.ok_or(ConstructError::DescriptorMissing)?;
                ContractMetadata::from_descriptor(text)?
            }
        };

        let mut registry = MethodRegistry::new();
        C::register(&mut registry)?;

        for name in &metadata.methods {
            if !registry.contains(name, MethodKind::Invoke)
                && !registry.contains(name, MethodKind::Query)
            {
                error!(contract = %metadata.name, method = %name, "declared method has no handler");
                return Err(ConstructError::MissingHandler { name: name.clone() });
            }
        }

        info!(
            contract = %metadata.name,
            version = %metadata.version,
            invoke_methods = registry.invoke_names().len(),
            query_methods = registry.query_names().len(),
            "contract constructed"
        );

        Ok(Self {
            metadata,
            registry,
            contract,
        })
    }

    /// The hosted contract.
    pub fn contract(&self) -> &C {
        &self.contract
    }
}

impl<C: Score> std::fmt::Debug for ContractShell<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractShell")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl<C: Score> ScoreApi for ContractShell<C> {
    fn info(&self) -> &ContractMetadata {
        &self.metadata
    }

    fn invoke(&mut self, transaction: &Transaction, block: &Block) -> String {
        dispatch_invoke(&self.registry, &mut self.contract, transaction, block).to_json()
    }

    fn query(&self, payload: &str) -> String {
        dispatch_query(&self.registry, &self.contract, payload).to_json()
    }
}

// =============================================================================
// TESTS
// =============================================================================
