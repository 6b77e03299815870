//! # Contract Metadata
//!
//! The immutable record describing a contract: name, version, and the
//! methods it declares. Loaded once at construction, either from an explicit
//! value supplied by the host or from the descriptor packaged with the
//! contract's own code, and read-only afterwards.

use crate::domain::errors::ConstructError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Conventional descriptor file name packaged next to a contract's code.
pub const PACKAGE_FILE: &str = "package.json";

/// Immutable contract descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMetadata {
    /// Contract name, non-empty.
    pub name: String,
    /// Contract version string.
    pub version: String,
    /// Method names the contract declares callable.
    pub methods: Vec<String>,
}

impl ContractMetadata {
    /// Parse descriptor text (the contents of a `package.json`).
    ///
    /// ## Errors
    ///
    /// `DescriptorInvalid` when the text is not valid JSON for this shape
    /// or the name is empty.
    pub fn from_descriptor(text: &str) -> Result<Self, ConstructError> {
        let metadata: ContractMetadata =
            serde_json::from_str(text).map_err(|e| ConstructError::DescriptorInvalid {
                reason: e.to_string(),
            })?;
        if metadata.name.is_empty() {
            return Err(ConstructError::DescriptorInvalid {
                reason: "name is empty".to_string(),
            });
        }
        Ok(metadata)
    }

    /// Read a descriptor file from disk. Used by hosts that manage contract
    /// packages as directories rather than compiled-in descriptors.
    ///
    /// ## Errors
    ///
    /// `DescriptorUnreadable` on I/O failure, `DescriptorInvalid` on
    /// malformed contents.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConstructError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConstructError::DescriptorUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_descriptor(&text)
    }

    /// True when `name` appears in the declared method list.
    pub fn declares(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m == name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
