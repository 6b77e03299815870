//! Host-owned execution context: the transaction and block handed to
//! `invoke`. The shell reads the transaction's payload and passes both
//! through to handlers unmodified.

use serde::{Deserialize, Serialize};

/// 32-byte hash.
pub type Hash = [u8; 32];

/// Seconds since the Unix epoch.
pub type Timestamp = u64;

/// A committed transaction as handed over by the host.
///
/// The shell only reads `data`, the serialized request payload. Everything
/// else is carried for handler code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    sender: String,
    data: String,
    block_hash: Hash,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, data: impl Into<String>, block_hash: Hash) -> Self {
        Self {
            sender: sender.into(),
            data: data.into(),
            block_hash,
        }
    }

    /// Address of the account that signed this transaction.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// The serialized request payload.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Hash of the block this transaction was committed in.
    pub fn block_hash(&self) -> &Hash {
        &self.block_hash
    }
}

/// Execution context for one committed block.
///
/// Passed through `invoke` unmodified; the dispatch core never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub height: u64,
    pub timestamp: Timestamp,
    pub hash: Hash,
}

impl Block {
    pub fn new(height: u64, timestamp: Timestamp, hash: Hash) -> Self {
        Self {
            height,
            timestamp,
            hash,
        }
    }
}
