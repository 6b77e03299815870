//! # Response Envelope
//!
//! The fixed wire shape every call returns. Success carries `result`, failure
//! carries `error`; exactly one of the two is present, and the caller-supplied
//! correlation id is echoed verbatim (JSON `null` when the request had none).

use crate::domain::errors::DispatchError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Protocol version literal, fixed for every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Stable wire error codes.
///
/// Callers distinguish failure kinds by `code` alone; messages are
/// diagnostics, not contract.
pub mod codes {
    /// Payload was not a well-formed request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method name absent from the resolved handler table.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Handler executed and reported failure.
    pub const HANDLER_ERROR: i32 = -32000;
    /// Two handlers registered under one name. Construction-time only,
    /// never wire-visible.
    pub const DUPLICATE_METHOD: i32 = -32001;
}

/// The `error` member of a failure envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<&DispatchError> for ErrorObject {
    fn from(err: &DispatchError) -> Self {
        let data = match err {
            DispatchError::HandlerFailed { method, source } => Some(match &source.data {
                Some(detail) => json!({ "method": method, "detail": detail }),
                None => json!({ "method": method }),
            }),
            _ => None,
        };
        ErrorObject {
            code: err.code(),
            message: err.to_string(),
            data,
        }
    }
}

/// A complete response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

impl ResponseEnvelope {
    /// Build a success envelope around a handler's return value.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.unwrap_or(Value::Null),
            result: Some(result),
            error: None,
        }
    }

    /// Build an error envelope.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.unwrap_or(Value::Null),
            result: None,
            error: Some(ErrorObject {
                code,
                message: message.into(),
                data,
            }),
        }
    }

    /// Build an error envelope from a dispatch failure.
    pub fn failure(id: Option<Value>, err: &DispatchError) -> Self {
        let obj = ErrorObject::from(err);
        Self::error(id, obj.code, obj.message, obj.data)
    }

    /// True when this envelope carries a result.
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Serialize for the host.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================
