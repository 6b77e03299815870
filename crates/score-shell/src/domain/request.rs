//! # Request Parsing
//!
//! Turns a raw serialized payload into a validated `Request`. Every rule
//! here rejects the payload before any handler can run: an invalid request
//! must leave contract state provably untouched.

use crate::domain::errors::DispatchError;
use crate::domain::registry::Params;
use serde_json::Value;

/// A parsed call request: `{method, params}` plus an optional correlation id.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Caller-supplied correlation id, echoed verbatim in the response.
    pub id: Option<Value>,
    /// Handler name to resolve. Always a non-empty string.
    pub method: String,
    /// Named parameters for the handler.
    pub params: Params,
}

impl Request {
    /// Parse and validate a serialized payload.
    ///
    /// ## Errors
    ///
    /// `MalformedRequest` when the payload is not valid JSON, is not an
    /// object, has a missing / non-string / empty `method`, or has a
    /// missing or non-mapping `params`.
    pub fn from_payload(payload: &str) -> Result<Self, DispatchError> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| DispatchError::malformed(format!("payload is not valid JSON: {e}")))?;

        let object = value
            .as_object()
            .ok_or_else(|| DispatchError::malformed("payload is not a JSON object"))?;

        let method = match object.get("method") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::String(_)) => {
                return Err(DispatchError::malformed("method is empty"));
            }
            Some(_) => {
                return Err(DispatchError::malformed("method is not a string"));
            }
            None => {
                return Err(DispatchError::malformed("method is missing"));
            }
        };

        let params = match object.get("params") {
            Some(Value::Object(map)) => map.clone(),
            Some(_) => {
                return Err(DispatchError::malformed("params is not a mapping"));
            }
            None => {
                return Err(DispatchError::malformed("params is missing"));
            }
        };

        Ok(Self {
            id: object.get("id").cloned(),
            method,
            params,
        })
    }

    /// Best-effort id extraction from a payload that failed validation, so
    /// even a malformed-request envelope can echo the caller's id.
    pub fn salvage_id(payload: &str) -> Option<Value> {
        serde_json::from_str::<Value>(payload)
            .ok()?
            .get("id")
            .cloned()
    }
}

// =============================================================================
// TESTS
// =============================================================================
