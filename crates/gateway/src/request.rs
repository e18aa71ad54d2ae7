//! Inbound request shapes and normalization.
//!
//! Requests arrive in one of two shapes: wrapped (a `body` field holding a
//! JSON-encoded text string, the HTTP-proxy style) or direct (the request
//! object itself). A discriminated parse step produces one normalized
//! internal request before any routing happens.

use serde_json::{Map, Value};

use crate::error::GatewayError;

/// Requested product operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Case-insensitive parse; anything else (including absent, passed as
    /// "") names the unsupported operation.
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        let upper = raw.to_uppercase();
        match upper.as_str() {
            "CREATE" => Ok(Operation::Create),
            "UPDATE" => Ok(Operation::Update),
            "DELETE" => Ok(Operation::Delete),
            _ => Err(GatewayError::bad_request(format!(
                "Unsupported operation: {upper}. Must be one of: CREATE, UPDATE, DELETE"
            ))),
        }
    }
}

/// One normalized request, whichever shape it arrived in.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub operation: Operation,
    /// Raw identifier string; format-checked by the operation that needs it.
    pub product_id: Option<String>,
    /// Raw product payload; empty object when absent so field-presence
    /// validation reports the first missing field.
    pub product: Map<String, Value>,
}

/// Normalize a raw invocation payload into an [`OperationRequest`].
pub fn normalize(raw: &Value) -> Result<OperationRequest, GatewayError> {
    let decoded;
    let request = match raw.get("body").and_then(Value::as_str) {
        Some(text) => {
            decoded = serde_json::from_str::<Value>(text).map_err(|e| {
                GatewayError::bad_request(format!("Invalid JSON in request body: {e}"))
            })?;
            &decoded
        }
        None => raw,
    };

    let operation = Operation::parse(
        request
            .get("operation")
            .and_then(Value::as_str)
            .unwrap_or(""),
    )?;

    Ok(OperationRequest {
        operation,
        product_id: request
            .get("productId")
            .and_then(Value::as_str)
            .map(str::to_string),
        product: request
            .get("product")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
    })
}
