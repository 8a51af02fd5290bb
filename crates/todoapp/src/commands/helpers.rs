use crate::error::{Result, TodoError};
use serde_json::Value;

/// Decodes a request body. An empty body is `null`, so it fails the same
/// validation as a body without the expected fields.
pub fn decode_payload(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|e| TodoError::Validation(format!("Invalid JSON body: {}", e)))
}
