use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoId, TodoPatch};
use crate::store::DataStore;
use serde_json::Value;

/// Reads an update payload. It must be an object; `id` and unknown fields
/// are dropped, known fields must have the right types.
pub fn parse_patch(payload: Value) -> Result<TodoPatch> {
    if !payload.is_object() {
        return Err(TodoError::Validation(
            "Update must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(payload)
        .map_err(|e| TodoError::Validation(format!("Invalid update: {}", e)))
}

pub fn run<S: DataStore + ?Sized>(store: &S, id: TodoId, payload: Value) -> Result<Todo> {
    let patch = parse_patch(payload)?;
    store.update(id, patch)
}
