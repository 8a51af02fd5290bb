use crate::error::{Result, TodoError};
use crate::model::{NewTodo, Todo};
use crate::store::DataStore;
use serde_json::Value;

/// Reads a create payload: `title` must be present and a string, the rest
/// must have the right types when present.
pub fn parse_draft(payload: Value) -> Result<NewTodo> {
    match payload.get("title") {
        Some(Value::String(title)) if !title.trim().is_empty() => {}
        _ => return Err(TodoError::Validation("Title is required".to_string())),
    }
    serde_json::from_value(payload)
        .map_err(|e| TodoError::Validation(format!("Invalid todo: {}", e)))
}

pub fn run<S: DataStore + ?Sized>(store: &S, payload: Value) -> Result<Todo> {
    let draft = parse_draft(payload)?;
    store.create(draft)
}
