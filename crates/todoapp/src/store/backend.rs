use crate::error::Result;
use crate::model::Todo;

/// Abstract interface for raw collection I/O.
/// This trait handles the "how" of storage (file, key-value slot, memory),
/// while TodoStore handles the "what" (ids, merging, not-found).
pub trait StorageBackend: Send + Sync {
    /// Load the whole collection, in stored order.
    fn load_todos(&self) -> Result<Vec<Todo>>;

    /// Replace the whole collection.
    fn save_todos(&self, todos: &[Todo]) -> Result<()>;

    /// Human readable location, for logs.
    fn describe(&self) -> String;
}
