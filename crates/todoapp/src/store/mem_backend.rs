use super::backend::StorageBackend;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory storage backend for testing. Shared across server worker threads.
#[derive(Default)]
pub struct MemBackend {
    todos: Mutex<Vec<Todo>>,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
            simulate_write_error: AtomicBool::new(false),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }
}

impl StorageBackend for MemBackend {
    fn load_todos(&self) -> Result<Vec<Todo>> {
        let todos = self
            .todos
            .lock()
            .map_err(|_| TodoError::Store("Memory backend lock poisoned".to_string()))?;
        Ok(todos.clone())
    }

    fn save_todos(&self, new_todos: &[Todo]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(TodoError::Store("Simulated write error".to_string()));
        }
        let mut todos = self
            .todos
            .lock()
            .map_err(|_| TodoError::Store("Memory backend lock poisoned".to_string()))?;
        *todos = new_todos.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory://todos".to_string()
    }
}
