use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::{NewTodo, Todo, TodoId, TodoPatch};

pub struct TodoStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> TodoStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}

/// `max(existing ids) + 1`, or 1 for an empty collection. Gaps left by
/// deletions are never reused.
fn next_id(todos: &[Todo]) -> Result<TodoId> {
    match todos.iter().map(|t| t.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .map(|id| id.max(1))
            .ok_or_else(|| TodoError::Store("Todo id space exhausted".to_string())),
    }
}

fn not_found(id: TodoId) -> TodoError {
    TodoError::NotFound(id.to_string())
}

impl<B: StorageBackend> DataStore for TodoStore<B> {
    fn list(&self) -> Result<Vec<Todo>> {
        log::debug!("Listing todos from {}", self.backend.describe());
        self.backend.load_todos()
    }

    fn get(&self, id: TodoId) -> Result<Todo> {
        self.backend
            .load_todos()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(id))
    }

    fn create(&self, draft: NewTodo) -> Result<Todo> {
        let mut todos = self.backend.load_todos()?;
        let todo = draft.into_todo(next_id(&todos)?)?;

        // Newest first
        todos.insert(0, todo.clone());
        self.backend.save_todos(&todos)?;

        log::info!("Todo created ({}): {}", todo.id, todo.title);
        Ok(todo)
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        let mut todos = self.backend.load_todos()?;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(id))?;

        todo.apply(patch)?;
        let updated = todo.clone();
        self.backend.save_todos(&todos)?;

        log::debug!("Todo updated ({}): {}", updated.id, updated.title);
        Ok(updated)
    }

    fn delete(&self, id: TodoId) -> Result<()> {
        let mut todos = self.backend.load_todos()?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(not_found(id));
        }
        self.backend.save_todos(&todos)?;

        log::info!("Todo deleted ({})", id);
        Ok(())
    }
}
