//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every todo operation, whatever transport is in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: identifiers arrive as text (route parameters) and
//!   are parsed here with [`parse_id`]
//! - **Dispatches** to the matching command
//! - **Returns structured types** (`Result<Todo>`), never status codes
//!
//! ## Identifiers
//!
//! Text that does not start with digits resolves to no id at all. That is
//! reported as not-found rather than as bad input, exactly as if the id had
//! been looked up and missed.
//!
//! ## Generic Over DataStore
//!
//! `TodoApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TodoApi<Box<dyn DataStore>>`, built from configuration
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, TodoError};
use crate::model::{parse_id, Todo, TodoId};
use crate::store::DataStore;
use serde_json::Value;

/// The main API facade for todo operations.
pub struct TodoApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_todos(&self) -> Result<Vec<Todo>> {
        commands::list::run(&self.store)
    }

    pub fn get_todo(&self, id: &str) -> Result<Todo> {
        let id = resolve_id(id)?;
        commands::get::run(&self.store, id)
    }

    pub fn create_todo(&self, payload: Value) -> Result<Todo> {
        commands::create::run(&self.store, payload)
    }

    pub fn update_todo(&self, id: &str, payload: Value) -> Result<Todo> {
        let id = resolve_id(id)?;
        commands::update::run(&self.store, id, payload)
    }

    pub fn delete_todo(&self, id: &str) -> Result<()> {
        let id = resolve_id(id)?;
        commands::delete::run(&self.store, id)
    }
}

fn resolve_id(raw: &str) -> Result<TodoId> {
    parse_id(raw).ok_or_else(|| TodoError::NotFound(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    fn api_with(count: usize) -> TodoApi<InMemoryStore> {
        TodoApi::new(StoreFixture::new().with_todos(count).store)
    }

    #[test]
    fn get_parses_text_ids() {
        let api = api_with(3);
        assert_eq!(api.get_todo("2").unwrap().id, 2);
        assert_eq!(api.get_todo("2abc").unwrap().id, 2);
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        let api = api_with(3);
        assert_eq!(api.get_todo("abc").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(
            api.update_todo("abc", json!({"completed": true}))
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(api.delete_todo("").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(api.list_todos().unwrap().len(), 3);
    }

    #[test]
    fn create_dispatches_payload() {
        let api = api_with(0);
        let todo = api.create_todo(json!({"title": "Buy milk"})).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(api.list_todos().unwrap(), vec![todo]);
    }

    #[test]
    fn update_then_delete() {
        let api = api_with(2);
        let todo = api.update_todo("1", json!({"completed": true})).unwrap();
        assert!(todo.completed);

        api.delete_todo("1").unwrap();
        assert_eq!(api.get_todo("1").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(api.store().list().unwrap().len(), 1);
    }
}
