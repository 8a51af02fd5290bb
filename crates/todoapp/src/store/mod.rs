//! # Storage Layer
//!
//! This module defines the storage abstraction for todos. The [`DataStore`]
//! trait is the single interface every client works against; which backend
//! sits behind it is a configuration choice made once, in [`open`].
//!
//! ## Two Traits, Two Concerns
//!
//! - [`backend::StorageBackend`] handles the "how": loading and saving the whole
//!   collection from a file, a key-value slot, or memory.
//! - [`DataStore`] handles the "what": id assignment, prepending, merging,
//!   not-found detection. It is implemented once, by [`todo_store::TodoStore`],
//!   generic over the backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one pretty-printed JSON array in a file.
//! - [`local::LocalStore`]: one JSON string under a key of a key-value storage,
//!   optionally seeded once from a remote placeholder API.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Read-Modify-Write
//!
//! Every mutation loads the full collection, changes it, and saves the full
//! collection back. There is no locking: two overlapping writers race and the
//! later save wins. Collections are expected to stay small.
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//! ├── todos.json           # file backend: [{"id": 1, "title": ..., ...}]
//! └── local-storage.json   # local backend: {"todos": "[{...}]"}
//! ```

use crate::config::{BackendKind, TodoConfig};
use crate::error::Result;
use crate::model::{NewTodo, Todo, TodoId, TodoPatch};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod kv_backend;
pub mod local;
pub mod mem_backend;
pub mod memory;
pub mod seed;
pub mod todo_store;

/// Abstract interface for todo storage.
///
/// Every operation is independently fallible; the error's
/// [`kind`](crate::error::TodoError::kind) tells callers whether the input was
/// bad, the record was missing, or the store itself failed.
pub trait DataStore: Send + Sync {
    /// All todos, newest first
    fn list(&self) -> Result<Vec<Todo>>;

    /// Get a todo by id
    fn get(&self, id: TodoId) -> Result<Todo>;

    /// Create a todo, assigning the next id
    fn create(&self, draft: NewTodo) -> Result<Todo>;

    /// Merge `patch` over the stored todo and return the result
    fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo>;

    /// Remove a todo permanently
    fn delete(&self, id: TodoId) -> Result<()>;
}

impl<T: DataStore + ?Sized> DataStore for Box<T> {
    fn list(&self) -> Result<Vec<Todo>> {
        (**self).list()
    }

    fn get(&self, id: TodoId) -> Result<Todo> {
        (**self).get(id)
    }

    fn create(&self, draft: NewTodo) -> Result<Todo> {
        (**self).create(draft)
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: TodoId) -> Result<()> {
        (**self).delete(id)
    }
}

/// Builds the store selected by `config`.
pub fn open(config: &TodoConfig) -> Box<dyn DataStore> {
    match config.backend {
        BackendKind::File => {
            log::debug!("Using file store at {}", config.data_file.display());
            Box::new(fs::FileStore::open(&config.data_file))
        }
        BackendKind::Local => {
            log::debug!(
                "Using local store at {} (key {:?})",
                config.storage_file.display(),
                config.storage_key
            );
            Box::new(local::LocalStore::open(
                &config.storage_file,
                &config.storage_key,
                config.seed_url.as_deref(),
            ))
        }
    }
}
