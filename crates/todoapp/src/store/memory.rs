use super::mem_backend::MemBackend;
use super::todo_store::TodoStore;

pub type InMemoryStore = TodoStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        TodoStore::with_backend(MemBackend::new())
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.backend.set_simulate_write_error(simulate);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewTodo;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` todos titled "Todo 1".."Todo N" (ids 1..N).
        pub fn with_todos(self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .create(NewTodo::new(format!("Todo {}", i + 1)))
                    .unwrap();
            }
            self
        }

        pub fn with_todo(self, title: &str) -> Self {
            self.store.create(NewTodo::new(title)).unwrap();
            self
        }

        pub fn with_completed_todo(self, title: &str) -> Self {
            self.store
                .create(NewTodo::new(title).completed(true))
                .unwrap();
            self
        }
    }
}
