use super::fs_backend::FsBackend;
use super::todo_store::TodoStore;
use std::path::Path;

/// File-backed todo store.
///
/// This is a type alias for `TodoStore<FsBackend>`: the CRUD logic is shared
/// with every other store, only the persistence differs.
pub type FileStore = TodoStore<FsBackend>;

impl FileStore {
    /// Opens the store at `path`. Nothing is created until the first access.
    pub fn open(path: impl AsRef<Path>) -> Self {
        TodoStore::with_backend(FsBackend::new(path.as_ref()))
    }

    pub fn path(&self) -> &Path {
        self.backend.path()
    }
}
