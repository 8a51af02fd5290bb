use super::kv_backend::{FileKvStorage, KvBackend};
use super::seed::HttpSeed;
use super::todo_store::TodoStore;
use std::path::Path;

/// Key-value backed todo store, the server-side counterpart of keeping the
/// list in browser local storage.
pub type LocalStore = TodoStore<KvBackend<FileKvStorage>>;

impl LocalStore {
    /// Opens the slot `key` in the storage file at `path`, seeding it from
    /// `seed_url` on first read when the slot is empty.
    pub fn open(path: impl AsRef<Path>, key: &str, seed_url: Option<&str>) -> Self {
        let mut backend = KvBackend::new(FileKvStorage::new(path.as_ref()), key);
        if let Some(url) = seed_url {
            backend = backend.with_seed(HttpSeed::new(url));
        }
        TodoStore::with_backend(backend)
    }
}
