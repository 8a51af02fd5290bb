use super::backend::StorageBackend;
use super::fs_backend::replace_file;
use super::seed::SeedSource;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// String-keyed, string-valued persistent storage, shaped after browser
/// local storage.
pub trait KeyValueStorage: Send + Sync {
    /// Returns `Ok(None)` when the key has never been set.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Every key in one JSON object file: `{"todos": "[...]", ...}`.
pub struct FileKvStorage {
    path: PathBuf,
}

impl FileKvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_items(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TodoError::Io)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let items = serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(items)
    }

    fn save_items(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(items).map_err(TodoError::Serialization)?;
        replace_file(&self.path, &content)
    }
}

impl KeyValueStorage for FileKvStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.load_items()?;
        items.insert(key.to_string(), value.to_string());
        self.save_items(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.load_items()?;
        if items.remove(key).is_some() {
            self.save_items(&items)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryKvStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryKvStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| TodoError::Store("Key-value storage lock poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryKvStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items()?.remove(key);
        Ok(())
    }
}

/// Keeps the collection as a JSON string under a single key.
///
/// When the slot is empty on read and a seed source is configured, the seed
/// is fetched once and written into the slot before it is returned. A slot
/// that holds anything (even `[]`) is never re-seeded.
pub struct KvBackend<K: KeyValueStorage> {
    storage: K,
    key: String,
    seed: Option<Box<dyn SeedSource>>,
}

impl<K: KeyValueStorage> KvBackend<K> {
    pub fn new(storage: K, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: impl SeedSource + 'static) -> Self {
        self.seed = Some(Box::new(seed));
        self
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    fn seed_slot(&self) -> Result<Vec<Todo>> {
        let Some(seed) = &self.seed else {
            return Ok(Vec::new());
        };

        log::info!("Seeding {:?} from {}", self.key, seed.describe());
        let todos = clean_seed(seed.fetch()?);
        self.save_todos(&todos)?;
        log::info!("Seeded {:?} with {} todos", self.key, todos.len());
        Ok(todos)
    }
}

/// Keeps the first record for each id and drops records whose title is
/// blank; surviving titles are trimmed.
fn clean_seed(todos: Vec<Todo>) -> Vec<Todo> {
    let mut seen = HashSet::new();
    todos
        .into_iter()
        .filter_map(|mut todo| {
            let title = todo.title.trim();
            if title.is_empty() {
                log::warn!("Dropping seeded todo {} with a blank title", todo.id);
                return None;
            }
            if !seen.insert(todo.id) {
                log::warn!("Dropping seeded todo with duplicate id {}", todo.id);
                return None;
            }
            todo.title = title.to_string();
            Some(todo)
        })
        .collect()
}

impl<K: KeyValueStorage> StorageBackend for KvBackend<K> {
    fn load_todos(&self) -> Result<Vec<Todo>> {
        match self.storage.get_item(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => {
                let todos = serde_json::from_str(&raw).map_err(TodoError::Serialization)?;
                Ok(todos)
            }
            _ => self.seed_slot(),
        }
    }

    fn save_todos(&self, todos: &[Todo]) -> Result<()> {
        let raw = serde_json::to_string(todos).map_err(TodoError::Serialization)?;
        self.storage.set_item(&self.key, &raw)
    }

    fn describe(&self) -> String {
        format!("key-value slot {:?}", self.key)
    }
}
