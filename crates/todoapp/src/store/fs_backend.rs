use super::backend::StorageBackend;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Keeps the collection as one pretty-printed JSON array in a single file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Makes sure the backing file exists, creating parent directories and an
    /// empty array if it does not. An existing file is never touched.
    pub fn ensure_collection(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        log::debug!("Creating empty collection at {}", self.path.display());
        self.write_all(&[])
    }

    /// Reads and parses the full collection. A blank file is an empty collection.
    pub fn read_all(&self) -> Result<Vec<Todo>> {
        self.ensure_collection()?;
        let content = fs::read_to_string(&self.path).map_err(TodoError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let todos: Vec<Todo> = serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(todos)
    }

    /// Replaces the file with `todos`, pretty-printed.
    pub fn write_all(&self, todos: &[Todo]) -> Result<()> {
        let content = serde_json::to_string_pretty(todos).map_err(TodoError::Serialization)?;
        replace_file(&self.path, &content)
    }
}

impl StorageBackend for FsBackend {
    fn load_todos(&self) -> Result<Vec<Todo>> {
        self.read_all()
    }

    fn save_todos(&self, todos: &[Todo]) -> Result<()> {
        self.write_all(todos)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(TodoError::Io)?;
    }
    Ok(())
}

/// Atomically replaces `path` with `content`: write a sibling temp file, then
/// rename it over the target.
pub(crate) fn replace_file(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    ensure_dir(dir)?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TodoError::Store(format!("Not a file path: {}", path.display())))?;
    let tmp_file = dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));

    fs::write(&tmp_file, content).map_err(TodoError::Io)?;
    if let Err(e) = fs::rename(&tmp_file, path) {
        let _ = fs::remove_file(&tmp_file);
        return Err(TodoError::Io(e));
    }
    Ok(())
}
