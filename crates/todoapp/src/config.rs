//! # Configuration
//!
//! Configuration is loaded with [`confique`], layering sources in priority
//! order:
//! 1. **Programmatic overrides**: the CLI applies its flags after loading.
//! 2. **Environment variables**: `TODO_BACKEND`, `TODO_DATA_FILE`, etc.
//! 3. **Config file**: `todo.toml`, either passed explicitly or found in the
//!    OS-appropriate config directory (via `directories`).
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `backend` | `TODO_BACKEND` | `file` | `file` or `local` |
//! | `data_file` | `TODO_DATA_FILE` | `data/todos.json` | File backend location |
//! | `storage_file` | `TODO_STORAGE_FILE` | `data/local-storage.json` | Local backend storage |
//! | `storage_key` | `TODO_STORAGE_KEY` | `todos` | Slot holding the collection |
//! | `seed_url` | `TODO_SEED_URL` | unset | One-time seed for an empty slot |
//! | `bind` | `TODO_BIND` | `127.0.0.1` | Server bind address |
//! | `port` | `TODO_PORT` | `3000` | Server port |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "todo.toml";

/// Which persistence the store uses.
///
/// (De)serialized through its string form so config files, environment
/// variables and compiled defaults all read it the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BackendKind {
    /// One JSON array in `data_file`.
    File,
    /// One key (`storage_key`) of the key-value file `storage_file`.
    Local,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::File => "file",
            BackendKind::Local => "local",
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(BackendKind::File),
            "local" => Ok(BackendKind::Local),
            other => Err(format!(
                "unknown backend {:?} (expected \"file\" or \"local\")",
                other
            )),
        }
    }
}

impl TryFrom<String> for BackendKind {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BackendKind> for String {
    fn from(kind: BackendKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Storage backend: "file" or "local"
    #[config(default = "file", env = "TODO_BACKEND")]
    pub backend: BackendKind,

    /// JSON array file used by the file backend
    #[config(default = "data/todos.json", env = "TODO_DATA_FILE")]
    pub data_file: PathBuf,

    /// Key-value file used by the local backend
    #[config(default = "data/local-storage.json", env = "TODO_STORAGE_FILE")]
    pub storage_file: PathBuf,

    /// Key under which the local backend keeps the collection
    #[config(default = "todos", env = "TODO_STORAGE_KEY")]
    pub storage_key: String,

    /// Seed source for an empty local slot,
    /// e.g. "https://jsonplaceholder.typicode.com/todos?_limit=10"
    #[config(env = "TODO_SEED_URL")]
    pub seed_url: Option<String>,

    /// Address the HTTP server binds to
    #[config(default = "127.0.0.1", env = "TODO_BIND")]
    pub bind: String,

    /// Port the HTTP server listens on
    #[config(default = 3000, env = "TODO_PORT")]
    pub port: u16,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            data_file: PathBuf::from("data/todos.json"),
            storage_file: PathBuf::from("data/local-storage.json"),
            storage_key: "todos".to_string(),
            seed_url: None,
            bind: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl TodoConfig {
    /// Loads environment, then `file` (a missing file is fine), then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = TodoConfig::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Base URL a client uses to reach a server started with this config.
    pub fn server_url(&self) -> String {
        let host = match self.bind.as_str() {
            "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }
}

/// `<os config dir>/todo.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "todo", "todo").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
