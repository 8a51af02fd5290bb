//! One-time seed sources for an empty local store.

use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A read-only source of starter todos.
pub trait SeedSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Todo>>;

    /// Human readable origin, for logs.
    fn describe(&self) -> String;
}

/// Fetches a JSON array of todos over HTTP, e.g. from
/// `https://jsonplaceholder.typicode.com/todos?_limit=10`.
///
/// Uses the blocking reqwest client with no request timeout, so it must be
/// called off the async executor (the server runs store calls on the blocking
/// pool).
pub struct HttpSeed {
    url: String,
}

impl HttpSeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl SeedSource for HttpSeed {
    fn fetch(&self) -> Result<Vec<Todo>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| TodoError::Seed(format!("HTTP client setup failed: {}", e)))?;
        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| TodoError::Seed(format!("GET {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TodoError::Seed(format!(
                "GET {} returned {}",
                self.url, status
            )));
        }

        response
            .json::<Vec<Todo>>()
            .map_err(|e| TodoError::Seed(format!("Invalid seed from {}: {}", self.url, e)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Seeds from a fixed list and counts how often it was asked.
#[derive(Default)]
pub struct StaticSeed {
    todos: Vec<Todo>,
    fetches: AtomicUsize,
    fail: bool,
}

impl StaticSeed {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }

    /// A source whose every fetch fails, like an unreachable remote.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl SeedSource for StaticSeed {
    fn fetch(&self) -> Result<Vec<Todo>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TodoError::Seed("Seed source unavailable".to_string()));
        }
        Ok(self.todos.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} todos)", self.todos.len())
    }
}

impl<T: SeedSource + ?Sized> SeedSource for std::sync::Arc<T> {
    fn fetch(&self) -> Result<Vec<Todo>> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
