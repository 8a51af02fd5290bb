//! HTTP client for the todo API.
//!
//! One method per operation. Every call is a fresh round trip: reads send
//! `Cache-Control: no-store`, nothing is retried, nothing is cached. Any
//! non-success status collapses into [`ClientError::Failed`], carrying only
//! which operation failed.

use crate::model::{NewTodo, Todo, TodoPatch};
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Failed(&'static str),

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct TodoClient {
    http: reqwest::Client,
    base_url: String,
}

impl TodoClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: impl Display) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    pub async fn list(&self) -> ClientResult<Vec<Todo>> {
        let request = self
            .http
            .get(self.collection_url())
            .header(CACHE_CONTROL, "no-store");
        send(request, "Failed to fetch todos").await
    }

    pub async fn get(&self, id: impl Display) -> ClientResult<Todo> {
        let request = self
            .http
            .get(self.item_url(id))
            .header(CACHE_CONTROL, "no-store");
        send(request, "Failed to fetch todo").await
    }

    pub async fn create(&self, todo: &NewTodo) -> ClientResult<Todo> {
        let request = self.http.post(self.collection_url()).json(todo);
        send(request, "Failed to create todo").await
    }

    pub async fn update(&self, id: impl Display, patch: &TodoPatch) -> ClientResult<Todo> {
        let request = self.http.patch(self.item_url(id)).json(patch);
        send(request, "Failed to update todo").await
    }

    pub async fn delete(&self, id: impl Display) -> ClientResult<()> {
        let request = self
            .http
            .delete(self.item_url(id))
            .header(CONTENT_TYPE, "application/json");
        let _: serde_json::Value = send(request, "Failed to delete todo").await?;
        Ok(())
    }
}

async fn send<T: DeserializeOwned>(
    request: RequestBuilder,
    failure: &'static str,
) -> ClientResult<T> {
    let response: Response = request.send().await?;
    if !response.status().is_success() {
        log::debug!("{}: server answered {}", failure, response.status());
        return Err(ClientError::Failed(failure));
    }
    Ok(response.json::<T>().await?)
}
