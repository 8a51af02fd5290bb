//! HTTP surface over [`TodoApi`].
//!
//! ```text
//!   GET    /todos        -> list all todos                 200 | 500
//!   POST   /todos        -> create a todo                  201 | 400 | 500
//!   GET    /todos/{id}   -> one todo                       200 | 404 | 500
//!   PATCH  /todos/{id}   -> merge fields over a todo       200 | 400 | 404 | 500
//!   DELETE /todos/{id}   -> remove a todo, {"success":true} 200 | 404 | 500
//! ```
//!
//! Error kinds are translated to status codes in exactly one place,
//! [`status_for`]. Store calls run on the blocking pool; nothing serializes
//! them, so overlapping writes race and the last full rewrite wins.

use crate::api::TodoApi;
use crate::commands::helpers::decode_payload;
use crate::error::{ErrorKind, Result, TodoError};
use crate::model::Todo;
use crate::store::DataStore;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

pub type DynApi = TodoApi<Box<dyn DataStore>>;
pub type SharedApi = Arc<DynApi>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Maps an error kind to the status code a client sees.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A failed request: status plus a short message. Internal causes are logged
/// and replaced by the operation's generic failure message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(err: TodoError, failure: &'static str) -> Self {
        let kind = err.kind();
        let status = status_for(kind);
        let message = match kind {
            ErrorKind::Validation => err.to_string(),
            ErrorKind::NotFound => "Not found".to_string(),
            ErrorKind::Internal => failure.to_string(),
        };

        if status.is_server_error() {
            log::error!(target: "todo::http", "{}: {}", failure, err);
        } else {
            log::warn!(target: "todo::http", "{} ({})", err, status);
        }

        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                message: self.message,
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = std::result::Result<T, ApiError>;

/// Runs `op` against the API on the blocking pool.
async fn run_blocking<T, F>(api: SharedApi, failure: &'static str, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&DynApi) -> Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(move || op(api.as_ref())).await {
        Ok(result) => result.map_err(|e| ApiError::new(e, failure)),
        Err(e) => Err(ApiError::new(
            TodoError::Store(format!("Worker task failed: {}", e)),
            failure,
        )),
    }
}

async fn list_todos(State(api): State<SharedApi>) -> ApiResult<Json<Vec<Todo>>> {
    run_blocking(api, "Failed to load todos", |api| api.list_todos())
        .await
        .map(Json)
}

async fn create_todo(
    State(api): State<SharedApi>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let todo = run_blocking(api, "Failed to create todo", move |api| {
        api.create_todo(decode_payload(&body)?)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
) -> ApiResult<Json<Todo>> {
    run_blocking(api, "Failed to get todo", move |api| api.get_todo(&id))
        .await
        .map(Json)
}

async fn update_todo(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Todo>> {
    run_blocking(api, "Failed to update todo", move |api| {
        api.update_todo(&id, decode_payload(&body)?)
    })
    .await
    .map(Json)
}

async fn delete_todo(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    run_blocking(api, "Failed to delete todo", move |api| api.delete_todo(&id)).await?;
    Ok(Json(SuccessResponse { success: true }))
}

pub fn router(api: SharedApi) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(api)
}

/// Serves the API on `listener` until the process stops.
pub async fn serve(listener: TcpListener, api: SharedApi) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    log::info!("HTTP server listening on http://{}", addr);
    axum::serve(listener, router(api)).await
}
