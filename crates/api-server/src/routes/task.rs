//! Task API endpoints
//!
//! REST API for listing and creating tasks.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use tasklist_core::task::Task;

use crate::service::{CreateTaskError, CreateTaskRequest};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Raw query value; only the literals "true" and "false" are accepted
    #[serde(default)]
    pub completed: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResult {
    pub message: String,
}

type ErrorReply = (StatusCode, Json<ErrorResult>);

fn bad_request(message: impl Into<String>) -> ErrorReply {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResult {
            message: message.into(),
        }),
    )
}

fn internal_error(err: impl std::fmt::Display) -> ErrorReply {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResult {
            message: err.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks - List tasks, optionally filtered by completion flag
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, ErrorReply> {
    let completed = match query.completed.as_deref() {
        None => None,
        Some("true") => Some(true),
        Some("false") => Some(false),
        Some(other) => {
            return Err(bad_request(format!(
                "completed: must be 'true' or 'false', got '{other}'"
            )));
        }
    };

    let tasks = state.tasks().list(completed).await.map_err(internal_error)?;

    Ok(Json(tasks))
}

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ErrorReply> {
    // A body that does not decode at all is still answered with JSON
    let Json(req) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;

    match state.tasks().create(req).await {
        Ok(task) => Ok((StatusCode::CREATED, Json(task))),
        Err(CreateTaskError::Invalid(errors)) => Err(bad_request(errors.to_string())),
        Err(CreateTaskError::Storage(err)) => Err(internal_error(err)),
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new().route("/tasks", get(list_tasks).post(create_task))
}
