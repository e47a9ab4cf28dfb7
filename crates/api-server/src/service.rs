//! Task service
//!
//! Validation and dispatch between the HTTP layer and the task store.

use serde::Deserialize;
use thiserror::Error;

use tasklist_core::task::{NewTask, Task, TaskRepository};

/// Incoming create payload as decoded from the wire
///
/// Both fields are optional here so that absent or null inputs can be told
/// apart from real values and rejected by validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Field-level violations accumulated during validation
///
/// Messages have the shape `<field>: <reason>` and are joined in field
/// declaration order.
#[derive(Debug, Error)]
#[error("{}", .violations.join(", "))]
pub struct ValidationErrors {
    violations: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CreateTaskError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Storage(#[from] tasklist_core::Error),
}

/// Validation and dispatch layer over a task repository
pub struct TaskService<R> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List tasks, optionally filtered by completion flag
    pub async fn list(&self, completed: Option<bool>) -> tasklist_core::Result<Vec<Task>> {
        match completed {
            Some(flag) => self.repo.list_by_completed(flag).await,
            None => self.repo.list_all().await,
        }
    }

    /// Validate a create payload and insert the task
    pub async fn create(&self, req: CreateTaskRequest) -> Result<Task, CreateTaskError> {
        let task = validate(req)?;
        Ok(self.repo.insert(task).await?)
    }

    /// Remove every task; used by the test harness for isolation
    pub async fn clear(&self) -> tasklist_core::Result<()> {
        self.repo.delete_all().await
    }
}

/// Check required fields, accumulating violations in field order
///
/// The stored name is kept verbatim; trimming is only used to detect
/// whitespace-only input.
fn validate(req: CreateTaskRequest) -> Result<NewTask, ValidationErrors> {
    let mut violations = Vec::new();

    if req.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
        violations.push("name: must not be blank".to_string());
    }
    if req.completed.is_none() {
        violations.push("completed: must not be null".to_string());
    }

    match (req.name, req.completed) {
        (Some(name), Some(completed)) if violations.is_empty() => Ok(NewTask { name, completed }),
        _ => Err(ValidationErrors { violations }),
    }
}
