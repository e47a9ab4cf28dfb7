//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::{NewTask, Task};
use crate::Result;

/// Repository interface for task storage
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task, assigning it a fresh positive id
    async fn insert(&self, task: NewTask) -> Result<Task>;

    /// Get all tasks in insertion order
    async fn list_all(&self) -> Result<Vec<Task>>;

    /// Get tasks whose completion flag equals `completed`, in insertion order
    async fn list_by_completed(&self, completed: bool) -> Result<Vec<Task>>;

    /// Remove every task. Assigned ids are not reused afterwards.
    async fn delete_all(&self) -> Result<()>;
}
