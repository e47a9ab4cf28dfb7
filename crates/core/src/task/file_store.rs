//! File-based task storage implementation
//!
//! Stores tasks as JSON in a file on disk.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

use super::model::{NewTask, Task};
use super::repository::TaskRepository;
use crate::Result;

struct StoreState {
    /// Live tasks, in insertion order
    tasks: Vec<Task>,
    /// Next id to assign; monotonic for the process lifetime
    next_id: u64,
}

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks: Vec<Task> = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;

        Ok(Self {
            path,
            state: RwLock::new(StoreState { tasks, next_id }),
        })
    }

    /// Persist the in-memory tasks to disk
    async fn persist(&self) -> Result<()> {
        let state = self.state.read().await;
        let content = serde_json::to_string_pretty(&state.tasks)?;
        drop(state);

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn insert(&self, task: NewTask) -> Result<Task> {
        let stored = {
            let mut state = self.state.write().await;
            let stored = Task {
                id: state.next_id,
                name: task.name,
                completed: task.completed,
            };
            state.next_id += 1;
            state.tasks.push(stored.clone());
            stored
        };
        self.persist().await?;
        tracing::debug!(id = stored.id, "task inserted");
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.clone())
    }

    async fn list_by_completed(&self, completed: bool) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.completed == completed)
            .cloned()
            .collect())
    }

    async fn delete_all(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            // next_id is left alone so ids are never reused in-process
            state.tasks.clear();
        }
        self.persist().await?;
        Ok(())
    }
}
