//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use tasklist_core::task::FileTaskStore;

use crate::service::TaskService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    tasks: TaskService<FileTaskStore>,
}

impl AppState {
    /// Create a new AppState with the given data directory
    pub async fn new(data_dir: PathBuf) -> tasklist_core::Result<Self> {
        let tasks_path = data_dir.join("tasks.json");
        let store = FileTaskStore::new(tasks_path).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                tasks: TaskService::new(store),
            }),
        })
    }

    /// Get reference to the task service
    pub fn tasks(&self) -> &TaskService<FileTaskStore> {
        &self.inner.tasks
    }
}
