//! Task model definitions

use serde::{Deserialize, Serialize};

/// A task in the list
///
/// Two tasks are equal when their id, name and completion flag all match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, strictly positive
    pub id: u64,
    pub name: String,
    pub completed: bool,
}

/// A task payload that has passed validation but has no id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub completed: bool,
}

impl NewTask {
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
        }
    }
}
