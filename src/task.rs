// Data model for tasks

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque task identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh identifier (UUID v7, time-ordered)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    pub created_at: i64,
}

impl Task {
    /// Build a new, not yet done task with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            done: false,
            created_at: now_ms(),
        }
    }
}

/// Edit request: rename the task with `task_id` to `new_title`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTask {
    pub task_id: TaskId,
    pub new_title: String,
}

impl EditTask {
    pub fn new(task_id: TaskId, new_title: impl Into<String>) -> Self {
        Self {
            task_id,
            new_title: new_title.into(),
        }
    }
}

/// Current timestamp in milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
