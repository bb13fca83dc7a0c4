// In-memory task store: the only owner of task state

use crate::task::{EditTask, Task, TaskId};
use thiserror::Error;
use tracing::{debug, info};

/// Errors reported by the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a task titled \"{title}\" already exists")]
    DuplicateTitle { title: String },
}

/// Ordered collection of tasks with the legal mutation paths
///
/// Insertion order is preserved. Operations on an unknown id are silent
/// no-ops; the returned `bool` only tells the caller whether anything changed.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new task, rejecting an exact title match
    pub fn add(&mut self, title: &str) -> Result<TaskId, StoreError> {
        if self.tasks.iter().any(|task| task.title == title) {
            debug!(title, "Rejecting duplicate title");
            return Err(StoreError::DuplicateTitle {
                title: title.to_string(),
            });
        }

        let task = Task::new(title);
        let id = task.id;
        self.tasks.push(task);

        info!(%id, title, count = self.tasks.len(), "Task added");
        Ok(id)
    }

    /// Flip the done flag of the task with `id`
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.done = !task.done;
                debug!(%id, done = task.done, "Task toggled");
                true
            }
            None => {
                debug!(%id, "Toggle ignored, no such task");
                false
            }
        }
    }

    /// Rename a task. Titles of other tasks are not checked.
    pub fn edit(&mut self, request: EditTask) -> bool {
        let EditTask { task_id, new_title } = request;

        match self.find_mut(task_id) {
            Some(task) => {
                debug!(id = %task_id, old = %task.title, new = %new_title, "Task renamed");
                task.title = new_title;
                true
            }
            None => {
                debug!(id = %task_id, "Edit ignored, no such task");
                false
            }
        }
    }

    /// Remove a task, keeping the relative order of the rest
    pub fn remove(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                let removed = self.tasks.remove(index);
                info!(%id, title = %removed.title, count = self.tasks.len(), "Task removed");
                true
            }
            None => {
                debug!(%id, "Remove ignored, no such task");
                false
            }
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// All tasks in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Id of the task shown at 1-based display `position`
    pub fn id_at(&self, position: usize) -> Option<TaskId> {
        position
            .checked_sub(1)
            .and_then(|index| self.tasks.get(index))
            .map(|task| task.id)
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}
