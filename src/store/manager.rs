//! Task manager
//!
//! Business-logic layer between command dispatch and the store. Input
//! strings are trimmed here; an empty or whitespace-only title is rejected
//! before it ever reaches the store, so stored tasks always carry a
//! non-empty title.

use thiserror::Error;

use super::memory::TaskStore;
use crate::domain::{Task, TaskId};

#[derive(Debug, Error, PartialEq)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
}

/// Partial update for [`TaskManager::update`]
///
/// `None` means "leave the field unchanged"; `Some("")` for the description
/// is a real value and clears it. A `Some` title still has to survive
/// trimming.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Creates a patch that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title field
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description field
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion field
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Validation layer owning one [`TaskStore`]
#[derive(Debug, Default)]
pub struct TaskManager {
    store: TaskStore,
}

impl TaskManager {
    /// Creates a manager with an empty store
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
        }
    }

    /// Creates a task, returning a copy of the stored record
    pub fn create(&mut self, title: &str, description: &str) -> Result<Task, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        Ok(self.store.insert(title, description.trim()).clone())
    }

    /// Returns the task with the given id, if present
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Returns a fresh snapshot of all tasks in creation order
    pub fn list(&self) -> Vec<Task> {
        self.store.all()
    }

    /// Applies the provided fields to a task.
    ///
    /// Returns `Ok(false)` if the id is absent. A provided title that trims
    /// to empty fails validation before any field is applied.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<bool, TaskError> {
        let title = match &patch.title {
            Some(title) => {
                let title = title.trim();
                if title.is_empty() {
                    return Err(TaskError::EmptyTitle);
                }
                Some(title.to_string())
            }
            None => None,
        };

        let Some(task) = self.store.get_mut(id) else {
            return Ok(false);
        };

        if let Some(title) = title {
            task.set_title(title);
        }
        if let Some(description) = patch.description {
            task.set_description(description.trim());
        }
        if let Some(completed) = patch.completed {
            task.set_completed(completed);
        }

        Ok(true)
    }

    /// Removes a task; returns whether it existed
    pub fn delete(&mut self, id: TaskId) -> bool {
        self.store.remove(id)
    }

    /// Sets `completed` to true; returns false if the id is absent
    pub fn mark_completed(&mut self, id: TaskId) -> bool {
        self.set_completed(id, true)
    }

    /// Sets `completed` to false; returns false if the id is absent
    pub fn mark_incomplete(&mut self, id: TaskId) -> bool {
        self.set_completed(id, false)
    }

    fn set_completed(&mut self, id: TaskId, completed: bool) -> bool {
        match self.store.get_mut(id) {
            Some(task) => {
                task.set_completed(completed);
                true
            }
            None => false,
        }
    }

    /// Number of stored tasks
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if no tasks are stored
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_trims_and_assigns_ids() {
        let mut manager = TaskManager::new();

        let task = manager.create("  Buy milk  ", "  2% milk  ").unwrap();
        assert_eq!(task.id.value(), 1);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2% milk");

        let second = manager.create("Next", "").unwrap();
        assert_eq!(second.id.value(), 2);
    }

    #[test]
    fn create_rejects_empty_title() {
        let mut manager = TaskManager::new();
        assert_eq!(manager.create("", ""), Err(TaskError::EmptyTitle));
        assert_eq!(manager.create("   ", ""), Err(TaskError::EmptyTitle));
        assert!(manager.is_empty());
    }

    #[test]
    fn delete_then_get_yields_absence() {
        let mut manager = TaskManager::new();
        let id = manager.create("Task", "").unwrap().id;

        assert!(manager.delete(id));
        assert!(manager.get(id).is_none());
        assert!(!manager.delete(id));

        // The retired id is not handed out again.
        let next = manager.create("Another", "").unwrap().id;
        assert!(next > id);
    }

    #[test]
    fn update_applies_provided_fields_only() {
        let mut manager = TaskManager::new();
        let id = manager.create("Original", "keep me").unwrap().id;

        let patch = TaskPatch::new().title("Renamed");
        assert_eq!(manager.update(id, patch), Ok(true));

        let task = manager.get(id).unwrap();
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.description, "keep me");
        assert!(!task.completed);
    }

    #[test]
    fn update_with_empty_patch_leaves_record_identical() {
        let mut manager = TaskManager::new();
        let id = manager.create("Task", "desc").unwrap().id;
        let before = manager.get(id).unwrap().clone();

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(manager.update(id, TaskPatch::new()), Ok(true));

        assert_eq!(manager.get(id), Some(&before));
    }

    #[test]
    fn update_rejects_empty_title() {
        let mut manager = TaskManager::new();
        let id = manager.create("Task", "").unwrap().id;

        let patch = TaskPatch::new().title("   ").description("changed");
        assert_eq!(manager.update(id, patch), Err(TaskError::EmptyTitle));

        // Validation failed before any field was applied.
        assert_eq!(manager.get(id).unwrap().description, "");
    }

    #[test]
    fn update_missing_id_returns_false() {
        let mut manager = TaskManager::new();
        let patch = TaskPatch::new().title("whatever");
        assert_eq!(manager.update(TaskId::FIRST, patch), Ok(false));
    }

    #[test]
    fn update_can_clear_description() {
        let mut manager = TaskManager::new();
        let id = manager.create("Task", "old").unwrap().id;

        let patch = TaskPatch::new().description("");
        assert_eq!(manager.update(id, patch), Ok(true));
        assert_eq!(manager.get(id).unwrap().description, "");
    }

    #[test]
    fn mark_completed_and_incomplete_set_unconditionally() {
        let mut manager = TaskManager::new();
        let id = manager.create("Task", "").unwrap().id;

        assert!(manager.mark_completed(id));
        assert!(manager.get(id).unwrap().completed);

        // Marking complete twice stays complete (set, not flip).
        assert!(manager.mark_completed(id));
        assert!(manager.get(id).unwrap().completed);

        assert!(manager.mark_incomplete(id));
        assert!(!manager.get(id).unwrap().completed);

        assert!(!manager.mark_completed(TaskId::new(99).unwrap()));
    }

    #[test]
    fn list_returns_independent_snapshot() {
        let mut manager = TaskManager::new();
        manager.create("One", "").unwrap();
        manager.create("Two", "").unwrap();

        let snapshot = manager.list();
        manager.mark_completed(snapshot[0].id);

        assert!(!snapshot[0].completed);
        assert!(manager.list()[0].completed);
    }
}
