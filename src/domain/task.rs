//! Task domain model
//!
//! Tasks are plain records: a title, an optional description, a completion
//! flag, and creation/update timestamps. Field setters refresh `updated_at`
//! only when the stored value actually changes, so a no-op update leaves the
//! record untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::TaskId;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier assigned by the store
    pub id: TaskId,

    /// Human-readable title, never empty after trimming
    pub title: String,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last modified
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task with both timestamps set to now
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the title, refreshing `updated_at` if it changed
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.title != title {
            self.title = title;
            self.updated_at = Utc::now();
        }
    }

    /// Sets the description, refreshing `updated_at` if it changed
    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        if self.description != description {
            self.description = description;
            self.updated_at = Utc::now();
        }
    }

    /// Sets the completion flag, refreshing `updated_at` if it changed
    pub fn set_completed(&mut self, completed: bool) {
        if self.completed != completed {
            self.completed = completed;
            self.updated_at = Utc::now();
        }
    }

    /// One-line display form: `[X] 3. Buy milk` (X done, O pending)
    pub fn summary(&self) -> String {
        let status = if self.completed { 'X' } else { 'O' };
        format!("[{}] {}. {}", status, self.id, self.title)
    }

    /// Multi-line display form used by `show`
    pub fn details(&self) -> String {
        let status = if self.completed { "Completed" } else { "Pending" };
        let description = if self.description.is_empty() {
            "No description"
        } else {
            &self.description
        };
        format!(
            "ID: {}\nTitle: {}\nDescription: {}\nStatus: {}\nCreated: {}\nUpdated: {}",
            self.id,
            self.title,
            description,
            status,
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
            self.updated_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}
