//! Task identifiers
//!
//! Ids are positive integers assigned by the store in creation order,
//! starting at 1. A deleted id is never reassigned within one store
//! instance, so ids are strictly increasing for the lifetime of the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID: expected a positive integer, got '{0}'")]
    InvalidTaskId(String),
}

/// Unique task identifier, always >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task id from a raw value; returns None for zero
    pub fn new(value: u64) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The first id a fresh store will assign
    pub const FIRST: TaskId = TaskId(1);
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Reject explicit signs so "+1" and "-1" both fail the same way.
        if s.is_empty() || s.starts_with('+') || s.starts_with('-') {
            return Err(IdError::InvalidTaskId(s.to_string()));
        }

        s.parse::<u64>()
            .ok()
            .and_then(TaskId::new)
            .ok_or_else(|| IdError::InvalidTaskId(s.to_string()))
    }
}
