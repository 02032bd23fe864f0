//! Domain models for Todo CLI
//!
//! Contains the core types without any I/O concerns.

mod id;
mod task;

pub use id::{IdError, TaskId};
pub use task::Task;
