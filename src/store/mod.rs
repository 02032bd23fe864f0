//! # In-Memory Store
//!
//! All task records live in a single in-process map owned by [`TaskStore`];
//! nothing is persisted. [`TaskManager`] is the validation layer the rest of
//! the crate talks to: it trims inputs, rejects empty titles, and never
//! bypasses the store.
//!
//! Both are plain owned structs so tests can run any number of independent
//! instances side by side.

mod manager;
mod memory;

pub use manager::{TaskError, TaskManager, TaskPatch};
pub use memory::TaskStore;
