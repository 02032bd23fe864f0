//! Todo CLI - An in-memory todo manager for the terminal
//!
//! All state lives in process memory; nothing is persisted. The crate is
//! organized as a small dispatch core (tokenizer + command table + task
//! store) with two thin interactive front-ends: a line-command prompt and a
//! numbered menu.

pub mod domain;
pub mod store;
pub mod command;
pub mod cli;

pub use domain::{Task, TaskId};
pub use store::{TaskManager, TaskStore};
