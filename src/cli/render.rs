//! Shared rendering of command outcomes
//!
//! Both front-ends translate their input into the same [`Outcome`] values,
//! so the one-line confirmations and the json shapes live here.

use crate::command::{Outcome, HELP_TEXT};
use crate::domain::Task;

use super::output::Output;

/// Renders one outcome. `Quit` and `Noop` print nothing; loop control is the
/// caller's job.
pub(crate) fn render(outcome: &Outcome, output: &Output) {
    match outcome {
        Outcome::Created(task) => {
            if output.is_json() {
                output.data(&serde_json::json!({ "action": "created", "task": task }));
            } else {
                output.success(&format!("Added task: {}", task.summary()));
            }
        }
        Outcome::Listed(tasks) => render_list(tasks, output),
        Outcome::Shown(task) => {
            if output.is_json() {
                output.data(&serde_json::json!({ "action": "shown", "task": task }));
            } else {
                println!("\n{}", task.details());
            }
        }
        Outcome::Updated(task) => {
            if output.is_json() {
                output.data(&serde_json::json!({ "action": "updated", "task": task }));
            } else {
                output.success(&format!("Updated task: {}", task.summary()));
            }
        }
        Outcome::MarkedComplete(task) => {
            if output.is_json() {
                output.data(&serde_json::json!({ "action": "completed", "task": task }));
            } else {
                output.success(&format!("Task completed: {}", task.summary()));
            }
        }
        Outcome::MarkedIncomplete(task) => {
            if output.is_json() {
                output.data(&serde_json::json!({ "action": "marked_incomplete", "task": task }));
            } else {
                output.success(&format!("Task marked as incomplete: {}", task.summary()));
            }
        }
        Outcome::Deleted(id) => {
            if output.is_json() {
                output.data(&serde_json::json!({ "action": "deleted", "id": id }));
            } else {
                output.success(&format!("Deleted task with ID {}", id));
            }
        }
        Outcome::NotFound(id) => {
            output.error(&format!("Task with ID {} not found", id));
        }
        Outcome::Help => {
            if output.is_json() {
                output.data(&serde_json::json!({ "help": HELP_TEXT }));
            } else {
                println!("\n{}", HELP_TEXT);
            }
        }
        Outcome::Quit | Outcome::Noop => {}
    }
}

fn render_list(tasks: &[Task], output: &Output) {
    if output.is_json() {
        output.data(&tasks);
        return;
    }

    if tasks.is_empty() {
        println!("\nNo tasks found.");
        return;
    }

    println!("\nYour tasks:");
    for task in tasks {
        println!("  {}", task.summary());
    }
    println!("\nTotal tasks: {}", tasks.len());
}
