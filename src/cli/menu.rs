//! Numbered-menu front-end
//!
//! Presents a six-option menu and collects fields through short prompt
//! flows, then feeds the same `Command` values through the shared dispatch
//! core as the REPL. End-of-input at any prompt exits gracefully.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::command::{execute, Command, Outcome};
use crate::domain::TaskId;
use crate::store::TaskManager;

use super::output::Output;
use super::render::render;

const MENU: &str = "\
==================================================
            TODO MANAGER - MAIN MENU
==================================================
1. Create a new task
2. List all tasks
3. Update a task
4. Delete a task
5. View task details
6. Exit
--------------------------------------------------";

/// Runs the menu loop against stdin
pub fn run(output: &Output) -> Result<()> {
    let stdin = io::stdin();
    run_loop(&mut stdin.lock(), output)
}

pub(crate) fn run_loop(input: &mut dyn BufRead, output: &Output) -> Result<()> {
    let mut manager = TaskManager::new();

    println!("Welcome to the Todo Manager!");
    println!("All data is kept in memory and lost on exit.");

    loop {
        println!("\n{}", MENU);

        let Some(choice) = prompt(input, "Enter your choice (1-6): ")? else {
            break;
        };

        output.verbose_ctx("menu", &format!("Selected option '{}'", choice));

        let keep_going = match choice.as_str() {
            "1" => create_flow(input, &mut manager, output)?,
            "2" => {
                dispatch(&mut manager, Command::List, output);
                true
            }
            "3" => update_flow(input, &mut manager, output)?,
            "4" => delete_flow(input, &mut manager, output)?,
            "5" => view_flow(input, &mut manager, output)?,
            "6" => {
                println!("\nGoodbye!");
                false
            }
            _ => {
                println!("Invalid choice. Please enter a number between 1 and 6.");
                true
            }
        };

        if !keep_going {
            break;
        }
    }

    Ok(())
}

/// Runs a command and reports its outcome; validation errors are recoverable
fn dispatch(manager: &mut TaskManager, command: Command, output: &Output) {
    match execute(manager, command) {
        Ok(outcome) => render(&outcome, output),
        Err(e) => output.error(&e.to_string()),
    }
}

/// Reads one trimmed answer; `None` means end of input
fn prompt(input: &mut dyn BufRead, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Answer to an id prompt
enum IdAnswer {
    /// End of input; the caller should wind down
    Eof,
    /// Unparseable id; already reported, back to the menu
    Invalid,
    Id(TaskId),
}

/// Reads and parses a task id, reporting malformed input
fn prompt_id(input: &mut dyn BufRead, label: &str, output: &Output) -> Result<IdAnswer> {
    let Some(answer) = prompt(input, label)? else {
        return Ok(IdAnswer::Eof);
    };

    match answer.parse::<TaskId>() {
        Ok(id) => Ok(IdAnswer::Id(id)),
        Err(e) => {
            output.error(&e.to_string());
            Ok(IdAnswer::Invalid)
        }
    }
}

fn create_flow(
    input: &mut dyn BufRead,
    manager: &mut TaskManager,
    output: &Output,
) -> Result<bool> {
    println!("\n--- CREATE NEW TASK ---");

    let Some(title) = prompt(input, "Title: ")? else {
        return Ok(false);
    };
    let Some(description) = prompt(input, "Description (optional): ")? else {
        return Ok(false);
    };

    dispatch(manager, Command::Add { title, description }, output);
    Ok(true)
}

fn update_flow(
    input: &mut dyn BufRead,
    manager: &mut TaskManager,
    output: &Output,
) -> Result<bool> {
    println!("\n--- UPDATE TASK ---");

    let id = match prompt_id(input, "Task ID to update: ", output)? {
        IdAnswer::Eof => return Ok(false),
        IdAnswer::Invalid => return Ok(true),
        IdAnswer::Id(id) => id,
    };

    let Some(current) = manager.get(id).cloned() else {
        render(&Outcome::NotFound(id), output);
        return Ok(true);
    };

    println!("\nCurrent task:");
    println!("{}", current.details());
    println!("\nEnter new values (press Enter to keep the current value):");

    let Some(title) = prompt(input, "New title: ")? else {
        return Ok(false);
    };
    let Some(description) = prompt(input, "New description: ")? else {
        return Ok(false);
    };
    let Some(completed) = prompt(input, "Completed? (y/n): ")? else {
        return Ok(false);
    };

    let command = Command::Update {
        id,
        title: if title.is_empty() { None } else { Some(title) },
        description: if description.is_empty() {
            None
        } else {
            Some(description)
        },
        completed: match completed.to_lowercase().as_str() {
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        },
    };

    dispatch(manager, command, output);
    Ok(true)
}

fn delete_flow(
    input: &mut dyn BufRead,
    manager: &mut TaskManager,
    output: &Output,
) -> Result<bool> {
    println!("\n--- DELETE TASK ---");

    let id = match prompt_id(input, "Task ID to delete: ", output)? {
        IdAnswer::Eof => return Ok(false),
        IdAnswer::Invalid => return Ok(true),
        IdAnswer::Id(id) => id,
    };

    let Some(task) = manager.get(id).cloned() else {
        render(&Outcome::NotFound(id), output);
        return Ok(true);
    };

    println!("\nTask to delete:");
    println!("{}", task.details());

    let question = format!("\nAre you sure you want to delete task {}? (y/N): ", id);
    let Some(confirm) = prompt(input, &question)? else {
        return Ok(false);
    };

    match confirm.to_lowercase().as_str() {
        "y" | "yes" => dispatch(manager, Command::Delete { id }, output),
        _ => println!("Deletion cancelled."),
    }
    Ok(true)
}

fn view_flow(input: &mut dyn BufRead, manager: &mut TaskManager, output: &Output) -> Result<bool> {
    println!("\n--- VIEW TASK DETAILS ---");

    let id = match prompt_id(input, "Task ID to view: ", output)? {
        IdAnswer::Eof => return Ok(false),
        IdAnswer::Invalid => return Ok(true),
        IdAnswer::Id(id) => id,
    };

    dispatch(manager, Command::Show { id }, output);
    Ok(true)
}
