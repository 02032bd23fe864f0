//! Command dispatch and validation
//!
//! One recognized command per [`Command`] variant. Parsing validates arity
//! and argument shape; execution runs against a [`TaskManager`] and reports
//! an [`Outcome`]. Every failure here is recoverable: the caller prints it
//! and returns to its prompt.

use thiserror::Error;

use crate::domain::{Task, TaskId};
use crate::store::{TaskError, TaskManager, TaskPatch};

use super::tokenizer::tokenize;

/// Static help text listing the line-command table
pub const HELP_TEXT: &str = "\
Available commands:
  add \"title\" [\"description\"]   - Add a new task
  list                          - List all tasks
  show <id>                     - Show details of a specific task
  update <id> \"title\" [\"desc\"]  - Update a task
  complete <id>                 - Mark task as complete
  incomplete <id>               - Mark task as incomplete
  delete <id>                   - Delete a task
  help                          - Show this help message
  quit/exit                     - Exit the application";

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type 'help' for available commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Task ID must be a positive integer, got '{0}'")]
    InvalidId(String),
}

/// A validated command ready for execution
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        title: String,
        description: String,
    },
    List,
    Show {
        id: TaskId,
    },
    /// `title` is `None` only for the menu front-end's "keep current value"
    /// flow; the line grammar always supplies it and never sets `completed`.
    Update {
        id: TaskId,
        title: Option<String>,
        description: Option<String>,
        completed: Option<bool>,
    },
    Complete {
        id: TaskId,
    },
    Incomplete {
        id: TaskId,
    },
    Delete {
        id: TaskId,
    },
    Help,
    Quit,
    /// Empty input line; executing it does nothing
    Noop,
}

impl Command {
    /// Parses one raw input line into a command, validating arity and ids
    pub fn from_line(line: &str) -> Result<Self, CommandError> {
        let parsed = tokenize(line);
        if parsed.is_empty() {
            return Ok(Command::Noop);
        }

        let args = parsed.args;
        match parsed.command.as_str() {
            "add" => match args.len() {
                1 | 2 => Ok(Command::Add {
                    title: args[0].clone(),
                    description: args.get(1).cloned().unwrap_or_default(),
                }),
                _ => Err(CommandError::Usage("add \"title\" [\"description\"]")),
            },
            "list" => expect_no_args(args, "list", Command::List),
            "show" => parse_id_command(args, "show <id>", |id| Command::Show { id }),
            "update" => match args.len() {
                2 | 3 => Ok(Command::Update {
                    id: parse_id(&args[0])?,
                    title: Some(args[1].clone()),
                    description: args.get(2).cloned(),
                    completed: None,
                }),
                _ => Err(CommandError::Usage("update <id> \"title\" [\"description\"]")),
            },
            "complete" => parse_id_command(args, "complete <id>", |id| Command::Complete { id }),
            "incomplete" => {
                parse_id_command(args, "incomplete <id>", |id| Command::Incomplete { id })
            }
            "delete" => parse_id_command(args, "delete <id>", |id| Command::Delete { id }),
            "help" => expect_no_args(args, "help", Command::Help),
            "quit" | "exit" => expect_no_args(args, "quit", Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn expect_no_args(
    args: Vec<String>,
    usage: &'static str,
    command: Command,
) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Usage(usage))
    }
}

fn parse_id_command(
    args: Vec<String>,
    usage: &'static str,
    build: impl FnOnce(TaskId) -> Command,
) -> Result<Command, CommandError> {
    match args.as_slice() {
        [id] => Ok(build(parse_id(id)?)),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn parse_id(raw: &str) -> Result<TaskId, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

/// Result of executing a command; front-ends decide how to render it
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(Task),
    Listed(Vec<Task>),
    Shown(Task),
    Updated(Task),
    MarkedComplete(Task),
    MarkedIncomplete(Task),
    Deleted(TaskId),
    NotFound(TaskId),
    Help,
    Quit,
    Noop,
}

/// Executes a validated command against the manager.
///
/// `Err` carries validation failures (empty title); absent ids surface as
/// [`Outcome::NotFound`]. Both are recoverable.
pub fn execute(manager: &mut TaskManager, command: Command) -> Result<Outcome, TaskError> {
    match command {
        Command::Add { title, description } => {
            let task = manager.create(&title, &description)?;
            Ok(Outcome::Created(task))
        }
        Command::List => Ok(Outcome::Listed(manager.list())),
        Command::Show { id } => match manager.get(id) {
            Some(task) => Ok(Outcome::Shown(task.clone())),
            None => Ok(Outcome::NotFound(id)),
        },
        Command::Update {
            id,
            title,
            description,
            completed,
        } => {
            let patch = TaskPatch {
                title,
                description,
                completed,
            };
            if manager.update(id, patch)? {
                Ok(Outcome::Updated(snapshot(manager, id)))
            } else {
                Ok(Outcome::NotFound(id))
            }
        }
        Command::Complete { id } => {
            if manager.mark_completed(id) {
                Ok(Outcome::MarkedComplete(snapshot(manager, id)))
            } else {
                Ok(Outcome::NotFound(id))
            }
        }
        Command::Incomplete { id } => {
            if manager.mark_incomplete(id) {
                Ok(Outcome::MarkedIncomplete(snapshot(manager, id)))
            } else {
                Ok(Outcome::NotFound(id))
            }
        }
        Command::Delete { id } => {
            if manager.delete(id) {
                Ok(Outcome::Deleted(id))
            } else {
                Ok(Outcome::NotFound(id))
            }
        }
        Command::Help => Ok(Outcome::Help),
        Command::Quit => Ok(Outcome::Quit),
        Command::Noop => Ok(Outcome::Noop),
    }
}

fn snapshot(manager: &TaskManager, id: TaskId) -> Task {
    // Only called right after a successful mutation of `id`.
    manager
        .get(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("task {id} must exist"))
}
