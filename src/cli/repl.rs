//! Line-command front-end
//!
//! Reads one line per iteration, tokenizes and dispatches it, prints a
//! one-line confirmation or error, and loops. `quit`/`exit` and end-of-input
//! both end the session gracefully.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::command::{execute, Command, Outcome};
use crate::store::TaskManager;

use super::output::Output;
use super::render::render;

/// Runs the REPL against stdin
pub fn run(output: &Output) -> Result<()> {
    let stdin = io::stdin();
    run_loop(&mut stdin.lock(), output)
}

pub(crate) fn run_loop(input: &mut dyn BufRead, output: &Output) -> Result<()> {
    let mut manager = TaskManager::new();

    if !output.is_json() {
        println!("Welcome to the Todo Console Application!");
        println!("Type 'help' for available commands or 'quit' to exit.");
    }

    loop {
        if !output.is_json() {
            print!("\n> ");
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input is a normal termination, same as quit.
            if !output.is_json() {
                println!("\nGoodbye!");
            }
            break;
        }

        let command = match Command::from_line(&line) {
            Ok(command) => command,
            Err(e) => {
                output.error(&e.to_string());
                continue;
            }
        };

        output.verbose_ctx("repl", &format!("Dispatching {:?}", command));

        match execute(&mut manager, command) {
            Ok(Outcome::Quit) => {
                if !output.is_json() {
                    println!("Goodbye!");
                }
                break;
            }
            Ok(outcome) => render(&outcome, output),
            Err(e) => output.error(&e.to_string()),
        }
    }

    Ok(())
}
