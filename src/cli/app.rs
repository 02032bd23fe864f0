//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{menu, repl};

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "In-memory todo manager for the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Line-command prompt (the default when no subcommand is given)
    Repl,

    /// Numbered-menu interface
    Menu,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Todo CLI starting");

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run(&output)?,
        Commands::Menu => menu::run(&output)?,
    }

    output.verbose("Session ended");
    Ok(())
}
