//! # Command-Line Interface
//!
//! Two interactive front-ends over the same dispatch core:
//!
//! | Subcommand | Style |
//! |------------|-------|
//! | `repl` (default) | Line commands: `add "Buy milk"`, `list`, `complete 1` |
//! | `menu` | Numbered menu with multi-prompt flows |
//!
//! Both support `--format text|json` and `--verbose` debug output on stderr.
//!
//! Call [`run()`] to parse arguments and start the selected loop.

mod app;
mod menu;
mod output;
mod render;
mod repl;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
