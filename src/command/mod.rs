//! # Command Core
//!
//! The shared dispatch core both front-ends feed:
//!
//! 1. [`tokenize`] splits a raw line into a lower-cased command name and
//!    quote-aware arguments.
//! 2. [`Command::from_line`] validates arity and argument shape, producing a
//!    typed command or a recoverable [`CommandError`].
//! 3. [`execute`] runs the command against a [`TaskManager`](crate::store::TaskManager)
//!    and reports an [`Outcome`] for the front-end to render.

mod dispatch;
mod tokenizer;

pub use dispatch::{execute, Command, CommandError, Outcome, HELP_TEXT};
pub use tokenizer::{tokenize, ParsedLine};
