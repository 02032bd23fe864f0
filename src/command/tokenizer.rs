//! Command-line tokenizer
//!
//! Splits one raw input line into a command name and its arguments. Both
//! quote characters (`"` and `'`) act as interchangeable toggles rather than
//! matched pairs: a `'` may close a span opened by `"`. Quotes are never
//! copied into arguments, and an unterminated quote at end of line is
//! tolerated (the pending buffer is still flushed).

/// Result of tokenizing one input line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine {
    /// Lower-cased command name; empty for a blank line
    pub command: String,
    /// Arguments with quoting resolved, never containing quote characters
    pub args: Vec<String>,
}

impl ParsedLine {
    /// Returns true if the line was empty or whitespace-only
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

/// Tokenizes a raw input line into a command name and arguments.
///
/// The first whitespace-delimited token is the command, lower-cased. The
/// remainder is scanned character by character: a quote toggles quoting, a
/// space outside quotes ends the current argument, everything else
/// accumulates. Consecutive spaces and quoted empty strings (`""`) produce
/// no arguments.
pub fn tokenize(line: &str) -> ParsedLine {
    let line = line.trim();
    if line.is_empty() {
        return ParsedLine::default();
    }

    let (command, rest) = match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim_start()),
        None => (line, ""),
    };

    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in rest.chars() {
        match ch {
            '"' | '\'' => in_quotes = !in_quotes,
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        args.push(current);
    }

    ParsedLine {
        command: command.to_lowercase(),
        args,
    }
}
