//! Edit command parsing
//!
//! Every editing operation has a typed form so hosts can record and
//! replay operation traces. The one-line text form is:
//!
//! ```text
//! append <text>     move <pos>      delete
//! select <l> <r>    cut             paste
//! undo              redo
//! create <name>     switch <name>
//! ```

use alloc::string::String;
use core::fmt;

/// Parsed edit command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Type text at the cursor or over the selection
    Append(String),
    /// Move the cursor
    Move(isize),
    /// Delete the selection or the character at the cursor
    Delete,
    /// Select a range
    Select { left: isize, right: isize },
    /// Cut the selection into the clipboard
    Cut,
    /// Paste the clipboard
    Paste,
    Undo,
    Redo,
    /// Create and activate a document
    CreateDocument(String),
    /// Activate an existing document
    SwitchDocument(String),
}

impl EditCommand {
    /// Whether the command can change document content
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            EditCommand::Append(_) | EditCommand::Delete | EditCommand::Cut | EditCommand::Paste
        )
    }
}

/// Command parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input
    Empty,
    /// Verb not recognised
    Unknown(String),
    /// Required argument absent
    MissingArgument(&'static str),
    /// Argument is not an integer
    InvalidNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Empty command"),
            CommandError::Unknown(verb) => write!(f, "Unknown command: {}", verb),
            CommandError::MissingArgument(name) => write!(f, "Missing argument: {}", name),
            CommandError::InvalidNumber(raw) => write!(f, "Invalid number: {}", raw),
        }
    }
}

fn parse_number(raw: Option<&str>, name: &'static str) -> Result<isize, CommandError> {
    let raw = raw.ok_or(CommandError::MissingArgument(name))?;
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(String::from(raw)))
}

fn parse_name(raw: &str, name: &'static str) -> Result<String, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommandError::MissingArgument(name));
    }
    Ok(String::from(trimmed))
}

/// Parse a single command line
///
/// The text after `append ` is taken verbatim, spaces included.
pub fn parse_command(line: &str) -> Result<EditCommand, CommandError> {
    let line = line.trim_start();
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };

    match verb {
        "" => Err(CommandError::Empty),
        "append" => Ok(EditCommand::Append(String::from(rest))),
        "move" => Ok(EditCommand::Move(parse_number(
            rest.split_whitespace().next(),
            "pos",
        )?)),
        "delete" => Ok(EditCommand::Delete),
        "select" => {
            let mut args = rest.split_whitespace();
            let left = parse_number(args.next(), "left")?;
            let right = parse_number(args.next(), "right")?;
            Ok(EditCommand::Select { left, right })
        }
        "cut" => Ok(EditCommand::Cut),
        "paste" => Ok(EditCommand::Paste),
        "undo" => Ok(EditCommand::Undo),
        "redo" => Ok(EditCommand::Redo),
        "create" => Ok(EditCommand::CreateDocument(parse_name(rest, "name")?)),
        "switch" => Ok(EditCommand::SwitchDocument(parse_name(rest, "name")?)),
        other => Err(CommandError::Unknown(String::from(other))),
    }
}
