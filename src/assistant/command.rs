//! Command parsing
//!
//! The first whitespace-separated word of a line picks the command; the rest
//! of the line is its argument.

use chrono::NaiveDate;
use thiserror::Error;

use super::response::CommandKind;
use crate::domain::{
    parse_date, parse_deadline, parse_event, parse_schedule, parse_todo, IndexError, InputError,
    Schedule, Task,
};

/// Everything that can go wrong while handling one line
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("OOPS!!! Sorry, but I don't know what that means :-(")]
    Unknown(String),

    #[error("OOPS!!! I couldn't save your tasks: {0}")]
    Storage(String),
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Task),
    List,
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Due(NaiveDate),
    Reschedule(usize, Schedule),
    Bye,
}

impl Command {
    /// Parses one line of user input
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let command = match verb {
            "todo" => Command::Add(parse_todo(args)?),
            "deadline" => Command::Add(parse_deadline(args)?),
            "event" => Command::Add(parse_event(args)?),
            "list" => Command::List,
            "mark" => Command::Mark(parse_number("mark", args)?),
            "unmark" => Command::Unmark(parse_number("unmark", args)?),
            "delete" => Command::Delete(parse_number("delete", args)?),
            "due" => Command::Due(parse_date(args)?),
            "reschedule" => {
                let args = args.trim();
                let (number, rest) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
                let number = parse_number("reschedule", number)?;
                Command::Reschedule(number, parse_schedule(rest)?)
            }
            "bye" => Command::Bye,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }

    /// Styling tag for replies to this command
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add(_) => CommandKind::Add,
            Command::List => CommandKind::List,
            Command::Mark(_) => CommandKind::Mark,
            Command::Unmark(_) => CommandKind::Unmark,
            Command::Delete(_) => CommandKind::Delete,
            Command::Due(_) => CommandKind::Due,
            Command::Reschedule(..) => CommandKind::Reschedule,
            Command::Bye => CommandKind::Exit,
        }
    }

    /// Returns true if the command changes the task list
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Mark(_)
                | Command::Unmark(_)
                | Command::Delete(_)
                | Command::Reschedule(..)
        )
    }
}

/// Parses a 1-based task number
fn parse_number(verb: &'static str, args: &str) -> Result<usize, IndexError> {
    let text = args.trim();
    if text.is_empty() {
        return Err(IndexError::Missing(verb));
    }
    text.parse()
        .map_err(|_| IndexError::NotANumber(text.to_string()))
}
