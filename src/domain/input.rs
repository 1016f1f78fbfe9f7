//! Task argument parsing and validation
//!
//! Turns the text after a verb into a typed task. Clause markers (`/by`,
//! `/from`, `/to`, `/on`) only count as whole words.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use super::moment::{Moment, Temporal};
use super::task::{check_time_range, Deadline, Due, Event, Task};

const DEADLINE_USAGE: &str = "deadline return book /by 2019-12-02 18:00";
const EVENT_USAGE: &str = "event project meeting /from 16:00 /to 18:00 /on 2019-12-02";

/// User-correctable problems with task input
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("OOPS!!! The description of a {0} cannot be empty.")]
    EmptyDescription(&'static str),

    #[error("OOPS!!! The {what} is missing. Try: {usage}")]
    MissingTiming {
        what: &'static str,
        usage: &'static str,
    },

    #[error("OOPS!!! The event date is missing. Try: event project meeting /from 16:00 /to 18:00 /on 2019-12-02")]
    MissingDate,

    #[error("OOPS!!! The start time ({start}) is after the end time ({end}).")]
    StartAfterEnd { start: String, end: String },

    #[error("OOPS!!! I can't read '{0}' as a date. Use yyyy-MM-dd or d/M/yyyy.")]
    UnrecognisedDate(String),

    #[error(
        "OOPS!!! Tell me the new timing. Try: reschedule 2 /by 2019-12-02 or reschedule 3 /from 16:00 /to 18:00 /on 2019-12-02"
    )]
    MissingSchedule,

    #[error("OOPS!!! Task {0} is a todo, it has no timing to change.")]
    NotSchedulable(usize),

    #[error("OOPS!!! Task {number} is {article} {kind}. Try: {usage}")]
    WrongSchedule {
        number: usize,
        article: &'static str,
        kind: &'static str,
        usage: &'static str,
    },
}

impl InputError {
    pub(crate) fn wrong_schedule_for_deadline(number: usize) -> Self {
        InputError::WrongSchedule {
            number,
            article: "a",
            kind: "deadline",
            usage: "reschedule <n> /by <when>",
        }
    }

    pub(crate) fn wrong_schedule_for_event(number: usize) -> Self {
        InputError::WrongSchedule {
            number,
            article: "an",
            kind: "event",
            usage: "reschedule <n> /from <start> /to <end> /on <date>",
        }
    }
}

/// New timing for an existing task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// `/by <when>` for deadlines
    By(Moment<Due>),
    /// `/from <start> /to <end> /on <date>` for events
    Span {
        start: Moment<NaiveTime>,
        end: Moment<NaiveTime>,
        date: Moment<NaiveDate>,
    },
}

/// Splits `text` around the first whole-word occurrence of `marker`
fn split_clause<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    text.match_indices(marker).find_map(|(at, _)| {
        let before = &text[..at];
        let after = &text[at + marker.len()..];
        let starts_word = before.is_empty() || before.ends_with(char::is_whitespace);
        let ends_word = after.is_empty() || after.starts_with(char::is_whitespace);
        (starts_word && ends_word).then(|| (before.trim(), after.trim()))
    })
}

/// Parses `todo <description>`
pub fn parse_todo(args: &str) -> Result<Task, InputError> {
    let description = args.trim();
    if description.is_empty() {
        return Err(InputError::EmptyDescription("todo"));
    }
    Ok(Task::todo(description))
}

/// Parses `deadline <description> /by <when>`
pub fn parse_deadline(args: &str) -> Result<Task, InputError> {
    let args = args.trim();
    if args.is_empty() {
        return Err(InputError::EmptyDescription("deadline"));
    }

    let missing_due = InputError::MissingTiming {
        what: "due date (/by)",
        usage: DEADLINE_USAGE,
    };
    let (description, when) = split_clause(args, "/by").ok_or_else(|| missing_due.clone())?;

    if description.is_empty() {
        return Err(InputError::EmptyDescription("deadline"));
    }
    if when.is_empty() {
        return Err(missing_due);
    }

    Ok(Task::deadline(description, Deadline::new(Moment::parse(when))))
}

/// Parses `event <description> /from <start> /to <end> /on <date>`
pub fn parse_event(args: &str) -> Result<Task, InputError> {
    let args = args.trim();
    if args.is_empty() {
        return Err(InputError::EmptyDescription("event"));
    }

    let (description, timing) = split_clause(args, "/from").ok_or(InputError::MissingTiming {
        what: "start time (/from)",
        usage: EVENT_USAGE,
    })?;

    if description.is_empty() {
        return Err(InputError::EmptyDescription("event"));
    }

    let (start, end, date) = parse_span(timing)?;
    Ok(Task::event(description, Event::new(start, end, date)?))
}

/// Parses the `<start> /to <end> /on <date>` tail of an event
fn parse_span(
    timing: &str,
) -> Result<(Moment<NaiveTime>, Moment<NaiveTime>, Moment<NaiveDate>), InputError> {
    let missing_start = InputError::MissingTiming {
        what: "start time (/from)",
        usage: EVENT_USAGE,
    };
    let missing_end = InputError::MissingTiming {
        what: "end time (/to)",
        usage: EVENT_USAGE,
    };

    let (start, rest) = split_clause(timing, "/to").ok_or_else(|| missing_end.clone())?;
    if start.is_empty() {
        return Err(missing_start);
    }

    let (end, date) = split_clause(rest, "/on").ok_or(InputError::MissingDate)?;
    if end.is_empty() {
        return Err(missing_end);
    }
    if date.is_empty() {
        return Err(InputError::MissingDate);
    }

    Ok((Moment::parse(start), Moment::parse(end), Moment::parse(date)))
}

/// Parses the argument of `due <date>`; unlike task timing this must be a real date
pub fn parse_date(args: &str) -> Result<NaiveDate, InputError> {
    let text = args.trim();
    NaiveDate::recognise(text).ok_or_else(|| InputError::UnrecognisedDate(text.to_string()))
}

/// Parses the timing part of `reschedule <n> ...`
pub fn parse_schedule(args: &str) -> Result<Schedule, InputError> {
    if let Some((_, when)) = split_clause(args, "/by") {
        if when.is_empty() {
            return Err(InputError::MissingTiming {
                what: "due date (/by)",
                usage: DEADLINE_USAGE,
            });
        }
        return Ok(Schedule::By(Moment::parse(when)));
    }

    if let Some((_, timing)) = split_clause(args, "/from") {
        let (start, end, date) = parse_span(timing)?;
        check_time_range(&start, &end)?;
        return Ok(Schedule::Span { start, end, date });
    }

    Err(InputError::MissingSchedule)
}
