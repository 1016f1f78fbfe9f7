//! Line codec for the task file
//!
//! One task per line, fields joined by ` | `:
//!
//! ```text
//! T | 0 | read book
//! D | 1 | 2019-12-02 18:00 | return book
//! E | 0 | 16:00 | 18:00 | 2020-12-10 | buy cake
//! ```
//!
//! Parsed dates and times are written in canonical form and recognised again
//! on load; fallback text is written verbatim. A `|` or `\` inside a field is
//! escaped with a backslash, and line breaks are written as `\n` and `\r`.

use thiserror::Error;

use crate::domain::{Deadline, Event, Moment, Task, TaskKind};

const SEPARATOR: &str = " | ";

#[derive(Debug, Error, PartialEq)]
pub enum LineError {
    #[error("unknown task type '{0}'")]
    UnknownType(String),

    #[error("expected {expected} fields for type {tag}, found {found}")]
    FieldCount {
        tag: char,
        expected: usize,
        found: usize,
    },

    #[error("invalid done flag '{0}', expected 0 or 1")]
    DoneFlag(String),
}

fn escape(field: &str) -> String {
    field
        .replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Splits on unescaped `|` and undoes escaping
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                match chars.next() {
                    Some('n') => current.push('\n'),
                    Some('r') => current.push('\r'),
                    Some(next) => current.push(next),
                    None => {}
                }
            }
            '|' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    // Strip the padding the separator adds around each field
    let last = fields.len() - 1;
    fields
        .into_iter()
        .enumerate()
        .map(|(i, field)| {
            let field = if i > 0 { field.strip_prefix(' ').map(str::to_string).unwrap_or(field) } else { field };
            if i < last {
                field.strip_suffix(' ').map(str::to_string).unwrap_or(field)
            } else {
                field
            }
        })
        .collect()
}

/// Encodes a task as one line, without the trailing newline
pub fn encode(task: &Task) -> String {
    let done = if task.done { "1" } else { "0" };
    let mut fields = vec![task.kind.tag().to_string(), done.to_string()];

    match &task.kind {
        TaskKind::ToDo => {}
        TaskKind::Deadline(deadline) => fields.push(deadline.due().canonical()),
        TaskKind::Event(event) => {
            fields.push(event.start().canonical());
            fields.push(event.end().canonical());
            fields.push(event.date().canonical());
        }
    }
    fields.push(task.description.clone());

    fields
        .iter()
        .map(|field| escape(field))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Decodes one line produced by [`encode`]
pub fn decode(line: &str) -> Result<Task, LineError> {
    let fields = split_fields(line);
    let tag = fields[0].trim();

    let expected = match tag {
        "T" => 3,
        "D" => 4,
        "E" => 6,
        other => return Err(LineError::UnknownType(other.to_string())),
    };

    if fields.len() != expected {
        return Err(LineError::FieldCount {
            tag: tag.chars().next().unwrap_or('?'),
            expected,
            found: fields.len(),
        });
    }

    let done = match fields[1].as_str() {
        "1" => true,
        "0" => false,
        other => return Err(LineError::DoneFlag(other.to_string())),
    };

    let description = fields[expected - 1].clone();
    let mut task = match tag {
        "T" => Task::todo(description),
        "D" => Task::deadline(description, Deadline::new(Moment::parse(&fields[2]))),
        _ => Task::event(
            description,
            Event::restore(
                Moment::parse(&fields[2]),
                Moment::parse(&fields[3]),
                Moment::parse(&fields[4]),
            ),
        ),
    };
    task.done = done;

    Ok(task)
}
