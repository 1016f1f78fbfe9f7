//! Task domain model
//!
//! A task is a description plus a completion flag. What else it carries
//! depends on its kind: to-dos carry nothing, deadlines carry a due moment,
//! events carry a start time, an end time and a date. Timing can only be
//! changed through the variant that owns it.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::input::InputError;
use super::moment::{Moment, Temporal};

/// When a deadline is due: a whole day or a specific moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    On(NaiveDate),
    At(NaiveDateTime),
}

impl Due {
    /// The calendar day this is due on
    pub fn date(&self) -> NaiveDate {
        match self {
            Due::On(date) => *date,
            Due::At(date_time) => date_time.date(),
        }
    }
}

impl Temporal for Due {
    fn recognise(text: &str) -> Option<Self> {
        NaiveDateTime::recognise(text)
            .map(Due::At)
            .or_else(|| NaiveDate::recognise(text).map(Due::On))
    }

    fn display(&self) -> String {
        match self {
            Due::On(date) => date.display(),
            Due::At(date_time) => date_time.display(),
        }
    }

    fn canonical(&self) -> String {
        match self {
            Due::On(date) => date.canonical(),
            Due::At(date_time) => date_time.canonical(),
        }
    }
}

/// Timing of a deadline task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    due: Moment<Due>,
}

impl Deadline {
    pub fn new(due: Moment<Due>) -> Self {
        Self { due }
    }

    pub fn due(&self) -> &Moment<Due> {
        &self.due
    }

    /// Replaces the due moment
    pub fn set_due(&mut self, due: Moment<Due>) {
        self.due = due;
    }

    /// The parsed due day, if the due moment was recognised
    pub fn date(&self) -> Option<NaiveDate> {
        self.due.value().map(Due::date)
    }
}

/// Timing of an event task
///
/// Invariant: when both times are parsed, `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    start: Moment<NaiveTime>,
    end: Moment<NaiveTime>,
    date: Moment<NaiveDate>,
}

impl Event {
    /// Creates an event, rejecting a start time after the end time
    pub fn new(
        start: Moment<NaiveTime>,
        end: Moment<NaiveTime>,
        date: Moment<NaiveDate>,
    ) -> Result<Self, InputError> {
        check_time_range(&start, &end)?;
        Ok(Self { start, end, date })
    }

    /// Rebuilds an event from stored fields without re-validating the range
    pub(crate) fn restore(
        start: Moment<NaiveTime>,
        end: Moment<NaiveTime>,
        date: Moment<NaiveDate>,
    ) -> Self {
        Self { start, end, date }
    }

    pub fn start(&self) -> &Moment<NaiveTime> {
        &self.start
    }

    pub fn end(&self) -> &Moment<NaiveTime> {
        &self.end
    }

    pub fn date(&self) -> &Moment<NaiveDate> {
        &self.date
    }

    /// Replaces all three timing fields; the event is untouched on error
    pub fn reschedule(
        &mut self,
        start: Moment<NaiveTime>,
        end: Moment<NaiveTime>,
        date: Moment<NaiveDate>,
    ) -> Result<(), InputError> {
        check_time_range(&start, &end)?;
        self.start = start;
        self.end = end;
        self.date = date;
        Ok(())
    }
}

pub(crate) fn check_time_range(start: &Moment<NaiveTime>, end: &Moment<NaiveTime>) -> Result<(), InputError> {
    if let (Some(start), Some(end)) = (start.value(), end.value()) {
        if start > end {
            return Err(InputError::StartAfterEnd {
                start: start.display(),
                end: end.display(),
            });
        }
    }
    Ok(())
}

/// Kind of task, with the timing each kind owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    ToDo,
    Deadline(Deadline),
    Event(Event),
}

impl TaskKind {
    /// Single-letter tag used in rendering and storage
    pub fn tag(&self) -> char {
        match self {
            TaskKind::ToDo => 'T',
            TaskKind::Deadline(_) => 'D',
            TaskKind::Event(_) => 'E',
        }
    }

    /// Verb the user types to create this kind
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::ToDo => "todo",
            TaskKind::Deadline(_) => "deadline",
            TaskKind::Event(_) => "event",
        }
    }
}

/// A user-entered unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::with_kind(description, TaskKind::ToDo)
    }

    pub fn deadline(description: impl Into<String>, deadline: Deadline) -> Self {
        Self::with_kind(description, TaskKind::Deadline(deadline))
    }

    pub fn event(description: impl Into<String>, event: Event) -> Self {
        Self::with_kind(description, TaskKind::Event(event))
    }

    fn with_kind(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    /// The day this task falls on, for deadlines and events with a parsed date
    pub fn scheduled_on(&self) -> Option<NaiveDate> {
        match &self.kind {
            TaskKind::ToDo => None,
            TaskKind::Deadline(deadline) => deadline.date(),
            TaskKind::Event(event) => event.date().value().copied(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.tag(), marker, self.description)?;

        match &self.kind {
            TaskKind::ToDo => Ok(()),
            TaskKind::Deadline(deadline) => write!(f, " (by: {})", deadline.due().display()),
            TaskKind::Event(event) => write!(
                f,
                " (from: {} to: {} on: {})",
                event.start().display(),
                event.end().display(),
                event.date().display()
            ),
        }
    }
}
