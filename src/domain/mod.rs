//! Domain models for Flash
//!
//! Contains the task model and input parsing without any I/O concerns.

mod input;
mod list;
mod moment;
mod task;

pub use input::{parse_date, parse_deadline, parse_event, parse_schedule, parse_todo, InputError, Schedule};
pub use list::{IndexError, TaskList};
pub use moment::{Moment, Temporal};
pub use task::{Deadline, Due, Event, Task, TaskKind};
