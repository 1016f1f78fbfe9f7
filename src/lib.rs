//! Flash - a small assistant that keeps track of your tasks
//!
//! Flash keeps to-dos, deadlines and events in a plain-text file and talks to
//! you one line at a time. Dates and times it can read are shown in a friendly
//! form; anything else is kept exactly as typed.

pub mod assistant;
pub mod cli;
pub mod domain;
pub mod storage;

pub use assistant::{Assistant, Response};
pub use domain::{Task, TaskKind, TaskList};
