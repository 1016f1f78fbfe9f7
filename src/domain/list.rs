//! Ordered task list
//!
//! Positions are 1-based wherever a user sees or types them and 0-based
//! inside the list. The conversion happens once, in [`TaskList::slot`].

use chrono::NaiveDate;
use thiserror::Error;

use super::task::Task;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IndexError {
    #[error("OOPS!!! There is no task {number}. {}", describe_len(.len))]
    OutOfRange { number: usize, len: usize },

    #[error("OOPS!!! '{0}' is not a task number.")]
    NotANumber(String),

    #[error("OOPS!!! Which task? Give me its number from the list, e.g. {0} 2")]
    Missing(&'static str),
}

fn describe_len(len: &usize) -> String {
    match *len {
        0 => "Your list is empty.".to_string(),
        1 => "You only have task 1.".to_string(),
        n => format!("Pick a number from 1 to {}.", n),
    }
}

/// The in-memory store; insertion order is display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Converts a 1-based task number into a vector slot
    fn slot(&self, number: usize) -> Result<usize, IndexError> {
        match number.checked_sub(1) {
            Some(slot) if slot < self.tasks.len() => Ok(slot),
            _ => Err(IndexError::OutOfRange {
                number,
                len: self.tasks.len(),
            }),
        }
    }

    /// Appends a task and returns it
    pub fn push(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn get(&self, number: usize) -> Result<&Task, IndexError> {
        let slot = self.slot(number)?;
        Ok(&self.tasks[slot])
    }

    pub fn get_mut(&mut self, number: usize) -> Result<&mut Task, IndexError> {
        let slot = self.slot(number)?;
        Ok(&mut self.tasks[slot])
    }

    /// Marks task `number` as done
    pub fn mark(&mut self, number: usize) -> Result<&Task, IndexError> {
        let task = self.get_mut(number)?;
        task.mark_done();
        Ok(&*task)
    }

    /// Marks task `number` as not done
    pub fn unmark(&mut self, number: usize) -> Result<&Task, IndexError> {
        let task = self.get_mut(number)?;
        task.mark_not_done();
        Ok(&*task)
    }

    /// Removes task `number`; later tasks move up one place
    pub fn delete(&mut self, number: usize) -> Result<Task, IndexError> {
        let slot = self.slot(number)?;
        Ok(self.tasks.remove(slot))
    }

    /// Rendered lines in display order, e.g. `1.[T][ ] read book`
    pub fn render(&self) -> Vec<String> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(slot, task)| format!("{}.{}", slot + 1, task))
            .collect()
    }

    /// Deadlines and events falling on `date`, with their task numbers
    pub fn due_on(&self, date: NaiveDate) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.scheduled_on() == Some(date))
            .map(|(slot, task)| (slot + 1, task))
            .collect()
    }
}
