//! The assistant: one input line in, one [`Response`] out
//!
//! [`Assistant`] owns the task list and, optionally, the file it is mirrored
//! to. Front ends feed it raw lines and render whatever comes back; they never
//! touch the task list themselves.
//!
//! Every failure a user can cause (bad input, bad index, unknown verb, a save
//! that did not go through) becomes an error reply. Nothing here ends the
//! session except `bye`.

mod command;
mod response;

pub use command::{Command, CommandError};
pub use response::{CommandKind, Fragment, Response, Tone};

use anyhow::Result;
use chrono::NaiveDate;

use crate::domain::{InputError, Schedule, Task, TaskKind, TaskList, Temporal};
use crate::storage::TaskFile;

pub struct Assistant {
    tasks: TaskList,
    store: Option<TaskFile>,
}

impl Assistant {
    /// Creates an assistant over an in-memory list; nothing is persisted
    pub fn new(tasks: TaskList) -> Self {
        Self { tasks, store: None }
    }

    /// Loads the list from `store` and saves back to it after every change
    pub fn open(store: TaskFile) -> Result<Self> {
        let tasks = store.load()?;
        tracing::info!(path = %store.path().display(), count = tasks.len(), "opened task file");
        Ok(Self {
            tasks,
            store: Some(store),
        })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Opening lines shown before the first prompt
    pub fn greeting(name: &str) -> Response {
        Response::new(CommandKind::List)
            .message(format!("Hey! I'm {}", name))
            .message("What can I do for ya?")
    }

    /// Handles one line of input
    pub fn respond(&mut self, line: &str) -> Response {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => return failure(err),
        };
        tracing::debug!(?command, "dispatching");

        let mutating = command.is_mutating();
        match self.execute(command) {
            Ok(response) if mutating => self.persist(response),
            Ok(response) => response,
            Err(err) => failure(err),
        }
    }

    fn execute(&mut self, command: Command) -> Result<Response, CommandError> {
        let kind = command.kind();
        let response = Response::new(kind);

        let response = match command {
            Command::Add(task) => {
                tracing::debug!(kind = task.kind.label(), "adding task");
                let added = self.tasks.push(task).to_string();
                response
                    .message("Got it. I've added this task:")
                    .task(format!("  {}", added))
                    .message(count_line(self.tasks.len()))
            }
            Command::List => self.list(response),
            Command::Mark(number) => {
                let task = self.tasks.mark(number)?;
                response
                    .message("Nice! I've marked this task as done:")
                    .task(format!("  {}", task))
            }
            Command::Unmark(number) => {
                let task = self.tasks.unmark(number)?;
                response
                    .message("OK, I've marked this task as not done yet:")
                    .task(format!("  {}", task))
            }
            Command::Delete(number) => {
                let task = self.tasks.delete(number)?;
                response
                    .message("Noted. I've removed this task:")
                    .task(format!("  {}", task))
                    .message(count_line(self.tasks.len()))
            }
            Command::Due(date) => self.due(response, date),
            Command::Reschedule(number, schedule) => {
                let task = self.reschedule(number, schedule)?;
                response
                    .message("Done. I've updated the timing of this task:")
                    .task(format!("  {}", task))
            }
            Command::Bye => response.message("Bye. Hope to see ya again soon!").exiting(),
        };

        Ok(response)
    }

    fn list(&self, response: Response) -> Response {
        if self.tasks.is_empty() {
            return response.message("Your list is empty.");
        }

        self.tasks
            .render()
            .into_iter()
            .fold(response.message("Here are the tasks in your list:"), |response, line| {
                response.task(line)
            })
    }

    fn due(&self, response: Response, date: NaiveDate) -> Response {
        let heading = date.display();
        let matches = self.tasks.due_on(date);

        if matches.is_empty() {
            return response.message(format!("Nothing is due on {}.", heading));
        }

        matches.into_iter().fold(
            response.message(format!("Here are the tasks due on {}:", heading)),
            |response, (number, task)| response.task(format!("{}.{}", number, task)),
        )
    }

    fn reschedule(&mut self, number: usize, schedule: Schedule) -> Result<&Task, CommandError> {
        let task = self.tasks.get_mut(number)?;

        match (&mut task.kind, schedule) {
            (TaskKind::Deadline(deadline), Schedule::By(due)) => deadline.set_due(due),
            (TaskKind::Event(event), Schedule::Span { start, end, date }) => {
                event.reschedule(start, end, date)?
            }
            (TaskKind::ToDo, _) => return Err(InputError::NotSchedulable(number).into()),
            (TaskKind::Deadline(_), _) => {
                return Err(InputError::wrong_schedule_for_deadline(number).into())
            }
            (TaskKind::Event(_), _) => {
                return Err(InputError::wrong_schedule_for_event(number).into())
            }
        }

        Ok(&*task)
    }

    /// Writes the list back after a change. The change itself stands even if
    /// the write fails; the reply then carries the storage error.
    fn persist(&self, response: Response) -> Response {
        let Some(store) = &self.store else {
            return response;
        };

        match store.save(&self.tasks) {
            Ok(()) => response,
            Err(err) => {
                let detail = format!("{:#}", err);
                tracing::warn!(path = %store.path().display(), error = %detail, "failed to save tasks");
                let err = CommandError::Storage(detail);
                let mut response = response.with(Fragment::error(err.to_string()));
                response.kind = CommandKind::Error;
                response
            }
        }
    }
}

fn failure(err: CommandError) -> Response {
    tracing::debug!(error = %err, "command failed");
    let kind = match err {
        CommandError::Unknown(_) => CommandKind::Unknown,
        _ => CommandKind::Error,
    };
    Response::failure(kind, err.to_string())
}

fn count_line(len: usize) -> String {
    match len {
        1 => "Now you have 1 task in the list.".to_string(),
        n => format!("Now you have {} tasks in the list.", n),
    }
}
