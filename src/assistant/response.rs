//! Replies handed to front ends
//!
//! A [`Response`] is everything a front end needs to show one reply: the
//! lines to print, a tone per line, a command tag for cosmetic styling and
//! whether the session should end.

use serde::Serialize;

/// Which command produced a reply; front ends use it only for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Add,
    List,
    Mark,
    Unmark,
    Delete,
    Due,
    Reschedule,
    Exit,
    Unknown,
    Error,
}

impl CommandKind {
    /// Style class for the reply bubble
    pub fn style(&self) -> &'static str {
        match self {
            CommandKind::Add => "add-label",
            CommandKind::Mark => "marked-label",
            CommandKind::Unmark => "unmark-label",
            CommandKind::Delete => "delete-label",
            CommandKind::Due | CommandKind::Reschedule => "due-label",
            CommandKind::Unknown | CommandKind::Error => "error-label",
            CommandKind::List | CommandKind::Exit => "reply-label",
        }
    }
}

/// How a single line of a reply should look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Message,
    Task,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub text: String,
    pub tone: Tone,
}

impl Fragment {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Message,
        }
    }

    pub fn task(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Task,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }
}

/// The reply to one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub kind: CommandKind,
    pub fragments: Vec<Fragment>,
    pub exit: bool,
}

impl Response {
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            fragments: Vec::new(),
            exit: false,
        }
    }

    /// A reply consisting of a single error line
    pub fn failure(kind: CommandKind, message: impl Into<String>) -> Self {
        Self::new(kind).with(Fragment::error(message))
    }

    pub fn with(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn message(self, text: impl Into<String>) -> Self {
        self.with(Fragment::message(text))
    }

    pub fn task(self, text: impl Into<String>) -> Self {
        self.with(Fragment::task(text))
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Returns true if this reply reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self.kind, CommandKind::Error | CommandKind::Unknown)
    }

    /// Plain text of the reply, one fragment per line
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
