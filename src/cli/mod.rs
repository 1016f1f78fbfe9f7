//! # Command-Line Interface
//!
//! Front ends over [`crate::assistant::Assistant`].
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `shell` (default) | Read lines from stdin until `bye` |
//! | `exec <LINE>...` | Run one line, exit 1 if it fails |
//! | `chat` | Terminal chat window |
//!
//! ## Output Formats
//!
//! `shell` and `exec` support the `--format` flag:
//! - `text` (default) - Replies as the assistant would say them
//! - `json` - One JSON object per reply
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) to log dispatch and storage activity to stderr:
//! ```bash
//! flash --verbose exec list
//! ```
//! `RUST_LOG` overrides the log filter.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod chat;
mod output;
mod shell;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
