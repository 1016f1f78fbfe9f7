//! Terminal chat window for Flash
//!
//! A ratatui front end: the conversation scrolls above a one-line input box,
//! and replies are colored by their style label.

mod app;
mod event;
mod ui;

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use crate::assistant::Assistant;
use crate::storage::DisplayConfig;
use app::ChatApp;
use event::EventHandler;

const TICK_RATE_MS: u64 = 250;

/// Launch the chat window
pub fn run(assistant: &mut Assistant, display: &DisplayConfig) -> Result<()> {
    tracing::info!("opening chat window");

    let mut terminal = ui::init_terminal()?;
    let mut app = ChatApp::new(assistant, display);
    let events = EventHandler::new(TICK_RATE_MS);

    // Restore the terminal even if the loop panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| app.run(&mut terminal, events)));
    let restore_result = ui::restore_terminal();

    match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("Chat window panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("Chat window panicked: {}", s))
            } else {
                Err(anyhow!("Chat window panicked with unknown error"))
            }
        }
    }
}
