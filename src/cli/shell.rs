//! Line-oriented shell over standard input

use std::io::{self, BufRead};

use anyhow::{Context, Result};

use super::output::Output;
use crate::assistant::Assistant;
use crate::storage::DisplayConfig;

/// Greets, then answers each line until `bye` or end of input
pub fn run(assistant: &mut Assistant, display: &DisplayConfig, output: &Output) -> Result<()> {
    session(assistant, io::stdin().lock(), display, output)
}

fn session(
    assistant: &mut Assistant,
    input: impl BufRead,
    display: &DisplayConfig,
    output: &Output,
) -> Result<()> {
    output.framed(&Assistant::greeting(&display.name), &display.divider);

    for line in input.lines() {
        let line = line.context("Failed to read from standard input")?;
        let response = assistant.respond(&line);
        output.framed(&response, &display.divider);

        if response.exit {
            return Ok(());
        }
    }

    tracing::debug!("input closed without bye");
    Ok(())
}
