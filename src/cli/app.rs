//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use super::{chat, shell};
use crate::assistant::Assistant;
use crate::storage::{Config, TaskFile};

#[derive(Parser)]
#[command(name = "flash")]
#[command(author, version, about = "A small assistant that keeps track of your tasks")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Task data file
    #[arg(long, global = true, env = "FLASH_DATA")]
    pub data: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "FLASH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read commands from standard input until `bye` (default)
    Shell,

    /// Run a single command and exit
    Exec {
        /// The command line, e.g. `todo read book`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },

    /// Open the terminal chat window
    Chat,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Shell);

    // Log lines on stderr would tear through the chat screen
    if cli.verbose || !matches!(command, Commands::Chat) {
        init_tracing(cli.verbose);
    }

    let output = Output::new(cli.format);
    let config = Config::load(cli.config.as_deref())?;
    let store = TaskFile::new(config.data_path(cli.data.as_deref()));
    let mut assistant = Assistant::open(store)?;

    match command {
        Commands::Shell => shell::run(&mut assistant, &config.display, &output)?,
        Commands::Exec { line } => exec(&mut assistant, &line.join(" "), &output)?,
        Commands::Chat => chat::run(&mut assistant, &config.display)?,
    }

    tracing::debug!("session finished");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "flash=debug" } else { "flash=warn" };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .try_init();
}

/// Runs one line; an error reply fails the process
fn exec(assistant: &mut Assistant, line: &str, output: &Output) -> Result<()> {
    let response = assistant.respond(line);

    if response.is_error() {
        if output.is_json() {
            output.response(&response);
        }
        anyhow::bail!("{}", response.text());
    }

    output.response(&response);
    Ok(())
}
