//! # Storage Layer
//!
//! Persistence and configuration for Flash.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | One task per line, ` | `-separated | `--data`, `storage.path`, or the platform data dir |
//! | Config | TOML | `--config` or the platform config dir |
//!
//! The task file is rewritten in full after every change, using a temp file
//! and rename so a crash never leaves a half-written list behind.

mod config;
mod file;
mod line;

pub use config::{Config, ConfigError, DisplayConfig, StorageConfig};
pub use file::TaskFile;
pub use line::{decode, encode, LineError};
