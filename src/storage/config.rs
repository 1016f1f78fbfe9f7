//! Configuration handling for Flash
//!
//! Configuration is read from `config.toml` in the platform config directory
//! (e.g. `~/.config/flash/config.toml`), or from an explicit path.
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Where tasks are kept
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Data file path; the platform data directory is used when unset
    pub path: Option<PathBuf>,
}

/// How replies look in the terminal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Name the assistant greets with
    pub name: String,

    /// Line drawn above and below each reply
    pub divider: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            name: "Flash".to_string(),
            divider: "_".repeat(42),
        }
    }
}

/// Combined configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Loads from `path` if given (it must exist), else from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "flash", "flash")
    }

    /// Returns the default config file location
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the data file to use when neither a flag nor the config names one
    pub fn default_data_path() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("tasks.txt"))
            .unwrap_or_else(|| PathBuf::from("data").join("tasks.txt"))
    }

    /// Resolves the data file: explicit override, then config, then default
    pub fn data_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.storage.path.clone())
            .unwrap_or_else(Self::default_data_path)
    }
}
