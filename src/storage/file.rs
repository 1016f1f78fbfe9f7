//! Flat-file storage for the task list
//!
//! The whole list is rewritten after every change. Writes go to a temp file
//! under an exclusive lock and are then renamed over the data file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::line;
use crate::domain::TaskList;

/// Store for the task list in the line format of [`line`]
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    /// Creates a task file handle; nothing is touched until load or save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every task, in file order. A missing file is an empty list.
    pub fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no task file yet, starting empty");
            return Ok(TaskList::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open task file: {}", self.path.display()))?;

        FileExt::lock_shared(&file)
            .context("Failed to acquire read lock on task file")?;

        let reader = BufReader::new(&file);
        let mut tasks = Vec::new();

        for (line_num, text) in reader.lines().enumerate() {
            let text = text.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if text.trim().is_empty() {
                continue;
            }

            let task = line::decode(&text).with_context(|| {
                format!(
                    "Failed to parse task at line {} of {}",
                    line_num + 1,
                    self.path.display()
                )
            })?;
            tasks.push(task);
        }

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(TaskList::from_tasks(tasks))
    }

    /// Writes the whole list (full rewrite)
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.temp_path();

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            FileExt::lock_exclusive(&file)
                .context("Failed to acquire write lock on task file")?;

            let mut writer = BufWriter::new(&file);
            for task in tasks.iter() {
                writeln!(writer, "{}", line::encode(task)).context("Failed to write task")?;
            }

            writer.flush().context("Failed to flush task file")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "tasks".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
