//! Task file parsing and writing
//!
//! A task file holds one task per line as `<priority><TAB><description>`.
//! Lines are not kept in priority order. Blank lines are ignored; any other
//! line that does not match the format is a malformed record, handled
//! according to the [`LoadMode`].

use crate::env;
use crate::task::{Task, TaskError};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum FileError {
    #[error("File '{path}' is not UTF-8 encoded: {hint}")]
    NotUtf8 { path: PathBuf, hint: String },

    #[error("File '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("IO error on '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed record in '{path}' at line {line}: {source}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        source: RecordError,
    },
}

/// Why a single line could not be turned into a task
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing tab between priority and description")]
    MissingTab,

    #[error("priority '{value}' is not a base-10 integer")]
    InvalidPriority { value: String },

    #[error(transparent)]
    InvalidTask(#[from] TaskError),
}

/// What to do with malformed lines while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Fail on the first malformed line; nothing from the file is kept
    #[default]
    Strict,
    /// Log and skip malformed lines
    Lenient,
}

/// Reads and writes task files
pub struct TaskLoader;

impl TaskLoader {
    /// Load a UTF-8 file with proper error handling
    fn load_utf8_file(path: &Path) -> Result<String, FileError> {
        debug!("Loading task file: {:?}", path);

        fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::InvalidData => FileError::NotUtf8 {
                path: path.to_path_buf(),
                hint: "Task files must be UTF-8 text with one task per line.".to_string(),
            },
            _ => FileError::IoError {
                path: path.to_path_buf(),
                source: e,
            },
        })
    }

    /// Parse one `<priority><TAB><description>` record.
    ///
    /// The description is everything after the first tab, so it may itself
    /// contain tabs. A trailing `\r` is dropped.
    pub fn parse_line(line: &str) -> Result<Task, RecordError> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (priority, description) = line.split_once('\t').ok_or(RecordError::MissingTab)?;

        let priority = priority
            .parse::<i32>()
            .map_err(|_| RecordError::InvalidPriority {
                value: priority.to_string(),
            })?;

        Ok(Task::new(priority, description)?)
    }

    /// Render a task as a record line, including the trailing newline
    pub fn format_line(task: &Task) -> String {
        format!("{}\n", task)
    }

    /// Load every task in `path`, in file order
    pub fn load_tasks<P: AsRef<Path>>(path: P, mode: LoadMode) -> Result<Vec<Task>, FileError> {
        let path = path.as_ref();
        let content = Self::load_utf8_file(path)?;
        let tasks = Self::parse_task_file_content(&content, path, mode)?;

        debug!("Parsed {} tasks from {:?}", tasks.len(), path);
        Ok(tasks)
    }

    fn parse_task_file_content(
        content: &str,
        source_path: &Path,
        mode: LoadMode,
    ) -> Result<Vec<Task>, FileError> {
        let mut tasks = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match Self::parse_line(line) {
                Ok(task) => tasks.push(task),
                Err(source) => match mode {
                    LoadMode::Strict => {
                        return Err(FileError::MalformedRecord {
                            path: source_path.to_path_buf(),
                            line: line_num + 1,
                            source,
                        });
                    }
                    LoadMode::Lenient => {
                        warn!(
                            "Skipping line {} of {:?}: {}",
                            line_num + 1,
                            source_path,
                            source
                        );
                    }
                },
            }
        }

        if tasks.is_empty() {
            warn!("No tasks found in file: {:?}", source_path);
        }

        Ok(tasks)
    }

    /// Write `tasks` to `path` in the order given, replacing any existing
    /// file. The records are written to a staging file next to `path` first
    /// and renamed over it once complete, so a failed save leaves the old
    /// file intact. Returns the number of records written.
    pub fn save_tasks<'a, P, I>(path: P, tasks: I) -> Result<usize, FileError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = &'a Task>,
    {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| FileError::IoError {
            path: path.to_path_buf(),
            source,
        };

        let staging = env::staging_file_path(path).ok_or_else(|| {
            io_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "task file path has no file name",
            ))
        })?;

        let written = match Self::write_records(&staging, tasks) {
            Ok(written) => written,
            Err(source) => {
                let _ = fs::remove_file(&staging);
                return Err(io_error(source));
            }
        };
        if let Err(source) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(io_error(source));
        }

        debug!("Wrote {} records to {:?}", written, path);
        Ok(written)
    }

    fn write_records<'a, I>(target: &Path, tasks: I) -> std::io::Result<usize>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut writer = BufWriter::new(File::create(target)?);
        let mut written = 0;
        for task in tasks {
            writer.write_all(Self::format_line(task).as_bytes())?;
            written += 1;
        }

        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(written)
    }
}
