//! CLI-specific functionality for the to-do list
//!
//! This module contains all CLI-related code including argument parsing,
//! command execution, the interactive session, task file handling and
//! configuration discovery.

pub mod args;
pub mod commands;
pub mod config;
pub mod interactive;
pub mod tasks;

pub use args::{Args, ExecutionMode, RunConfig};
pub use commands::{CommandRunner, CommandStatus};
pub use config::{ConfigDiscovery, ConfigError, TodoConfig};
pub use interactive::InteractiveSession;
pub use tasks::{FileError, LoadMode, RecordError, TaskLoader};
