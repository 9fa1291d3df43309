//! Command line argument parsing
//!
//! This module handles CLI argument parsing with subcommands:
//! - `add`: Add a task to the list
//! - `list`: Print every task in priority order
//! - `next`: Print the most urgent task
//! - `pop`: Remove and print the most urgent task
//! - `clear`: Remove every task
//! - `interactive`: Run the menu-driven session
//! - `show-config`: Show configuration discovery information
//! - `init-config`: Write a default user configuration file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    Add { priority: i32, description: String },
    List,
    Next,
    Pop,
    Clear,
    Interactive,
    ShowConfig,
    InitConfig,
}

#[derive(Debug)]
pub struct RunConfig {
    pub mode: ExecutionMode,
    pub file_override: Option<PathBuf>,
    pub config_override: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(author = "todo-heap contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A priority-ordered to-do list stored as tab-separated text")]
#[command(long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Task file (defaults to the configured task file)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,
    /// Configuration file path
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task priority (lower is more urgent)
        #[arg(allow_negative_numbers = true)]
        priority: i32,
        /// Task description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Print all tasks in priority order
    List,
    /// Print the most urgent task
    Next,
    /// Remove and print the most urgent task
    Pop,
    /// Remove every task
    Clear,
    /// Run in interactive mode
    Interactive,
    /// Show configuration discovery information
    ShowConfig,
    /// Create a default configuration file in the home directory
    InitConfig,
}

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn run_config(&self) -> Result<RunConfig, String> {
        Ok(RunConfig {
            mode: self.mode()?,
            file_override: self.file.clone(),
            config_override: self.config.clone(),
            verbose: self.verbose,
        })
    }

    pub fn mode(&self) -> Result<ExecutionMode, String> {
        match &self.command {
            Some(Commands::Add {
                priority,
                description,
            }) => Ok(ExecutionMode::Add {
                priority: *priority,
                description: description.join(" "),
            }),
            Some(Commands::List) => Ok(ExecutionMode::List),
            Some(Commands::Next) => Ok(ExecutionMode::Next),
            Some(Commands::Pop) => Ok(ExecutionMode::Pop),
            Some(Commands::Clear) => Ok(ExecutionMode::Clear),
            Some(Commands::Interactive) => Ok(ExecutionMode::Interactive),
            Some(Commands::ShowConfig) => Ok(ExecutionMode::ShowConfig),
            Some(Commands::InitConfig) => Ok(ExecutionMode::InitConfig),
            None => {
                Err("No command specified. Use 'todo --help' to see available commands.".to_string())
            }
        }
    }
}
