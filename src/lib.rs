//! # todo-heap
//!
//! A priority-ordered to-do list. Tasks carry an integer priority (lower is
//! more urgent) and a short description, live in a binary min-heap while the
//! program runs, and are persisted as tab-separated text between runs.
//!
//! ## Architecture Overview
//!
//! - **[`heap`]**: growable array and the binary min-heap built on it
//! - **[`task`]**: the task value type and the [`TaskList`] that owns the heap
//! - **[`cli`]**: argument parsing, command execution, the interactive
//!   session, task file I/O and configuration discovery
//! - **[`env`]**: file names, paths and defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use todo_heap::{Task, TaskList};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut list = TaskList::new()?;
//! list.add(Task::new(3, "Buy milk")?)?;
//! list.add(Task::new(1, "Call mom")?)?;
//!
//! assert_eq!(list.first()?.description(), "Call mom");
//! assert_eq!(list.remove_first()?.priority(), 1);
//! # Ok(())
//! # }
//! ```

/// Growable array and binary min-heap.
///
/// The heap is generic over its element type and takes its ordering as an
/// injected comparator.
pub mod heap;

/// Task values and the priority-ordered task list.
pub mod task;

/// Command-line front end: arguments, commands, interactive mode, task file
/// codec and configuration.
pub mod cli;

/// Environment constants and path utilities.
pub mod env;

pub use heap::{DynArray, HeapError, MinHeap};
pub use task::{Task, TaskError, TaskList, TaskListError};
