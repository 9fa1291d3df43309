use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Size of the description buffer in the on-disk format, terminator included
pub const TASK_DESC_SIZE: usize = 128;

/// Longest description accepted, in bytes
pub const MAX_DESCRIPTION_LEN: usize = TASK_DESC_SIZE - 1;

/// Reasons a task value cannot be constructed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Description exceeds [`MAX_DESCRIPTION_LEN`]. Descriptions are never truncated.
    #[error("description is {len} bytes long, the maximum is {max}")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("description cannot contain line breaks")]
    InvalidDescription,
}

/// A to-do entry: a priority plus a bounded description.
///
/// Lower priority values are more urgent. Fields are private so a task, once
/// built, can only be replaced as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Task {
    priority: i32,
    description: String,
}

impl Task {
    /// Create a task, rejecting descriptions that are too long or that span
    /// more than one line
    pub fn new(priority: i32, description: impl Into<String>) -> Result<Self, TaskError> {
        let description = description.into();

        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(TaskError::DescriptionTooLong {
                len: description.len(),
                max: MAX_DESCRIPTION_LEN,
            });
        }
        if description.contains(['\n', '\r']) {
            return Err(TaskError::InvalidDescription);
        }

        Ok(Self {
            priority,
            description,
        })
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Heap comparator: orders by priority only, equal priorities compare equal
    pub fn compare_priority(left: &Task, right: &Task) -> Ordering {
        left.priority.cmp(&right.priority)
    }
}

/// Renders the task as a record line, without the line terminator
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.priority, self.description)
    }
}
