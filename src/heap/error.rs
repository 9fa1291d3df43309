use thiserror::Error;

/// Failures reported by [`DynArray`](super::DynArray) and [`MinHeap`](super::MinHeap).
///
/// None of these are ever papered over with a default value: every violated
/// precondition comes back to the caller as one of these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// Backing storage could not be reserved. The container is left as it was.
    #[error("failed to reserve storage for {requested} elements")]
    Allocation { requested: usize },

    #[error("index {index} out of range for container of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// `remove_last` on an empty container
    #[error("cannot remove from an empty container")]
    Underflow,

    /// `peek_min` / `remove_min` on an empty heap
    #[error("heap is empty")]
    EmptyHeap,
}

pub type HeapResult<T> = std::result::Result<T, HeapError>;
