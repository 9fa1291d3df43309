use crate::cli::tasks::{FileError, LoadMode, TaskLoader};
use crate::env;
use crate::heap::{CompareFn, HeapError, MinHeap};
use crate::task::types::Task;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Priority queue of tasks, ordered by [`Task::compare_priority`]
pub type TaskHeap = MinHeap<Task, CompareFn<Task>>;

#[derive(Debug, Error)]
pub enum TaskListError {
    #[error(transparent)]
    Heap(#[from] HeapError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error("failed to write task report: {0}")]
    Report(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskListError>;

/// The to-do list: owns every task and hands them out in priority order
#[derive(Debug)]
pub struct TaskList {
    heap: TaskHeap,
}

impl TaskList {
    pub fn new() -> Result<Self> {
        Self::with_capacity(env::DEFAULT_INITIAL_CAPACITY)
    }

    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        let heap = MinHeap::with_comparator(
            initial_capacity,
            Task::compare_priority as CompareFn<Task>,
        )?;
        Ok(Self { heap })
    }

    pub fn add(&mut self, task: Task) -> Result<()> {
        debug!("Adding task with priority {}", task.priority());
        self.heap.insert(task)?;
        Ok(())
    }

    /// Most urgent task, left in place
    pub fn first(&self) -> Result<&Task> {
        Ok(self.heap.peek_min()?)
    }

    pub fn remove_first(&mut self) -> Result<Task> {
        let task = self.heap.remove_min()?;
        debug!("Removed task with priority {}", task.priority());
        Ok(task)
    }

    pub fn len(&self) -> usize {
        self.heap.size()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Tasks in storage order, which is not sorted
    pub fn tasks(&self) -> &[Task] {
        self.heap.as_slice()
    }

    /// All tasks in ascending priority order. The list itself is not
    /// modified: a copy of the heap is drained instead. Heap order already
    /// holds on the copy, so it is drained as-is.
    pub fn sorted(&self) -> Result<Vec<Task>> {
        let mut scratch = self.heap.copy()?;
        Ok(scratch.drain_sorted().collect())
    }

    /// Write every task in ascending priority order, one record per line.
    /// Returns the number of lines written.
    pub fn print(&self, out: &mut dyn Write) -> Result<usize> {
        let sorted = self.sorted()?;
        for task in &sorted {
            writeln!(out, "{}", task)?;
        }
        Ok(sorted.len())
    }

    /// Remove every task in priority order, reporting each one to `reporter`
    /// when given. Returns how many tasks were removed.
    pub fn delete_all(&mut self, mut reporter: Option<&mut dyn Write>) -> Result<usize> {
        let mut removed = 0;
        while !self.heap.is_empty() {
            let task = self.heap.remove_min()?;
            if let Some(out) = reporter.as_mut() {
                writeln!(out, "{}", task)?;
            }
            removed += 1;
        }
        info!("Deleted {} tasks", removed);
        Ok(removed)
    }

    /// Append the tasks stored in `path`. Existing tasks are kept.
    pub fn load<P: AsRef<Path>>(&mut self, path: P, mode: LoadMode) -> Result<usize> {
        let path = path.as_ref();
        let tasks = TaskLoader::load_tasks(path, mode)?;
        let added = self.heap.extend(tasks)?;
        info!("Loaded {} tasks from {:?}", added, path);
        Ok(added)
    }

    /// Write every task to `path` in storage order
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if self.is_empty() {
            warn!("Saving an empty task list to {:?}", path);
        }
        let written = TaskLoader::save_tasks(path, self.heap.iter())?;
        info!("Saved {} tasks to {:?}", written, path);
        Ok(())
    }
}
