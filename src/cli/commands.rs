//! Subcommand execution
//!
//! Every command that touches tasks reads the whole task file into a fresh
//! [`TaskList`], works on it in memory and, if it changed anything, writes
//! the whole list back.

use super::args::ExecutionMode;
use super::config::{ConfigDiscovery, TodoConfig};
use super::interactive::InteractiveSession;
use super::tasks::FileError;
use crate::task::{Task, TaskList, TaskListError};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a command that ran without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Done,
    /// `next` or `pop` found no task to show
    ListEmpty,
}

pub struct CommandRunner {
    config: TodoConfig,
    task_file: PathBuf,
    verbose: bool,
}

impl CommandRunner {
    pub fn new(config: TodoConfig, file_override: Option<&Path>, verbose: bool) -> Self {
        let task_file = config.resolve_task_file(file_override);
        Self {
            config,
            task_file,
            verbose,
        }
    }

    pub fn task_file(&self) -> &Path {
        &self.task_file
    }

    /// Run `mode` and flush `out`; output that could not be delivered is an error
    pub fn execute(&self, mode: &ExecutionMode, out: &mut dyn Write) -> Result<CommandStatus> {
        debug!("Executing {:?} against {:?}", mode, self.task_file);

        let status = self.dispatch(mode, out)?;
        out.flush().context("Failed to flush output")?;
        Ok(status)
    }

    fn dispatch(&self, mode: &ExecutionMode, out: &mut dyn Write) -> Result<CommandStatus> {
        match mode {
            ExecutionMode::Add {
                priority,
                description,
            } => {
                let task = Task::new(*priority, description.as_str())
                    .context("Invalid task description")?;
                let record = task.to_string();
                let mut list = self.open_list()?;
                list.add(task)?;
                self.save_list(&list)?;
                writeln!(out, "Added: {}", record)?;
            }
            ExecutionMode::List => {
                let list = self.open_list()?;
                list.print(out)?;
            }
            ExecutionMode::Next => {
                let list = self.open_list()?;
                match list.first() {
                    Ok(task) => writeln!(out, "{}", task)?,
                    Err(_) => return Ok(CommandStatus::ListEmpty),
                }
            }
            ExecutionMode::Pop => {
                let mut list = self.open_list()?;
                if list.is_empty() {
                    return Ok(CommandStatus::ListEmpty);
                }
                let task = list.remove_first()?;
                self.save_list(&list)?;
                writeln!(out, "{}", task)?;
            }
            ExecutionMode::Clear => {
                let mut list = self.open_list()?;
                let reporter = if self.verbose { Some(&mut *out) } else { None };
                let removed = list.delete_all(reporter)?;
                self.save_list(&list)?;
                info!("Cleared {} tasks from {:?}", removed, self.task_file);
            }
            ExecutionMode::Interactive => {
                let list = self.new_list()?;
                let stdin = std::io::stdin();
                let mut session = InteractiveSession::new(
                    stdin.lock(),
                    &mut *out,
                    list,
                    self.task_file.clone(),
                    self.config.load_mode,
                );
                session.run()?;
            }
            ExecutionMode::ShowConfig => {
                ConfigDiscovery::show_discovery_info(out)?;
                writeln!(out, "Task file: {:?}", self.task_file)?;
            }
            ExecutionMode::InitConfig => {
                let path = ConfigDiscovery::create_default_user_config()?;
                writeln!(out, "Configuration file: {:?}", path)?;
            }
        }

        Ok(CommandStatus::Done)
    }

    fn new_list(&self) -> Result<TaskList> {
        Ok(TaskList::with_capacity(self.config.initial_capacity)?)
    }

    /// Load the task file; a missing file is an empty list
    fn open_list(&self) -> Result<TaskList> {
        let mut list = self.new_list()?;
        match list.load(&self.task_file, self.config.load_mode) {
            Ok(_) => {}
            Err(TaskListError::File(FileError::NotFound { .. })) => {
                debug!("{:?} does not exist yet, starting empty", self.task_file);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to load tasks from {:?}", self.task_file));
            }
        }
        Ok(list)
    }

    fn save_list(&self, list: &TaskList) -> Result<()> {
        list.save(&self.task_file)
            .with_context(|| format!("Failed to save tasks to {:?}", self.task_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tasks::LoadMode;
    use std::fs;
    use tempfile::TempDir;

    fn runner(dir: &TempDir, verbose: bool) -> CommandRunner {
        let path = dir.path().join("todo.txt");
        CommandRunner::new(TodoConfig::default(), Some(&path), verbose)
    }

    fn run(runner: &CommandRunner, mode: ExecutionMode) -> (CommandStatus, String) {
        let mut out: Vec<u8> = Vec::new();
        let status = runner.execute(&mode, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    fn add(priority: i32, description: &str) -> ExecutionMode {
        ExecutionMode::Add {
            priority,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_add_creates_file() {
        let dir = TempDir::new().unwrap();
        let runner = runner(&dir, false);

        let (status, out) = run(&runner, add(3, "Buy milk"));
        assert_eq!(status, CommandStatus::Done);
        assert_eq!(out, "Added: 3\tBuy milk\n");
        assert_eq!(
            fs::read_to_string(runner.task_file()).unwrap(),
            "3\tBuy milk\n"
        );
    }

    #[test]
    fn test_list_is_sorted_and_read_only() {
        let dir = TempDir::new().unwrap();
        let runner = runner(&dir, false);
        fs::write(runner.task_file(), "3\tBuy milk\n1\tCall mom\n2\tWrite report\n").unwrap();

        let (_, out) = run(&runner, ExecutionMode::List);
        assert_eq!(out, "1\tCall mom\n2\tWrite report\n3\tBuy milk\n");
        assert_eq!(
            fs::read_to_string(runner.task_file()).unwrap(),
            "3\tBuy milk\n1\tCall mom\n2\tWrite report\n"
        );
    }

    #[test]
    fn test_next_and_pop() {
        let dir = TempDir::new().unwrap();
        let runner = runner(&dir, false);
        run(&runner, add(2, "Second"));
        run(&runner, add(1, "First"));

        assert_eq!(run(&runner, ExecutionMode::Next).1, "1\tFirst\n");
        assert_eq!(run(&runner, ExecutionMode::Pop).1, "1\tFirst\n");
        assert_eq!(run(&runner, ExecutionMode::Pop).1, "2\tSecond\n");

        let (status, out) = run(&runner, ExecutionMode::Pop);
        assert_eq!(status, CommandStatus::ListEmpty);
        assert!(out.is_empty());
        assert_eq!(run(&runner, ExecutionMode::Next).0, CommandStatus::ListEmpty);
    }

    #[test]
    fn test_clear_verbose_reports_each_task() {
        let dir = TempDir::new().unwrap();
        let runner = runner(&dir, true);
        fs::write(runner.task_file(), "5\tA\n2\tB\n").unwrap();

        let (_, out) = run(&runner, ExecutionMode::Clear);
        assert_eq!(out, "2\tB\n5\tA\n");
        assert_eq!(fs::read_to_string(runner.task_file()).unwrap(), "");
    }

    #[test]
    fn test_missing_file_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let runner = runner(&dir, false);

        let (status, out) = run(&runner, ExecutionMode::List);
        assert_eq!(status, CommandStatus::Done);
        assert!(out.is_empty());
        assert!(!runner.task_file().exists());
    }

    #[test]
    fn test_malformed_file_is_an_error_in_strict_mode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.txt");
        fs::write(&path, "1\tok\nbroken\n").unwrap();

        let strict = CommandRunner::new(TodoConfig::default(), Some(&path), false);
        let err = strict
            .execute(&ExecutionMode::List, &mut Vec::<u8>::new())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));

        let lenient_config = TodoConfig {
            load_mode: LoadMode::Lenient,
            ..TodoConfig::default()
        };
        let lenient = CommandRunner::new(lenient_config, Some(&path), false);
        assert_eq!(run(&lenient, ExecutionMode::List).1, "1\tok\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_flush_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let runner = runner(&dir, false);
        fs::write(runner.task_file(), "1\tCall mom\n").unwrap();

        let err = runner
            .execute(&ExecutionMode::List, &mut BrokenPipe)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to flush output"));
    }

    #[test]
    fn test_add_rejects_long_description() {
        let dir = TempDir::new().unwrap();
        let runner = runner(&dir, false);

        let result = runner.execute(&add(1, &"x".repeat(500)), &mut Vec::<u8>::new());
        assert!(result.is_err());
        assert!(!runner.task_file().exists());
    }
}
