//! Environment constants and path utilities for the to-do list.
//!
//! This module centralizes the file names, directory names and defaults used
//! by configuration discovery and task file handling.

use std::path::{Path, PathBuf};

/// Application directory name (hidden directory like .git, .vscode)
pub const TODO_DIR_NAME: &str = ".todo";

/// Configuration file name inside [`TODO_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration file name when placed directly in the working directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "todo.toml";

/// Task file used when neither the command line nor the config names one
pub const DEFAULT_TASK_FILE: &str = "todo.txt";

/// Starting capacity of a freshly created task list
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "todo_heap=info";

/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "todo_heap=debug";

/// System-wide configuration file (Unix-like systems)
#[cfg(unix)]
pub const SYSTEM_CONFIG_FILE: &str = "/etc/todo/config.toml";

/// Build config directory path in user's home directory
pub fn user_config_dir_path(home_dir: &Path) -> PathBuf {
    home_dir.join(TODO_DIR_NAME)
}

/// Build config file path in user's home directory
pub fn user_config_file_path(home_dir: &Path) -> PathBuf {
    user_config_dir_path(home_dir).join(CONFIG_FILE_NAME)
}

/// Build the hidden-directory config file path in the current directory
pub fn local_config_file_path(current_dir: &Path) -> PathBuf {
    current_dir.join(TODO_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Sibling path a task file is staged at before being renamed into place
pub fn staging_file_path(target: &Path) -> Option<PathBuf> {
    let file_name = target.file_name()?.to_string_lossy();
    Some(target.with_file_name(format!(".{}.tmp", file_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let home_dir = Path::new("/home/user");
        let current_dir = Path::new("/current/project");

        assert_eq!(
            user_config_file_path(home_dir),
            Path::new("/home/user/.todo/config.toml")
        );

        assert_eq!(
            local_config_file_path(current_dir),
            Path::new("/current/project/.todo/config.toml")
        );
    }

    #[test]
    fn test_staging_file_path() {
        assert_eq!(
            staging_file_path(Path::new("/lists/todo.txt")),
            Some(PathBuf::from("/lists/.todo.txt.tmp"))
        );
        assert_eq!(
            staging_file_path(Path::new("work.txt")),
            Some(PathBuf::from(".work.txt.tmp"))
        );
        assert_eq!(staging_file_path(Path::new("/")), None);
    }
}
