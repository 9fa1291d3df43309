//! Menu-driven to-do list session
//!
//! Each turn prints the menu, reads a one-letter choice and runs it against
//! the in-memory [`TaskList`]. Errors from a single action are reported to
//! the user and the session continues; only failures writing to the output
//! end it. End of input is treated like `e`.

use super::tasks::LoadMode;
use crate::task::{Task, TaskList};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

const MENU: &str = "\n\n** TO-DO LIST APPLICATION **\n\n\
Press:\n\
'l' to load to-do list from a file\n\
's' to save to-do list to a file\n\
'a' to add a new task\n\
'g' to get the first task\n\
'r' to remove the first task\n\
'p' to print the list\n\
'e' to exit the program\n";

const EMPTY_LIST: &str = "Your to-do list is empty!";

pub struct InteractiveSession<R, W> {
    input: R,
    output: W,
    list: TaskList,
    default_file: PathBuf,
    load_mode: LoadMode,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(
        input: R,
        output: W,
        list: TaskList,
        default_file: PathBuf,
        load_mode: LoadMode,
    ) -> Self {
        Self {
            input,
            output,
            list,
            default_file,
            load_mode,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive session");
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Your choice: ")? else {
                break;
            };

            debug!("Menu choice: {:?}", choice);
            match choice.as_str() {
                "l" => self.load()?,
                "s" => self.save()?,
                "a" => self.add()?,
                "g" => self.show_first()?,
                "r" => self.remove_first()?,
                "p" => self.print()?,
                "e" => break,
                _ => writeln!(self.output, "Unknown command '{}'.", choice)?,
            }
        }

        writeln!(self.output, "Bye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Hand the list back once the session is over
    pub fn into_list(self) -> TaskList {
        self.list
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_file(&mut self) -> Result<Option<PathBuf>> {
        let message = format!(
            "Please enter the filename [{}]: ",
            self.default_file.display()
        );
        Ok(self.prompt(&message)?.map(|name| {
            if name.is_empty() {
                self.default_file.clone()
            } else {
                PathBuf::from(name)
            }
        }))
    }

    fn load(&mut self) -> Result<()> {
        let Some(path) = self.prompt_file()? else {
            return Ok(());
        };
        match self.list.load(&path, self.load_mode) {
            Ok(count) => writeln!(
                self.output,
                "The list has been loaded from file successfully ({} tasks added).",
                count
            )?,
            Err(e) => writeln!(self.output, "Could not load the list: {}", e)?,
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let Some(path) = self.prompt_file()? else {
            return Ok(());
        };
        match self.list.save(&path) {
            Ok(()) => writeln!(
                self.output,
                "The list has been saved into the file successfully."
            )?,
            Err(e) => writeln!(self.output, "Could not save the list: {}", e)?,
        }
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let Some(description) = self.prompt("Please enter the task description: ")? else {
            return Ok(());
        };
        let Some(priority) = self.prompt("Please enter the task priority: ")? else {
            return Ok(());
        };

        let Ok(priority) = priority.parse::<i32>() else {
            writeln!(self.output, "'{}' is not a valid priority.", priority)?;
            return Ok(());
        };

        let task = match Task::new(priority, description) {
            Ok(task) => task,
            Err(e) => {
                writeln!(self.output, "Could not create the task: {}", e)?;
                return Ok(());
            }
        };

        let message = format!(
            "The task '{}' has been added to your to-do list.",
            task.description()
        );
        match self.list.add(task) {
            Ok(()) => writeln!(self.output, "{}", message)?,
            Err(e) => writeln!(self.output, "Could not add the task: {}", e)?,
        }
        Ok(())
    }

    fn show_first(&mut self) -> Result<()> {
        match self.list.first() {
            Ok(task) => writeln!(self.output, "Your first task is: {}", task.description())?,
            Err(_) => writeln!(self.output, "{}", EMPTY_LIST)?,
        }
        Ok(())
    }

    fn remove_first(&mut self) -> Result<()> {
        match self.list.remove_first() {
            Ok(task) => writeln!(
                self.output,
                "Your first task '{}' has been removed from the list.",
                task.description()
            )?,
            Err(_) => writeln!(self.output, "{}", EMPTY_LIST)?,
        }
        Ok(())
    }

    fn print(&mut self) -> Result<()> {
        if self.list.is_empty() {
            writeln!(self.output, "{}", EMPTY_LIST)?;
            return Ok(());
        }
        self.list.print(&mut self.output)?;
        Ok(())
    }
}
