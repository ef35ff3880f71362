//! Interactive session
//!
//! Reads commands line by line, executes them against the loaded task list
//! and persists the list after changes and on exit.

use std::io::BufRead;

use anyhow::Result;

use super::output::Output;
use crate::domain::{execute, Command, TaskList};
use crate::storage::TaskStore;

/// One run of the shell over a task file
pub struct Session {
    store: TaskStore,
    tasks: TaskList,
    autosave: bool,
}

impl Session {
    /// Loads the task file, reporting skipped lines as warnings
    ///
    /// Fails only when the task file cannot be created. An unreadable file
    /// is reported and the session starts with whatever could be read.
    pub fn open(store: TaskStore, autosave: bool, output: &Output) -> Result<Self> {
        output.verbose_ctx("load", &format!("Loading tasks from {}", store.path().display()));

        let report = store.load()?;
        if report.created {
            output.verbose_ctx("load", "Task file did not exist, created an empty one");
        }
        for skipped in &report.skipped {
            output.warn(&format!("skipping line {}: {}", skipped.line, skipped.reason));
        }
        if let Some(reason) = &report.load_error {
            output.warn(&format!("{}; continuing with {} loaded tasks", reason, report.tasks.len()));
        }
        output.verbose_ctx("load", &format!("Loaded {} tasks", report.tasks.len()));

        Ok(Self {
            store,
            tasks: report.tasks,
            autosave,
        })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Handles one input line, returning true when the session should end
    pub fn handle_line(&mut self, line: &str, output: &Output) -> bool {
        if line.trim().is_empty() {
            return false;
        }

        let command = Command::parse(line);
        output.verbose_ctx("command", &format!("{:?}", command));

        let result = execute(&command, &mut self.tasks);
        output.result(command.name(), &result);

        if result.mutated && self.autosave {
            self.save(output);
        }
        if result.exit {
            self.save(output);
        }

        result.exit
    }

    /// Runs until an exit command or end of input
    pub fn run(&mut self, input: impl BufRead, output: &Output) {
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    output.error(&format!("Failed to read input: {}", e));
                    break;
                }
            };

            if self.handle_line(&line, output) {
                return;
            }
        }

        output.verbose("End of input");
        self.save(output);
    }

    /// Saves the list, reporting failure without ending the session
    fn save(&self, output: &Output) {
        match self.store.save(&self.tasks) {
            Ok(()) => output.verbose_ctx(
                "save",
                &format!("Saved {} tasks to {}", self.tasks.len(), self.store.path().display()),
            ),
            Err(e) => output.error(&format!("{:#}", e)),
        }
    }
}
