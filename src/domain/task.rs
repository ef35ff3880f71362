//! Task domain model
//!
//! A task is a description plus a done flag, in one of three kinds:
//! a plain todo, a deadline with a due time, or an event spanning a
//! start and end time.

use std::fmt;

use thiserror::Error;

use super::datetime::{format_display, Timestamp};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Error: Please provide a description for {0} task.")]
    EmptyDescription(&'static str),

    #[error("Error: /to date cannot be before /from date for Event task")]
    EndBeforeStart,
}

/// The kind of a task and its kind-specific fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { due: Timestamp },
    Event { start: Timestamp, end: Timestamp },
}

impl TaskKind {
    /// Single-letter tag used in listings and the task file
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// Lower-case name matching the command keyword
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline { .. } => "deadline",
            TaskKind::Event { .. } => "event",
        }
    }
}

/// A tracked item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Creates a task, trimming the description
    ///
    /// Rejects an empty description and an event that ends before it starts.
    pub fn new(description: &str, kind: TaskKind) -> Result<Self, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription(kind.name()));
        }

        if let TaskKind::Event { start, end } = kind {
            if end < start {
                return Err(TaskError::EndBeforeStart);
            }
        }

        Ok(Self {
            description: description.to_string(),
            done: false,
            kind,
        })
    }

    pub fn todo(description: &str) -> Result<Self, TaskError> {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: &str, due: Timestamp) -> Result<Self, TaskError> {
        Self::new(description, TaskKind::Deadline { due })
    }

    pub fn event(description: &str, start: Timestamp, end: Timestamp) -> Result<Self, TaskError> {
        Self::new(description, TaskKind::Event { start, end })
    }

    /// Sets the done flag, builder style
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn unmark_done(&mut self) {
        self.done = false;
    }

    /// Returns `[X]` when done, `[ ]` otherwise
    pub fn status_icon(&self) -> &'static str {
        if self.done {
            "[X]"
        } else {
            "[ ]"
        }
    }

    /// Case-insensitive substring match on the description
    pub fn matches(&self, needle: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]{} {}",
            self.kind.tag(),
            self.status_icon(),
            self.description
        )?;

        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", format_display(due)),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                format_display(start),
                format_display(end)
            ),
        }
    }
}
