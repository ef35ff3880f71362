//! Domain models for the task tracker
//!
//! Contains parsing, the task model and command execution without any I/O
//! concerns.

mod command;
mod datetime;
mod executor;
mod task;
mod task_list;

pub use command::{Command, UNKNOWN_MESSAGE};
pub use datetime::{
    format_display, format_storage, parse_datetime, DateTimeError, Timestamp, DISPLAY_FORMAT,
    STORAGE_FORMAT,
};
pub use executor::{execute, CommandResult, FAREWELL_MESSAGE};
pub use task::{Task, TaskError, TaskKind};
pub use task_list::{TaskList, TaskListError, EMPTY_LIST_MESSAGE};
