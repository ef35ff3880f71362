//! Cow - a line-command task tracker
//!
//! Tasks (todos, deadlines and events) are added, listed, searched, marked
//! and deleted through one-line commands and kept in a plain text file
//! between runs.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Command, CommandResult, Task, TaskKind, TaskList};
