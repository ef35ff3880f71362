//! Command parsing
//!
//! Turns one raw input line into a [`Command`]. Parsing never fails: input
//! that cannot be understood becomes [`Command::Incorrect`] or
//! [`Command::Unknown`] carrying the message to show.
//!
//! Multi-field commands use plain first-match substring scanning:
//!
//! ```text
//! deadline <description> /by <when>
//! event <description> /from <start> /to <end>
//! ```

use super::datetime::{parse_datetime, Timestamp};
use super::task::TaskError;

const BY: &str = "/by";
const FROM: &str = "/from";
const TO: &str = "/to";

const DEADLINE_FORMAT_HINT: &str = "Format for Deadline is: deadline <description> /by <deadline>";
const EVENT_FORMAT_HINT: &str =
    "Format for Event is: event <description> /from <fromDate> /to <toDate>";

pub const UNKNOWN_MESSAGE: &str = "Sorry, I don't know what that means.";

/// A parsed user request
///
/// Indices are 0-based and unchecked; the task list validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    Find(String),
    Delete(i64),
    Mark(i64),
    Unmark(i64),
    AddTodo(String),
    AddDeadline {
        description: String,
        due: Timestamp,
    },
    AddEvent {
        description: String,
        start: Timestamp,
        end: Timestamp,
    },
    Incorrect(String),
    Unknown(String),
}

impl Command {
    /// Parses one input line
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (keyword, remainder) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim_start()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "bye" | "exit" | "close" => Command::Exit,
            "list" => Command::List,
            "find" => Command::Find(remainder.trim().to_string()),
            "delete" => parse_index(remainder, "delete").map_or_else(|e| e, Command::Delete),
            "mark" => parse_index(remainder, "mark").map_or_else(|e| e, Command::Mark),
            "unmark" => parse_index(remainder, "unmark").map_or_else(|e| e, Command::Unmark),
            "todo" => parse_todo(remainder),
            "deadline" => parse_deadline(remainder),
            "event" => parse_event(remainder),
            _ => Command::Unknown(UNKNOWN_MESSAGE.to_string()),
        }
    }

    /// Stable lower-case name of the variant
    pub fn name(&self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::List => "list",
            Command::Find(_) => "find",
            Command::Delete(_) => "delete",
            Command::Mark(_) => "mark",
            Command::Unmark(_) => "unmark",
            Command::AddTodo(_) => "todo",
            Command::AddDeadline { .. } => "deadline",
            Command::AddEvent { .. } => "event",
            Command::Incorrect(_) => "incorrect",
            Command::Unknown(_) => "unknown",
        }
    }
}

fn incorrect(message: impl Into<String>) -> Command {
    Command::Incorrect(message.into())
}

/// Parses a 1-based index into a 0-based one
fn parse_index(text: &str, keyword: &str) -> Result<i64, Command> {
    text.trim()
        .parse::<i64>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .ok_or_else(|| incorrect(format!("Please enter a valid index for {keyword} request.")))
}

fn parse_todo(remainder: &str) -> Command {
    let description = remainder.trim();
    if description.is_empty() {
        return incorrect(TaskError::EmptyDescription("todo").to_string());
    }
    Command::AddTodo(description.to_string())
}

fn parse_deadline(remainder: &str) -> Command {
    let Some((description, when)) = remainder.split_once(BY) else {
        return incorrect(format!("Error: Missing deadline.\n{DEADLINE_FORMAT_HINT}"));
    };

    let description = description.trim();
    let when = when.trim();

    if when.is_empty() {
        return incorrect(format!("Error: Missing deadline.\n{DEADLINE_FORMAT_HINT}"));
    }
    if description.is_empty() {
        return incorrect(TaskError::EmptyDescription("deadline").to_string());
    }

    match parse_datetime(when) {
        Ok(due) => Command::AddDeadline {
            description: description.to_string(),
            due,
        },
        Err(e) => incorrect(e.to_string()),
    }
}

fn parse_event(remainder: &str) -> Command {
    let (from_at, to_at) = match (remainder.find(FROM), remainder.find(TO)) {
        (Some(from_at), Some(to_at)) if from_at < to_at => (from_at, to_at),
        _ => {
            return incorrect(format!(
                "Error: Please provide both /from and /to dates, in that order.\n{EVENT_FORMAT_HINT}"
            ))
        }
    };

    let description = remainder[..from_at].trim();
    let start_text = remainder[from_at + FROM.len()..to_at].trim();
    let end_text = remainder[to_at + TO.len()..].trim();

    if start_text.is_empty() || end_text.is_empty() {
        return incorrect(format!(
            "Error: Missing from date / to date.\n{EVENT_FORMAT_HINT}"
        ));
    }
    if description.is_empty() {
        return incorrect(TaskError::EmptyDescription("event").to_string());
    }

    let start = match parse_datetime(start_text) {
        Ok(ts) => ts,
        Err(e) => return incorrect(e.to_string()),
    };
    let end = match parse_datetime(end_text) {
        Ok(ts) => ts,
        Err(e) => return incorrect(e.to_string()),
    };

    if end < start {
        return incorrect(TaskError::EndBeforeStart.to_string());
    }

    Command::AddEvent {
        description: description.to_string(),
        start,
        end,
    }
}
