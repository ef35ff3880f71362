//! Line codec for the task file
//!
//! One task per line, pipe-delimited:
//!
//! ```text
//! T|0|read book
//! D|1|return book|2/12/2019 1800
//! E|0|project meeting|2/12/2019 1400|2/12/2019 1600
//! ```
//!
//! The tag and done flag are split off the front and timestamps off the
//! back, so whatever remains in the middle is the description, pipes
//! included.

use thiserror::Error;

use crate::domain::{format_storage, parse_datetime, DateTimeError, Task, TaskError, TaskKind};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("too few fields")]
    MissingFields,

    #[error("unknown task type '{0}'")]
    UnknownType(String),

    #[error("invalid done flag '{0}', expected 0 or 1")]
    InvalidDoneFlag(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] DateTimeError),

    #[error("invalid task: {0}")]
    InvalidTask(#[from] TaskError),
}

const SEPARATOR: char = '|';

/// Encodes a task as a single line, without a line terminator
pub fn encode(task: &Task) -> String {
    let done = if task.is_done() { '1' } else { '0' };
    let head = format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}",
        task.kind().tag(),
        done,
        task.description()
    );

    match task.kind() {
        TaskKind::Todo => head,
        TaskKind::Deadline { due } => format!("{head}{SEPARATOR}{}", format_storage(due)),
        TaskKind::Event { start, end } => format!(
            "{head}{SEPARATOR}{}{SEPARATOR}{}",
            format_storage(start),
            format_storage(end)
        ),
    }
}

/// Decodes one line into a task
///
/// Whitespace around fields is ignored.
pub fn decode(line: &str) -> Result<Task, CodecError> {
    let mut head = line.splitn(3, SEPARATOR);
    let tag = head.next().map(str::trim).unwrap_or_default();
    let done = head.next().map(str::trim).ok_or(CodecError::MissingFields)?;
    let rest = head.next().ok_or(CodecError::MissingFields)?;

    let done = match done {
        "0" => false,
        "1" => true,
        other => return Err(CodecError::InvalidDoneFlag(other.to_string())),
    };

    let task = match tag {
        "T" => Task::todo(rest)?,
        "D" => {
            let (description, due) = rest.rsplit_once(SEPARATOR).ok_or(CodecError::MissingFields)?;
            Task::deadline(description, parse_datetime(due)?)?
        }
        "E" => {
            let mut fields = rest.rsplitn(3, SEPARATOR);
            let end = fields.next().ok_or(CodecError::MissingFields)?;
            let start = fields.next().ok_or(CodecError::MissingFields)?;
            let description = fields.next().ok_or(CodecError::MissingFields)?;
            Task::event(description, parse_datetime(start)?, parse_datetime(end)?)?
        }
        other => return Err(CodecError::UnknownType(other.to_string())),
    };

    Ok(task.with_done(done))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> crate::domain::Timestamp {
        NaiveDate::from_ymd_opt(2019, 12, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn encode_each_kind() {
        let todo = Task::todo("read book").unwrap();
        assert_eq!(encode(&todo), "T|0|read book");

        let deadline = Task::deadline("return book", at(2, 18, 0)).unwrap().with_done(true);
        assert_eq!(encode(&deadline), "D|1|return book|2/12/2019 1800");

        let event = Task::event("meeting", at(2, 14, 0), at(2, 16, 30)).unwrap();
        assert_eq!(encode(&event), "E|0|meeting|2/12/2019 1400|2/12/2019 1630");
    }

    #[test]
    fn decode_each_kind() {
        let todo = decode("T|1|read book").unwrap();
        assert_eq!(todo, Task::todo("read book").unwrap().with_done(true));

        let deadline = decode("D|0|return book|2/12/2019 1800").unwrap();
        assert_eq!(deadline, Task::deadline("return book", at(2, 18, 0)).unwrap());

        let event = decode("E|0|meeting|2/12/2019 1400|3/12/2019 0900").unwrap();
        assert_eq!(event, Task::event("meeting", at(2, 14, 0), at(3, 9, 0)).unwrap());
    }

    #[test]
    fn decode_tolerates_padded_fields() {
        let task = decode("T | 1 | read book ").unwrap();
        assert_eq!(task.description(), "read book");
        assert!(task.is_done());

        let task = decode("D | 0 | return book | 2/12/2019 1800").unwrap();
        assert_eq!(task.kind(), &TaskKind::Deadline { due: at(2, 18, 0) });
    }

    #[test]
    fn description_with_pipes_survives() {
        let event = Task::event("a|b|c", at(2, 14, 0), at(2, 15, 0)).unwrap();
        assert_eq!(decode(&encode(&event)).unwrap(), event);

        let todo = Task::todo("x | y").unwrap();
        assert_eq!(decode(&encode(&todo)).unwrap(), todo);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(decode("T|0"), Err(CodecError::MissingFields));
        assert_eq!(decode("garbage"), Err(CodecError::MissingFields));
        assert_eq!(decode("D|0|no date"), Err(CodecError::MissingFields));
        assert_eq!(decode("E|0|x|2/12/2019 1400"), Err(CodecError::MissingFields));
        assert_eq!(decode("X|0|what"), Err(CodecError::UnknownType("X".into())));
        assert_eq!(decode("T|yes|what"), Err(CodecError::InvalidDoneFlag("yes".into())));
        assert!(matches!(
            decode("D|0|return book|someday"),
            Err(CodecError::InvalidTimestamp(_))
        ));
        assert!(matches!(decode("T|0|   "), Err(CodecError::InvalidTask(_))));
    }

    #[test]
    fn rejects_event_ending_before_start() {
        assert_eq!(
            decode("E|0|x|3/12/2019 1400|2/12/2019 1400"),
            Err(CodecError::InvalidTask(TaskError::EndBeforeStart))
        );
    }
}
