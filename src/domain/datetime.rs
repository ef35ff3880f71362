//! Tolerant date/time parsing
//!
//! Accepts day-month-year input with `/`, `-` or spaces as separators and an
//! optional `HHmm` (or `HH:mm`) time of day, e.g.:
//!
//! - `2/12/2019 1800`
//! - `02-12-2019 18:00`
//! - `2 12 2019` (midnight)
//!
//! Month-day-year ordering is never attempted.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// A combined calendar date and minute-precision time of day
pub type Timestamp = NaiveDateTime;

/// Format used in the task file (`2/12/2019 1800`)
pub const STORAGE_FORMAT: &str = "%-d/%-m/%Y %H%M";

/// Format used when rendering tasks to the user (`02 Dec 2019, 6:00PM`)
pub const DISPLAY_FORMAT: &str = "%d %b %Y, %-I:%M%p";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("Error: Invalid format. Dates must look like d/M/yyyy [HHmm], e.g. 2/12/2019 1800 (got '{0}')")]
    InvalidDateFormat(String),

    #[error("Error: Invalid time format. Times must look like HHmm or HH:mm, e.g. 1800 (got '{0}')")]
    InvalidTimeFormat(String),
}

/// Parses loosely formatted date/time text into a timestamp
///
/// Time defaults to 00:00 when only a date is given.
pub fn parse_datetime(input: &str) -> Result<Timestamp, DateTimeError> {
    let normalized = input.replace(['-', '/'], " ");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let invalid_date = || DateTimeError::InvalidDateFormat(input.trim().to_string());

    let (date_tokens, time_token) = match tokens.as_slice() {
        [d, m, y] => ([*d, *m, *y], None),
        [d, m, y, t] => ([*d, *m, *y], Some(*t)),
        _ => return Err(invalid_date()),
    };

    let date = parse_date(date_tokens).ok_or_else(invalid_date)?;

    let time = match time_token {
        Some(token) => parse_time(token)
            .ok_or_else(|| DateTimeError::InvalidTimeFormat(token.to_string()))?,
        None => NaiveTime::MIN,
    };

    Ok(NaiveDateTime::new(date, time))
}

fn parse_date([day, month, year]: [&str; 3]) -> Option<NaiveDate> {
    let day = parse_digits(day, 1..=2)?;
    let month = parse_digits(month, 1..=2)?;
    let year = parse_digits(year, 4..=4)?;

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    let digits: String = token.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour = parse_digits(&digits[..2], 2..=2)?;
    let minute = parse_digits(&digits[2..], 2..=2)?;

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parses an all-ASCII-digit token whose length falls in `len`
fn parse_digits(token: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&token.len()) || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Renders a timestamp in the task file format
pub fn format_storage(ts: &Timestamp) -> String {
    ts.format(STORAGE_FORMAT).to_string()
}

/// Renders a timestamp for display
pub fn format_display(ts: &Timestamp) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}
