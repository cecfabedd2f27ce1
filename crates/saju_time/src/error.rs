//! Error types for civil date/time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date construction or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The Gregorian date does not exist (e.g. February 30).
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23 or minute outside 0..=59.
    InvalidTime { hour: u32, minute: u32 },
    /// Text could not be parsed as a date or date-time.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time of day: {hour:02}:{minute:02}")
            }
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_date() {
        let e = TimeError::InvalidDate {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(e.to_string(), "invalid calendar date: 2023-02-30");
    }

    #[test]
    fn display_invalid_time() {
        let e = TimeError::InvalidTime {
            hour: 24,
            minute: 5,
        };
        assert_eq!(e.to_string(), "invalid time of day: 24:05");
    }
}
