//! Error types for pillar, lunar-calendar and luck-cycle calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::TimeError;

use crate::sexagenary::{Branch, Stem};

/// Errors from the base calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BaseError {
    /// Stem and branch parities differ; the pair is not in the 60-cycle.
    InvalidPair { stem: Stem, branch: Branch },
    /// A lunar date that does not exist in the lunar year table.
    InvalidCalendarDate {
        year: i32,
        month: u32,
        day: u32,
        is_leap: bool,
        reason: &'static str,
    },
    /// Error from civil date/time handling.
    Time(TimeError),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPair { stem, branch } => write!(
                f,
                "invalid stem/branch pair: {}{} is not in the sexagenary cycle",
                stem.hanja(),
                branch.hanja()
            ),
            Self::InvalidCalendarDate {
                year,
                month,
                day,
                is_leap,
                reason,
            } => {
                let leap = if *is_leap { " (leap)" } else { "" };
                write!(
                    f,
                    "invalid lunar date {year}-{month:02}{leap}-{day:02}: {reason}"
                )
            }
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for BaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for BaseError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
