//! Caller-facing error type.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::BaseError;
use saju_time::TimeError;

/// Errors returned by the convenience API.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SajuError {
    /// Invalid solar date or time of day.
    Time(TimeError),
    /// Invalid lunar date or stem/branch pair.
    Base(BaseError),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Base(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SajuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Base(e) => Some(e),
        }
    }
}

impl From<TimeError> for SajuError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<BaseError> for SajuError {
    fn from(e: BaseError) -> Self {
        match e {
            BaseError::Time(t) => Self::Time(t),
            other => Self::Base(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_time_errors_are_flattened() {
        let inner = TimeError::InvalidTime {
            hour: 25,
            minute: 0,
        };
        let e: SajuError = BaseError::Time(inner.clone()).into();
        assert_eq!(e, SajuError::Time(inner));
    }

    #[test]
    fn display_passes_through() {
        let e: SajuError = TimeError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        }
        .into();
        assert_eq!(e.to_string(), "invalid calendar date: 2023-02-29");
    }
}
