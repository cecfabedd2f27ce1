//! Birth input accepted by [`compute_pillars`](crate::compute_pillars).

use saju_base::Gender;

/// Calendar the birth date is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarType {
    Solar,
    Lunar,
}

/// A birth as the user reports it: wall-clock time, either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthInput {
    pub calendar: CalendarType,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Only read for lunar dates.
    pub is_leap_month: bool,
    /// Wall-clock `(hour, minute)`, `None` when the time is unknown.
    pub time: Option<(u32, u32)>,
    /// Only read by the luck-cycle generator.
    pub gender: Gender,
}

impl BirthInput {
    /// Solar birth date with unknown time.
    pub fn solar(year: i32, month: u32, day: u32, gender: Gender) -> Self {
        Self {
            calendar: CalendarType::Solar,
            year,
            month,
            day,
            is_leap_month: false,
            time: None,
            gender,
        }
    }

    /// Lunar birth date with unknown time.
    pub fn lunar(year: i32, month: u32, day: u32, is_leap_month: bool, gender: Gender) -> Self {
        Self {
            calendar: CalendarType::Lunar,
            year,
            month,
            day,
            is_leap_month,
            time: None,
            gender,
        }
    }

    /// Same birth with a known wall-clock time.
    pub fn with_time(self, hour: u32, minute: u32) -> Self {
        Self {
            time: Some((hour, minute)),
            ..self
        }
    }
}
