//! Civil (wall-clock) date and date-time at minute resolution.
//!
//! `CivilDateTime` is the instant type used throughout the engine: the raw
//! birth input, the corrected true-solar instant, and solar-term boundaries
//! are all expressed in it. Ordering is chronological.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{MINUTES_PER_DAY, days_in_month, gregorian_to_jdn, jdn_to_gregorian};

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Date of a Julian day number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_gregorian(jdn);
        Self { year, month, day }
    }

    /// Julian day number of this date.
    pub fn jdn(&self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(&self, earlier: CivilDate) -> i64 {
        self.jdn() - earlier.jdn()
    }

    /// The date `days` days later (earlier when negative).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }

    /// This date at the given wall-clock time.
    pub fn at(self, hour: u32, minute: u32) -> Result<CivilDateTime, TimeError> {
        CivilDateTime::from_date(self, hour, minute)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parse_field(parts[0])?;
        let month: u32 = parse_field(parts[1])?;
        let day: u32 = parse_field(parts[2])?;
        Self::new(year, month, day)
    }
}

/// Wall-clock date and time, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub hour: u32,
    pub minute: u32,
}

impl CivilDateTime {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        Self::from_date(CivilDate::new(year, month, day)?, hour, minute)
    }

    /// Attach a time of day to an already validated date.
    pub fn from_date(date: CivilDate, hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        Ok(Self { date, hour, minute })
    }

    /// Minutes elapsed since local midnight (0..1440).
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Minutes since JDN 0 midnight. Monotonic in chronological order.
    pub fn total_minutes(&self) -> i64 {
        self.date.jdn() * MINUTES_PER_DAY + self.minute_of_day() as i64
    }

    /// Inverse of [`total_minutes`](Self::total_minutes).
    pub fn from_total_minutes(total: i64) -> Self {
        let jdn = total.div_euclid(MINUTES_PER_DAY);
        let minute_of_day = total.rem_euclid(MINUTES_PER_DAY) as u32;
        Self {
            date: CivilDate::from_jdn(jdn),
            hour: minute_of_day / 60,
            minute: minute_of_day % 60,
        }
    }

    /// Shift by a signed number of minutes, rolling the date as needed.
    pub fn add_minutes(self, delta: i64) -> Self {
        Self::from_total_minutes(self.total_minutes() + delta)
    }

    /// Signed minutes from `earlier` to `self`.
    pub fn minutes_since(&self, earlier: &CivilDateTime) -> i64 {
        self.total_minutes() - earlier.total_minutes()
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{:02}:{:02}", self.date, self.hour, self.minute)
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm` (a space may replace the `T`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DDThh:mm, got {s}")))?;
        let date: CivilDate = date_part.parse()?;
        let time: Vec<&str> = time_part.split(':').collect();
        if time.len() != 2 {
            return Err(TimeError::Parse(format!("expected hh:mm, got {time_part}")));
        }
        let hour: u32 = parse_field(time[0])?;
        let minute: u32 = parse_field(time[1])?;
        Self::from_date(date, hour, minute)
    }
}

fn parse_field<T: FromStr>(s: &str) -> Result<T, TimeError>
where
    T::Err: Display,
{
    s.parse().map_err(|e| TimeError::Parse(format!("{s:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 4, 31).is_err());
        assert!(CivilDate::new(2024, 0, 1).is_err());
        assert!(CivilDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn rejects_impossible_times() {
        assert_eq!(
            CivilDateTime::new(2024, 1, 1, 24, 0),
            Err(TimeError::InvalidTime {
                hour: 24,
                minute: 0
            })
        );
        assert!(CivilDateTime::new(2024, 1, 1, 23, 60).is_err());
    }

    #[test]
    fn add_minutes_rolls_back_across_year() {
        let t = CivilDateTime::new(2000, 1, 1, 0, 10).unwrap();
        let back = t.add_minutes(-32);
        assert_eq!(back, CivilDateTime::new(1999, 12, 31, 23, 38).unwrap());
    }

    #[test]
    fn add_minutes_rolls_forward_over_leap_day() {
        let t = CivilDateTime::new(2024, 2, 28, 23, 50).unwrap();
        assert_eq!(
            t.add_minutes(24 * 60),
            CivilDateTime::new(2024, 2, 29, 23, 50).unwrap()
        );
        assert_eq!(
            t.add_minutes(20),
            CivilDateTime::new(2024, 2, 29, 0, 10).unwrap()
        );
    }

    #[test]
    fn total_minutes_roundtrip() {
        let t = CivilDateTime::new(1987, 5, 10, 2, 0).unwrap();
        assert_eq!(CivilDateTime::from_total_minutes(t.total_minutes()), t);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CivilDateTime::new(1999, 12, 31, 23, 59).unwrap();
        let b = CivilDateTime::new(2000, 1, 1, 0, 0).unwrap();
        assert!(a < b);
        assert_eq!(b.minutes_since(&a), 1);
    }

    #[test]
    fn days_since() {
        let a = CivilDate::new(2000, 1, 1).unwrap();
        let b = CivilDate::new(2000, 3, 1).unwrap();
        assert_eq!(b.days_since(a), 60);
        assert_eq!(a.add_days(60), b);
    }

    #[test]
    fn parse_date() {
        let d: CivilDate = "1990-02-04".parse().unwrap();
        assert_eq!(d, CivilDate::new(1990, 2, 4).unwrap());
        assert!("1990-02".parse::<CivilDate>().is_err());
        assert!("1990-02-30".parse::<CivilDate>().is_err());
    }

    #[test]
    fn parse_datetime() {
        let t: CivilDateTime = "1990-02-04T00:10".parse().unwrap();
        assert_eq!(t, CivilDateTime::new(1990, 2, 4, 0, 10).unwrap());
        let t: CivilDateTime = "1990-02-04 23:05".parse().unwrap();
        assert_eq!(t.minute_of_day(), 23 * 60 + 5);
        assert!("1990-02-04".parse::<CivilDateTime>().is_err());
    }

    #[test]
    fn display() {
        let t = CivilDateTime::new(2024, 3, 5, 7, 9).unwrap();
        assert_eq!(t.to_string(), "2024-03-05T07:09");
        assert_eq!(t.date.to_string(), "2024-03-05");
    }
}
