//! Lunar ↔ solar date conversion over the embedded lunar year table.
//!
//! Each lunar year is a run of 12 or 13 months of 29 or 30 days starting at
//! a known solar date. A leap month follows the regular month with the same
//! number. Conversion accumulates month lengths from the year start in
//! either direction.
//!
//! Outside the table the converters return the input components unchanged,
//! tagged [`Lookup::OutOfRange`].

use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use saju_time::CivilDate;
use tracing::warn;

use crate::error::BaseError;
use crate::lookup::Lookup;
pub use crate::lunar_data::{LUNAR_TABLE_FIRST_YEAR, LUNAR_TABLE_LAST_YEAR};
use crate::lunar_data::{
    LEAP_MONTH_MASK, LONG_LEAP_MONTH_BIT, LUNAR_EPOCH, LUNAR_YEAR_INFO, long_month_bit,
};

/// Lunar years covered by the table.
pub const LUNAR_TABLE_RANGE: RangeInclusive<i32> = LUNAR_TABLE_FIRST_YEAR..=LUNAR_TABLE_LAST_YEAR;

/// One month of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// 1..=12; a leap month repeats the number of the month it follows.
    pub number: u32,
    pub is_leap: bool,
    /// 29 or 30.
    pub days: u32,
}

/// One decoded lunar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarYearEntry {
    pub year: i32,
    /// Solar date of the first day of month 1.
    pub start: CivilDate,
    /// Months in order, 12 or 13 of them.
    pub months: Vec<LunarMonth>,
    /// Number of the leap month, if the year has one.
    pub leap_month: Option<u32>,
}

impl LunarYearEntry {
    /// Total days in the year.
    pub fn days(&self) -> u32 {
        self.months.iter().map(|m| m.days).sum()
    }

    /// Solar date of the first day of the next lunar year.
    pub fn end(&self) -> CivilDate {
        self.start.add_days(i64::from(self.days()))
    }

    /// Days from the year start to the first day of the given month.
    fn offset_of(&self, month: u32, is_leap: bool) -> Option<(u32, &LunarMonth)> {
        let mut offset = 0;
        for m in &self.months {
            if m.number == month && m.is_leap == is_leap {
                return Some((offset, m));
            }
            offset += m.days;
        }
        None
    }
}

/// A lunar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap: bool,
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_leap {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

fn decode(year: i32, info: u32, start: CivilDate) -> LunarYearEntry {
    let leap = info & LEAP_MONTH_MASK;
    let leap_month = (leap != 0).then_some(leap);
    let mut months = Vec::with_capacity(13);
    for number in 1..=12 {
        let days = if info & long_month_bit(number) != 0 { 30 } else { 29 };
        months.push(LunarMonth {
            number,
            is_leap: false,
            days,
        });
        if leap_month == Some(number) {
            let days = if info & LONG_LEAP_MONTH_BIT != 0 { 30 } else { 29 };
            months.push(LunarMonth {
                number,
                is_leap: true,
                days,
            });
        }
    }
    LunarYearEntry {
        year,
        start,
        months,
        leap_month,
    }
}

static LUNAR_TABLE: LazyLock<Vec<LunarYearEntry>> = LazyLock::new(|| {
    let mut start = LUNAR_EPOCH;
    let mut table = Vec::with_capacity(LUNAR_YEAR_INFO.len());
    for (year, &info) in LUNAR_TABLE_RANGE.zip(LUNAR_YEAR_INFO.iter()) {
        let entry = decode(year, info, start);
        start = entry.end();
        table.push(entry);
    }
    table
});

/// Decoded entry for a lunar year, `None` outside the table.
pub fn lunar_year(year: i32) -> Option<&'static LunarYearEntry> {
    if !LUNAR_TABLE_RANGE.contains(&year) {
        return None;
    }
    LUNAR_TABLE.get((year - LUNAR_TABLE_FIRST_YEAR) as usize)
}

fn invalid(year: i32, month: u32, day: u32, is_leap: bool, reason: &'static str) -> BaseError {
    BaseError::InvalidCalendarDate {
        year,
        month,
        day,
        is_leap,
        reason,
    }
}

/// Solar date of a lunar date.
///
/// Dates that do not exist in the table (day 30 of a short month, a leap
/// flag on a month that is not the leap month) fail with
/// [`BaseError::InvalidCalendarDate`]. Years outside the table map to the
/// same components read as a solar date, tagged `OutOfRange`.
pub fn lunar_to_solar(
    year: i32,
    month: u32,
    day: u32,
    is_leap: bool,
) -> Result<Lookup<CivilDate>, BaseError> {
    if !(1..=12).contains(&month) {
        return Err(invalid(year, month, day, is_leap, "month must be 1..=12"));
    }
    if !(1..=30).contains(&day) {
        return Err(invalid(year, month, day, is_leap, "day must be 1..=30"));
    }

    let Some(entry) = lunar_year(year) else {
        warn!(year, "lunar year outside table, using solar components as is");
        let approx = CivilDate::new(year, month, day).map_err(|_| {
            invalid(
                year,
                month,
                day,
                is_leap,
                "outside the lunar table and not a valid solar date",
            )
        })?;
        return Ok(Lookup::OutOfRange(approx));
    };

    let (offset, m) = entry
        .offset_of(month, is_leap)
        .ok_or_else(|| invalid(year, month, day, is_leap, "year has no such leap month"))?;
    if day > m.days {
        return Err(invalid(year, month, day, is_leap, "day exceeds month length"));
    }
    Ok(Lookup::Found(
        entry.start.add_days(i64::from(offset + day - 1)),
    ))
}

fn as_lunar(date: CivilDate) -> LunarDate {
    LunarDate {
        year: date.year,
        month: date.month,
        day: date.day,
        is_leap: false,
    }
}

/// Lunar date of a solar date.
///
/// Dates before lunar 1900-01-01 or after the last day of lunar 2049 come
/// back as the solar components, non-leap, tagged `OutOfRange`.
pub fn solar_to_lunar(date: CivilDate) -> Lookup<LunarDate> {
    let entry = if date < LUNAR_EPOCH {
        None
    } else {
        // Start dates only ever fall in January or February, so the lunar
        // year is the solar year or the one before.
        [date.year, date.year - 1]
            .into_iter()
            .filter_map(lunar_year)
            .find(|e| e.start <= date && date < e.end())
    };

    let Some(entry) = entry else {
        warn!(%date, "solar date outside lunar table, using solar components as is");
        return Lookup::OutOfRange(as_lunar(date));
    };

    let mut remaining = date.days_since(entry.start);
    for m in &entry.months {
        let len = i64::from(m.days);
        if remaining < len {
            return Lookup::Found(LunarDate {
                year: entry.year,
                month: m.number,
                day: remaining as u32 + 1,
                is_leap: m.is_leap,
            });
        }
        remaining -= len;
    }
    // `entry` contains `date`, so the walk above always returns.
    Lookup::OutOfRange(as_lunar(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn table_is_contiguous() {
        for pair in LUNAR_TABLE.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
        }
        assert_eq!(LUNAR_TABLE.len(), 150);
    }

    #[test]
    fn year_lengths_are_plausible() {
        for e in LUNAR_TABLE.iter() {
            let expected_months = if e.leap_month.is_some() { 13 } else { 12 };
            assert_eq!(e.months.len(), expected_months, "{}", e.year);
            assert!((353..=385).contains(&e.days()), "{}: {}", e.year, e.days());
        }
    }

    #[test]
    fn leap_month_follows_its_number() {
        let e = lunar_year(2017).unwrap();
        assert_eq!(e.leap_month, Some(5));
        assert_eq!(e.months[4].number, 5);
        assert!(!e.months[4].is_leap);
        assert_eq!(e.months[5].number, 5);
        assert!(e.months[5].is_leap);
        assert_eq!(e.months[5].days, 29);
        assert_eq!(e.months[6].number, 6);
        assert!(!e.months[6].is_leap);
    }

    #[test]
    fn lunar_year_bounds() {
        assert!(lunar_year(1899).is_none());
        assert!(lunar_year(1900).is_some());
        assert!(lunar_year(2049).is_some());
        assert!(lunar_year(2050).is_none());
    }

    #[test]
    fn new_year_2024() {
        assert_eq!(
            lunar_to_solar(2024, 1, 1, false).unwrap(),
            Lookup::Found(date(2024, 2, 10))
        );
    }

    #[test]
    fn rejects_missing_leap_month() {
        let err = lunar_to_solar(2024, 3, 1, true).unwrap_err();
        assert!(matches!(err, BaseError::InvalidCalendarDate { .. }));
    }

    #[test]
    fn rejects_day_30_of_short_month() {
        // 2017 month 1 has 29 days.
        assert!(lunar_to_solar(2017, 1, 30, false).is_err());
        assert!(lunar_to_solar(2017, 1, 29, false).is_ok());
        assert!(lunar_to_solar(2017, 0, 1, false).is_err());
        assert!(lunar_to_solar(2017, 13, 1, false).is_err());
        assert!(lunar_to_solar(2017, 1, 0, false).is_err());
    }

    #[test]
    fn out_of_range_is_identity() {
        assert_eq!(
            lunar_to_solar(1850, 3, 15, false).unwrap(),
            Lookup::OutOfRange(date(1850, 3, 15))
        );
        assert!(lunar_to_solar(2100, 2, 30, false).is_err());
        let l = solar_to_lunar(date(1900, 1, 30));
        assert!(!l.is_found());
        assert_eq!(l.value().day, 30);
    }

    #[test]
    fn solar_to_lunar_edges() {
        assert_eq!(
            solar_to_lunar(date(1900, 1, 31)),
            Lookup::Found(LunarDate {
                year: 1900,
                month: 1,
                day: 1,
                is_leap: false
            })
        );
        assert!(solar_to_lunar(date(2050, 1, 22)).is_found());
        assert!(!solar_to_lunar(date(2050, 1, 23)).is_found());
    }

    #[test]
    fn display() {
        let d = LunarDate {
            year: 2017,
            month: 5,
            day: 1,
            is_leap: true,
        };
        assert_eq!(d.to_string(), "2017-05-01 (leap)");
    }
}
