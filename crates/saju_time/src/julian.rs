//! Julian day number (JDN) ↔ proleptic Gregorian calendar conversions.
//!
//! Integer-only Fliegel–Van Flandern forms. Valid for every JDN >= 0
//! (4714 BC onwards), far wider than anything the pillar engine needs.

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Julian day number of 2000-01-01.
pub const J2000_JDN: i64 = 2_451_545;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian day number of a Gregorian calendar date.
///
/// No validation; callers go through [`crate::CivilDate::new`].
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Gregorian `(year, month, day)` of a Julian day number.
pub fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year as i32, month as u32, day as u32)
}
