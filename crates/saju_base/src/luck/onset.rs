//! Direction and onset age of the luck sequence.

use saju_time::CivilDateTime;

use crate::sexagenary::Stem;
use crate::solar_term::{TermDirection, days_between};

use super::types::{CycleDirection, Gender};

/// Forward when a male chart has a yang year stem or a female chart a yin
/// one; backward otherwise.
pub const fn cycle_direction(gender: Gender, year_stem: Stem) -> CycleDirection {
    let male = matches!(gender, Gender::Male);
    if male == year_stem.is_yang() {
        CycleDirection::Forward
    } else {
        CycleDirection::Backward
    }
}

/// Signed whole days from birth to the nearest section in the cycle
/// direction: the next section going forward, the section in force going
/// backward.
pub fn onset_days(birth: &CivilDateTime, direction: CycleDirection) -> i64 {
    match direction {
        CycleDirection::Forward => days_between(birth, TermDirection::Forward),
        CycleDirection::Backward => days_between(birth, TermDirection::AtOrBefore),
    }
}

/// Onset age from a day count.
///
/// Each `days_per_year` days is one year; a remainder of two or more rounds
/// up. An age of 0 becomes 1.
pub fn onset_age(days: i64, days_per_year: i64) -> u32 {
    let days = days.unsigned_abs();
    let per_year = days_per_year.max(1).unsigned_abs();
    let mut age = days / per_year;
    if days % per_year >= 2 {
        age += 1;
    }
    age.max(1) as u32
}
