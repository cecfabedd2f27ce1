//! Civil calendar arithmetic and true-solar-time correction.
//!
//! This crate provides:
//! - Gregorian ↔ Julian day number conversions
//! - `CivilDate` / `CivilDateTime` with minute-level stepping
//! - Historical correction intervals (daylight saving, legal standard time)
//! - The true-solar-time corrector applied before any pillar is resolved
//!
//! Everything here is pure arithmetic over a proleptic Gregorian calendar
//! at minute resolution. Seconds and leap seconds are not modelled.

pub mod civil;
pub mod correction;
pub mod error;
pub mod intervals;
pub mod julian;

pub use civil::{CivilDate, CivilDateTime};
pub use correction::{
    CorrectionConfig, CorrectionReport, KST_REFERENCE_MERIDIAN_DEG, SEOUL_MERIDIAN_DEG, correct,
    correct_with,
};
pub use error::TimeError;
pub use intervals::{
    CorrectionInterval, CorrectionKind, DAYLIGHT_SAVING_INTERVALS, LEGAL_TIME_EPOCHS,
    find_interval,
};
pub use julian::{
    J2000_JDN, MINUTES_PER_DAY, days_in_month, gregorian_to_jdn, is_leap_year, jdn_to_gregorian,
};
