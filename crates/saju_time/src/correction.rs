//! True-solar-time correction of a wall-clock birth instant.
//!
//! Three steps, always in this order, each feeding the next:
//! 1. remove daylight saving if the instant falls in a recorded interval;
//! 2. legal standard time epoch (127.5°E, 1954–1961): no numeric change;
//! 3. subtract the longitude offset between the 135°E reference meridian
//!    and the local meridian (4 minutes per degree).
//!
//! Instants outside every table simply skip steps 1 and 2.

use tracing::debug;

use crate::civil::CivilDateTime;
use crate::intervals::{DAYLIGHT_SAVING_INTERVALS, LEGAL_TIME_EPOCHS, find_interval};

/// Reference meridian of the Korean standard clock (UTC+9).
pub const KST_REFERENCE_MERIDIAN_DEG: f64 = 135.0;

/// Local meridian used for true solar time (central Korea).
pub const SEOUL_MERIDIAN_DEG: f64 = 127.0;

/// Minutes of clock time per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Configurable parameters for the corrector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionConfig {
    /// Meridian the wall clock is referenced to, degrees east. Default: 135.0.
    pub reference_meridian_deg: f64,
    /// Meridian of the birth place, degrees east. Default: 127.0.
    pub local_meridian_deg: f64,
    /// Remove recorded daylight-saving offsets. Default: true.
    pub apply_daylight_saving: bool,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            reference_meridian_deg: KST_REFERENCE_MERIDIAN_DEG,
            local_meridian_deg: SEOUL_MERIDIAN_DEG,
            apply_daylight_saving: true,
        }
    }
}

impl CorrectionConfig {
    /// Longitude offset in whole minutes (32 for the defaults).
    pub fn longitude_offset_minutes(&self) -> i64 {
        ((self.reference_meridian_deg - self.local_meridian_deg) * MINUTES_PER_DEGREE).round()
            as i64
    }
}

/// What the corrector did to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionReport {
    /// Wall-clock input.
    pub input: CivilDateTime,
    /// True solar time.
    pub corrected: CivilDateTime,
    /// Daylight-saving minutes removed, if the input was inside an interval.
    pub daylight_saving_minutes: Option<i64>,
    /// Input fell inside the 127.5°E legal time epoch (step 2 left it as is).
    pub in_legal_time_epoch: bool,
    /// Longitude minutes subtracted in step 3.
    pub longitude_minutes: i64,
}

/// Correct with the default configuration.
pub fn correct(datetime: CivilDateTime) -> CivilDateTime {
    correct_with(datetime, &CorrectionConfig::default()).corrected
}

/// Correct a wall-clock instant to true solar time.
pub fn correct_with(datetime: CivilDateTime, config: &CorrectionConfig) -> CorrectionReport {
    let mut t = datetime;

    let mut daylight_saving_minutes = None;
    if config.apply_daylight_saving {
        if let Some(iv) = find_interval(&DAYLIGHT_SAVING_INTERVALS, &t) {
            debug!(input = %datetime, offset = iv.offset_minutes, "removing daylight saving");
            t = t.add_minutes(-iv.offset_minutes);
            daylight_saving_minutes = Some(iv.offset_minutes);
        }
    }

    // The legal clock of this epoch ran on 127.5°E; no adjustment is applied
    // here and the longitude step below still assumes a 135°E clock.
    // Known gap: births in 1954-03-21..1961-08-10 may be 30 minutes off.
    let in_legal_time_epoch = find_interval(&LEGAL_TIME_EPOCHS, &t).is_some();
    if in_legal_time_epoch {
        debug!(input = %datetime, "inside 127.5°E legal time epoch, left unchanged");
    }

    let longitude_minutes = config.longitude_offset_minutes();
    t = t.add_minutes(-longitude_minutes);

    CorrectionReport {
        input: datetime,
        corrected: t,
        daylight_saving_minutes,
        in_legal_time_epoch,
        longitude_minutes,
    }
}
