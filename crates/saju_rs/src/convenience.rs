//! One-call helpers from a reported birth to pillars and luck cycles.

use saju_base::{
    DecadeCycle, DecadeCycleEntry, FourPillars, Gender, Lookup, LuckConfig, LunarDate,
    resolve_date_pillars, resolve_pillars,
};
use saju_time::{CivilDate, CivilDateTime, CorrectionConfig, CorrectionReport, correct_with};
use tracing::{debug, warn};

use crate::error::SajuError;
use crate::input::{BirthInput, CalendarType};

/// Result of a four-pillar computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarsReport {
    pub pillars: FourPillars,
    /// Solar birth date; `OutOfRange` when a lunar input fell outside the
    /// lunar table and was read as solar.
    pub solar_date: Lookup<CivilDate>,
    /// Corrector output, `None` when the birth time is unknown.
    pub correction: Option<CorrectionReport>,
    /// Instant the pillars and luck cycles are measured from: the corrected
    /// instant, or noon of the solar date when the time is unknown.
    pub reference_instant: CivilDateTime,
    pub gender: Gender,
}

impl PillarsReport {
    /// Whether every table lookup behind this report was exact.
    pub fn is_exact(&self) -> bool {
        self.solar_date.is_found()
    }

    /// Decade luck cycles with the default configuration.
    pub fn decade_cycle(&self) -> DecadeCycle {
        self.decade_cycle_with(&LuckConfig::default())
    }

    pub fn decade_cycle_with(&self, config: &LuckConfig) -> DecadeCycle {
        DecadeCycle::new(&self.pillars, &self.reference_instant, self.gender, config)
    }
}

/// Resolve the four pillars of a birth with the default corrector.
pub fn compute_pillars(input: &BirthInput) -> Result<PillarsReport, SajuError> {
    compute_pillars_with(input, &CorrectionConfig::default())
}

/// Resolve the four pillars of a birth.
///
/// Lunar dates are converted to solar first. With a known time the wall
/// clock is corrected to true solar time and all four pillars are resolved;
/// with an unknown time only year, month and day are, at noon of the solar
/// date.
pub fn compute_pillars_with(
    input: &BirthInput,
    config: &CorrectionConfig,
) -> Result<PillarsReport, SajuError> {
    let solar_date = match input.calendar {
        CalendarType::Solar => {
            Lookup::Found(CivilDate::new(input.year, input.month, input.day)?)
        }
        CalendarType::Lunar => {
            saju_base::lunar_to_solar(input.year, input.month, input.day, input.is_leap_month)?
        }
    };
    if !solar_date.is_found() {
        warn!(
            year = input.year,
            "lunar input outside table, pillars are approximate"
        );
    }
    let date = *solar_date.value();

    let (pillars, correction, reference_instant) = match input.time {
        Some((hour, minute)) => {
            let wall = date.at(hour, minute)?;
            let report = correct_with(wall, config);
            debug!(%wall, corrected = %report.corrected, "birth instant corrected");
            (
                resolve_pillars(&report.corrected),
                Some(report),
                report.corrected,
            )
        }
        None => {
            let noon = date.at(12, 0)?;
            (resolve_date_pillars(date), None, noon)
        }
    };

    Ok(PillarsReport {
        pillars,
        solar_date,
        correction,
        reference_instant,
        gender: input.gender,
    })
}

/// The first `count` decade luck cycles of a chart.
///
/// `birth` is the instant the pillars were resolved from.
pub fn generate_decade_cycle(
    pillars: &FourPillars,
    birth: &CivilDateTime,
    gender: Gender,
    count: usize,
) -> Vec<DecadeCycleEntry> {
    saju_base::luck::generate_n(pillars, birth, gender, count)
}

/// Solar date of a lunar date.
pub fn lunar_to_solar(
    year: i32,
    month: u32,
    day: u32,
    is_leap: bool,
) -> Result<Lookup<CivilDate>, SajuError> {
    Ok(saju_base::lunar_to_solar(year, month, day, is_leap)?)
}

/// Lunar date of a solar date.
pub fn solar_to_lunar(date: CivilDate) -> Lookup<LunarDate> {
    saju_base::solar_to_lunar(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_time_uses_noon() {
        let r = compute_pillars(&BirthInput::solar(2024, 6, 15, Gender::Male)).unwrap();
        assert!(r.correction.is_none());
        assert!(r.pillars.hour.is_none());
        assert_eq!(r.reference_instant.to_string(), "2024-06-15T12:00");
    }

    #[test]
    fn known_time_is_corrected() {
        let input = BirthInput::solar(2024, 6, 15, Gender::Male).with_time(12, 0);
        let r = compute_pillars(&input).unwrap();
        let c = r.correction.unwrap();
        assert_eq!(c.corrected.to_string(), "2024-06-15T11:28");
        assert_eq!(r.reference_instant, c.corrected);
        assert!(r.pillars.hour.is_some());
        assert!(r.is_exact());
    }

    #[test]
    fn invalid_solar_date() {
        let err = compute_pillars(&BirthInput::solar(2023, 2, 29, Gender::Male)).unwrap_err();
        assert!(matches!(err, SajuError::Time(_)));
    }

    #[test]
    fn invalid_time() {
        let input = BirthInput::solar(2023, 2, 28, Gender::Male).with_time(24, 0);
        assert!(matches!(compute_pillars(&input), Err(SajuError::Time(_))));
    }
}
