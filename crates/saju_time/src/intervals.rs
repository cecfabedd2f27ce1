//! Historical wall-clock correction intervals for the Korean standard clock.
//!
//! Two tables, both looked up by containment and never computed:
//! - daylight-saving periods, each carrying its own offset;
//! - legal standard time epochs that ran on a meridian other than 135°E.
//!
//! Interval bounds are local wall-clock instants, half-open `[start, end)`.
//! Transition times follow the IANA `Asia/Seoul` history.

use crate::civil::{CivilDate, CivilDateTime};

/// What a correction interval represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionKind {
    /// Clocks advanced for summer time.
    DaylightSaving,
    /// Legal standard time referenced to a different meridian.
    LegalStandardTime,
}

/// A validity range plus the fixed minute offset in force during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionInterval {
    /// Inclusive start (local wall clock).
    pub start: CivilDateTime,
    /// Exclusive end (local wall clock).
    pub end: CivilDateTime,
    /// Minutes the wall clock ran ahead of the 135°E standard during the
    /// interval (negative when it ran behind).
    pub offset_minutes: i64,
    pub kind: CorrectionKind,
}

impl CorrectionInterval {
    /// Whether `t` falls inside `[start, end)`.
    pub fn contains(&self, t: &CivilDateTime) -> bool {
        self.start <= *t && *t < self.end
    }
}

/// First interval in `table` containing `t`, if any.
pub fn find_interval<'a>(
    table: &'a [CorrectionInterval],
    t: &CivilDateTime,
) -> Option<&'a CorrectionInterval> {
    table.iter().find(|iv| iv.contains(t))
}

const fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> CivilDateTime {
    CivilDateTime {
        date: CivilDate { year, month, day },
        hour,
        minute,
    }
}

const fn dst(start: CivilDateTime, end: CivilDateTime) -> CorrectionInterval {
    CorrectionInterval {
        start,
        end,
        offset_minutes: 60,
        kind: CorrectionKind::DaylightSaving,
    }
}

/// Korean daylight-saving periods.
pub const DAYLIGHT_SAVING_INTERVALS: [CorrectionInterval; 12] = [
    dst(at(1948, 6, 1, 0, 0), at(1948, 9, 13, 0, 0)),
    dst(at(1949, 4, 3, 0, 0), at(1949, 9, 11, 0, 0)),
    dst(at(1950, 4, 1, 0, 0), at(1950, 9, 10, 0, 0)),
    dst(at(1951, 5, 6, 0, 0), at(1951, 9, 9, 0, 0)),
    dst(at(1955, 5, 5, 0, 0), at(1955, 9, 9, 0, 0)),
    dst(at(1956, 5, 20, 0, 0), at(1956, 9, 30, 0, 0)),
    dst(at(1957, 5, 5, 0, 0), at(1957, 9, 22, 0, 0)),
    dst(at(1958, 5, 4, 0, 0), at(1958, 9, 21, 0, 0)),
    dst(at(1959, 5, 3, 0, 0), at(1959, 9, 20, 0, 0)),
    dst(at(1960, 5, 1, 0, 0), at(1960, 9, 18, 0, 0)),
    dst(at(1987, 5, 10, 2, 0), at(1987, 10, 11, 3, 0)),
    dst(at(1988, 5, 8, 2, 0), at(1988, 10, 9, 3, 0)),
];

/// Epochs when the legal clock was referenced to 127.5°E (UTC+8:30).
pub const LEGAL_TIME_EPOCHS: [CorrectionInterval; 1] = [CorrectionInterval {
    start: at(1954, 3, 21, 0, 0),
    end: at(1961, 8, 10, 0, 0),
    offset_minutes: -30,
    kind: CorrectionKind::LegalStandardTime,
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_well_formed() {
        for iv in DAYLIGHT_SAVING_INTERVALS.iter().chain(LEGAL_TIME_EPOCHS.iter()) {
            assert!(iv.start < iv.end, "{iv:?}");
        }
        for pair in DAYLIGHT_SAVING_INTERVALS.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn dst_offsets_are_one_hour() {
        for iv in &DAYLIGHT_SAVING_INTERVALS {
            assert_eq!(iv.offset_minutes, 60);
            assert_eq!(iv.kind, CorrectionKind::DaylightSaving);
        }
    }

    #[test]
    fn containment_is_half_open() {
        let iv = &DAYLIGHT_SAVING_INTERVALS[10];
        assert!(iv.contains(&at(1987, 5, 10, 2, 0)));
        assert!(iv.contains(&at(1987, 10, 11, 2, 59)));
        assert!(!iv.contains(&at(1987, 10, 11, 3, 0)));
        assert!(!iv.contains(&at(1987, 5, 10, 1, 59)));
    }

    #[test]
    fn find_interval_1988() {
        let t = at(1988, 7, 1, 12, 0);
        let iv = find_interval(&DAYLIGHT_SAVING_INTERVALS, &t).unwrap();
        assert_eq!(iv.start, at(1988, 5, 8, 2, 0));
    }

    #[test]
    fn find_interval_none_outside_tables() {
        let t = at(2024, 7, 1, 12, 0);
        assert!(find_interval(&DAYLIGHT_SAVING_INTERVALS, &t).is_none());
        assert!(find_interval(&LEGAL_TIME_EPOCHS, &t).is_none());
    }

    #[test]
    fn legal_epoch_covers_1957() {
        let t = at(1957, 1, 15, 9, 0);
        let iv = find_interval(&LEGAL_TIME_EPOCHS, &t).unwrap();
        assert_eq!(iv.kind, CorrectionKind::LegalStandardTime);
    }
}
