//! Year, month, day and hour pillar resolution.
//!
//! All resolvers take an already corrected (true solar time) instant. Each
//! is a pure function; the only data dependencies are the year stem feeding
//! the month pillar and the day stem feeding the hour pillar.

use saju_time::{CivilDate, CivilDateTime};
use tracing::debug;

use crate::pillar::{FourPillars, Pillar, PillarRole};
use crate::sexagenary::{Branch, SexagenaryIndex, Stem};
use crate::solar_term::{SolarTerm, boundary, section_at_or_before};

/// Sexagenary year whose index is 0 (甲子).
pub const YEAR_ANCHOR: i32 = 1984;

/// Reference date for the day cycle.
pub const DAY_ANCHOR_DATE: CivilDate = CivilDate {
    year: 2000,
    month: 1,
    day: 1,
};

/// Cycle index of [`DAY_ANCHOR_DATE`] (戊午).
pub const DAY_ANCHOR_INDEX: u8 = 54;

/// Minute-of-day where the late Zi hour begins (23:00).
pub const LATE_ZI_START: u32 = 23 * 60;

/// Minute-of-day where the early Zi hour ends (01:00).
pub const EARLY_ZI_END: u32 = 60;

// ── Year ──

/// Sexagenary year of an instant: the calendar year, or the one before if
/// the instant precedes that year's Start of Spring.
pub fn sexagenary_year(instant: &CivilDateTime) -> i32 {
    let year = instant.date.year;
    let li_chun = boundary(year, SolarTerm::StartOfSpring);
    if *instant < li_chun.instant {
        year - 1
    } else {
        year
    }
}

/// Cycle index of a sexagenary year.
pub fn year_index(sexagenary_year: i32) -> SexagenaryIndex {
    SexagenaryIndex::wrapping(i64::from(sexagenary_year - YEAR_ANCHOR))
}

pub fn resolve_year(instant: &CivilDateTime) -> Pillar {
    Pillar::new(PillarRole::Year, year_index(sexagenary_year(instant)))
}

// ── Month ──

/// Sexagenary month (0 = 寅 month) containing the instant.
pub fn month_index(instant: &CivilDateTime) -> u8 {
    section_at_or_before(instant).term.month_index()
}

/// Stem of month 0 for a given year stem (甲己→丙, 乙庚→戊, 丙辛→庚,
/// 丁壬→壬, 戊癸→甲).
pub const fn first_month_stem(year_stem: Stem) -> Stem {
    Stem::from_index((year_stem.index() % 5) * 2 + 2)
}

/// Month pillar from the month index and year stem.
///
/// Month 0 is always a 寅 pillar; the year stem's pair picks which of the
/// five 寅 pillars starts the run, 12 cycle steps apart.
pub fn month_pillar(month_index: u8, year_stem: Stem) -> Pillar {
    let first = i64::from(year_stem.index() % 5) * 12 + i64::from(Branch::Yin.index());
    Pillar::new(
        PillarRole::Month,
        SexagenaryIndex::wrapping(first + i64::from(month_index % 12)),
    )
}

pub fn resolve_month(instant: &CivilDateTime, year_stem: Stem) -> Pillar {
    month_pillar(month_index(instant), year_stem)
}

// ── Day ──

/// Day pillar, counted from the fixed anchor date.
pub fn resolve_day(date: CivilDate) -> Pillar {
    let days = date.days_since(DAY_ANCHOR_DATE);
    Pillar::new(
        PillarRole::Day,
        SexagenaryIndex::wrapping(days + i64::from(DAY_ANCHOR_INDEX)),
    )
}

// ── Hour ──

/// Which double-hour a minute-of-day falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourSlot {
    /// 00:00–00:59, stems follow the current day.
    EarlyZi,
    /// 23:00–23:59, stems follow the next day while the day pillar stays.
    LateZi,
    /// Any other double hour.
    Regular(Branch),
}

pub const fn hour_slot(minute_of_day: u32) -> HourSlot {
    if minute_of_day < EARLY_ZI_END {
        HourSlot::EarlyZi
    } else if minute_of_day >= LATE_ZI_START {
        HourSlot::LateZi
    } else {
        HourSlot::Regular(Branch::from_index((((minute_of_day + 60) / 120) % 12) as u8))
    }
}

/// Stem of the 子 hour for a given day stem (甲己→甲, 乙庚→丙, 丙辛→戊,
/// 丁壬→庚, 戊癸→壬).
pub const fn zi_hour_stem(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() % 5) * 2)
}

fn hour_index(basis: Stem, branch: Branch) -> SexagenaryIndex {
    SexagenaryIndex::wrapping(i64::from(basis.index() % 5) * 12 + i64::from(branch.index()))
}

/// Hour pillar from wall-clock hour/minute and the day stem.
///
/// The late Zi hour takes its stem from the following day's stem without
/// moving the day pillar.
pub fn resolve_hour(hour: u32, minute: u32, day_stem: Stem) -> Pillar {
    let index = match hour_slot(hour * 60 + minute) {
        HourSlot::EarlyZi => hour_index(day_stem, Branch::Zi),
        HourSlot::LateZi => {
            let next_day_stem = Stem::from_index(day_stem.index() + 1);
            hour_index(next_day_stem, Branch::Zi)
        }
        HourSlot::Regular(branch) => hour_index(day_stem, branch),
    };
    Pillar::new(PillarRole::Hour, index)
}

// ── All four ──

/// Resolve all four pillars from a corrected instant.
pub fn resolve_pillars(instant: &CivilDateTime) -> FourPillars {
    let year = resolve_year(instant);
    let month = resolve_month(instant, year.stem());
    let day = resolve_day(instant.date);
    let hour = resolve_hour(instant.hour, instant.minute, day.stem());
    debug!(%instant, %year, %month, %day, %hour, "resolved pillars");
    FourPillars {
        year,
        month,
        day,
        hour: Some(hour),
    }
}

/// Resolve year, month and day pillars for a date whose time is unknown.
///
/// Term boundaries are compared against local noon of that date; no clock
/// correction is applied.
pub fn resolve_date_pillars(date: CivilDate) -> FourPillars {
    let noon = CivilDateTime {
        date,
        hour: 12,
        minute: 0,
    };
    let year = resolve_year(&noon);
    let month = resolve_month(&noon, year.stem());
    let day = resolve_day(date);
    debug!(%date, %year, %month, %day, "resolved date pillars");
    FourPillars {
        year,
        month,
        day,
        hour: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::index_of;

    fn dt(s: &str) -> CivilDateTime {
        s.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn day_anchor_is_wu_wu() {
        let p = resolve_day(DAY_ANCHOR_DATE);
        assert_eq!(p.name(), "戊午");
        assert_eq!(p.index.value(), 54);
    }

    #[test]
    fn day_index_matches_jdn_formula() {
        for d in [date(1900, 1, 1), date(1970, 1, 1), date(2024, 1, 1), date(2049, 12, 31)] {
            let expected = (d.jdn() + 49).rem_euclid(60) as u8;
            assert_eq!(resolve_day(d).index.value(), expected, "{d}");
        }
        assert_eq!(resolve_day(date(2024, 1, 1)).name(), "甲子");
    }

    #[test]
    fn year_anchor() {
        assert_eq!(year_index(1984), SexagenaryIndex::JIAZI);
        assert_eq!(year_index(1983).name(), "癸亥");
        assert_eq!(year_index(2024).name(), "甲辰");
    }

    #[test]
    fn year_turns_at_li_chun() {
        assert_eq!(sexagenary_year(&dt("2024-02-04T17:26")), 2023);
        assert_eq!(sexagenary_year(&dt("2024-02-04T17:27")), 2024);
        assert_eq!(sexagenary_year(&dt("2024-01-20T00:00")), 2023);
    }

    #[test]
    fn first_month_stems_follow_five_pairs() {
        let expected = [
            (Stem::Jia, Stem::Bing),
            (Stem::Ji, Stem::Bing),
            (Stem::Yi, Stem::Wu),
            (Stem::Geng, Stem::Wu),
            (Stem::Bing, Stem::Geng),
            (Stem::Xin, Stem::Geng),
            (Stem::Ding, Stem::Ren),
            (Stem::Ren, Stem::Ren),
            (Stem::Wu, Stem::Jia),
            (Stem::Gui, Stem::Jia),
        ];
        for (year_stem, first) in expected {
            assert_eq!(first_month_stem(year_stem), first);
            let p = month_pillar(0, year_stem);
            assert_eq!(p.stem(), first);
            assert_eq!(p.branch(), Branch::Yin);
        }
    }

    #[test]
    fn month_pillars_step_by_one() {
        for m in 0..12u8 {
            let p = month_pillar(m, Stem::Jia);
            assert_eq!(p.index, month_pillar(0, Stem::Jia).index.step(i64::from(m)));
            assert_eq!(p.branch().index(), (m + 2) % 12);
        }
    }

    #[test]
    fn june_2024_is_geng_wu_month() {
        let t = dt("2024-06-15T11:28");
        let year = resolve_year(&t);
        assert_eq!(resolve_month(&t, year.stem()).name(), "庚午");
    }

    #[test]
    fn hour_slots() {
        assert_eq!(hour_slot(0), HourSlot::EarlyZi);
        assert_eq!(hour_slot(59), HourSlot::EarlyZi);
        assert_eq!(hour_slot(60), HourSlot::Regular(Branch::Chou));
        assert_eq!(hour_slot(179), HourSlot::Regular(Branch::Chou));
        assert_eq!(hour_slot(180), HourSlot::Regular(Branch::Yin));
        assert_eq!(hour_slot(12 * 60), HourSlot::Regular(Branch::Wu));
        assert_eq!(hour_slot(22 * 60 + 59), HourSlot::Regular(Branch::Hai));
        assert_eq!(hour_slot(23 * 60), HourSlot::LateZi);
        assert_eq!(hour_slot(1439), HourSlot::LateZi);
    }

    #[test]
    fn zi_hour_stems_follow_five_pairs() {
        assert_eq!(zi_hour_stem(Stem::Jia), Stem::Jia);
        assert_eq!(zi_hour_stem(Stem::Yi), Stem::Bing);
        assert_eq!(zi_hour_stem(Stem::Bing), Stem::Wu);
        assert_eq!(zi_hour_stem(Stem::Ding), Stem::Geng);
        assert_eq!(zi_hour_stem(Stem::Gui), Stem::Ren);
        for s in crate::sexagenary::ALL_STEMS {
            assert_eq!(resolve_hour(0, 30, s).stem(), zi_hour_stem(s));
        }
    }

    #[test]
    fn late_zi_uses_next_day_stem() {
        let s = Stem::Gui;
        let early = resolve_hour(0, 30, s);
        let late = resolve_hour(23, 0, s);
        assert_eq!(early.name(), "壬子");
        assert_eq!(late.name(), "甲子");
        assert_eq!(late.stem(), zi_hour_stem(Stem::from_index(s.index() + 1)));
        assert_ne!(resolve_hour(22, 59, s).branch(), late.branch());
    }

    #[test]
    fn regular_hours_are_valid_pairs() {
        for s in crate::sexagenary::ALL_STEMS {
            for t in 60..LATE_ZI_START {
                let p = resolve_hour(t / 60, t % 60, s);
                assert!(index_of(p.stem(), p.branch()).is_ok());
            }
        }
    }

    #[test]
    fn noon_day_pillars_skip_hour() {
        let fp = resolve_date_pillars(date(2024, 6, 15));
        assert!(fp.hour.is_none());
        assert_eq!(fp.month.name(), "庚午");
        assert_eq!(fp.year.name(), "甲辰");
    }
}
