//! The 24 solar terms as fixed calendar boundaries.
//!
//! Terms are not computed astronomically: each has an approximate
//! (month, day, minute-of-day) start in [`BASE_BOUNDARIES`], optionally
//! refined per year by [`TERM_OVERRIDES`]. The 12 even-indexed terms are
//! "sections" and open the sexagenary months; Start of Spring opens month 0
//! and the sexagenary year.
//!
//! Tie-break everywhere: an instant equal to a boundary is at-or-after it,
//! so the new term has already begun.

use saju_time::{CivilDate, CivilDateTime, MINUTES_PER_DAY};

pub use crate::solar_term_data::{BASE_BOUNDARIES, TERM_OVERRIDES, TermOverride};

/// The 24 solar terms, in calendar order starting in January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    MinorCold,
    MajorCold,
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
    SpringEquinox,
    PureBrightness,
    GrainRain,
    StartOfSummer,
    GrainBuds,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
}

/// All 24 terms in calendar order.
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::PureBrightness,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
];

const TERM_HANJA: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "驚蟄", "春分", "淸明", "穀雨", "立夏", "小滿", "芒種", "夏至",
    "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

const TERM_NAMES: [&str; 24] = [
    "Minor Cold",
    "Major Cold",
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
    "Spring Equinox",
    "Pure Brightness",
    "Grain Rain",
    "Start of Summer",
    "Grain Buds",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
];

impl SolarTerm {
    /// 0-based calendar-order index (Minor Cold = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_SOLAR_TERMS[(index % 24) as usize]
    }

    pub const fn name(self) -> &'static str {
        TERM_NAMES[self as usize]
    }

    pub const fn hanja(self) -> &'static str {
        TERM_HANJA[self as usize]
    }

    /// Sections (節) open a sexagenary month; the others are mid-month.
    pub const fn is_section(self) -> bool {
        self.index() % 2 == 0
    }

    /// Sexagenary month (0 = 寅 month, opened by Start of Spring) this term
    /// falls in.
    pub const fn month_index(self) -> u8 {
        (self.index() / 2 + 11) % 12
    }
}

/// Where a term begins within a generic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermBoundary {
    pub term: SolarTerm,
    pub month: u32,
    pub day: u32,
    pub minute_of_day: u32,
}

impl SolarTermBoundary {
    const fn key(&self) -> (u32, u32, u32) {
        (self.month, self.day, self.minute_of_day)
    }

    /// This boundary placed in a concrete year.
    pub const fn in_year(&self, year: i32) -> CivilDateTime {
        CivilDateTime {
            date: CivilDate {
                year,
                month: self.month,
                day: self.day,
            },
            hour: self.minute_of_day / 60,
            minute: self.minute_of_day % 60,
        }
    }
}

/// A term boundary resolved to a concrete instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermInstant {
    pub term: SolarTerm,
    pub instant: CivilDateTime,
    /// True when the instant came from the per-year override table.
    pub refined: bool,
}

/// Which terms a boundary search considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSet {
    /// All 24 terms.
    All,
    /// Only the 12 month-opening sections.
    Sections,
}

impl TermSet {
    pub const fn contains(self, term: SolarTerm) -> bool {
        match self {
            Self::All => true,
            Self::Sections => term.is_section(),
        }
    }

    const fn first(self) -> SolarTerm {
        SolarTerm::MinorCold
    }

    const fn last(self) -> SolarTerm {
        match self {
            Self::All => SolarTerm::WinterSolstice,
            Self::Sections => SolarTerm::MajorSnow,
        }
    }
}

/// Direction of a day-count search from an instant to a section boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermDirection {
    /// Next boundary strictly after the instant (count is positive).
    Forward,
    /// Latest boundary at or before the instant (count is zero or negative).
    AtOrBefore,
    /// Latest boundary strictly before the instant (count is negative).
    Before,
}

/// Latest base-cycle boundary not after `(month, day, minute_of_day)`.
///
/// Queries before the first January term wrap to the previous December's
/// Winter Solstice.
pub fn term_at_or_before(month: u32, day: u32, minute_of_day: u32) -> SolarTermBoundary {
    let query = (month, day, minute_of_day);
    BASE_BOUNDARIES
        .iter()
        .rev()
        .find(|bd| bd.key() <= query)
        .copied()
        .unwrap_or(BASE_BOUNDARIES[BASE_BOUNDARIES.len() - 1])
}

/// Boundary of `term` in `year`, honoring the override table.
pub fn boundary(year: i32, term: SolarTerm) -> TermInstant {
    match TERM_OVERRIDES
        .iter()
        .find(|o| o.year == year && o.boundary.term == term)
    {
        Some(o) => TermInstant {
            term,
            instant: o.boundary.in_year(year),
            refined: true,
        },
        None => TermInstant {
            term,
            instant: BASE_BOUNDARIES[term.index() as usize].in_year(year),
            refined: false,
        },
    }
}

fn boundaries_in(year: i32, set: TermSet) -> impl Iterator<Item = TermInstant> {
    ALL_SOLAR_TERMS
        .into_iter()
        .filter(move |t| set.contains(*t))
        .map(move |t| boundary(year, t))
}

/// Latest boundary in `set` at or before `instant`.
pub fn boundary_at_or_before(instant: &CivilDateTime, set: TermSet) -> TermInstant {
    let year = instant.date.year;
    // Previous December's last term always precedes any instant in `year`.
    let seed = boundary(year - 1, set.last());
    boundaries_in(year, set)
        .filter(|b| b.instant <= *instant)
        .fold(seed, |best, b| if b.instant > best.instant { b } else { best })
}

/// Latest boundary in `set` strictly before `instant`.
pub fn boundary_before(instant: &CivilDateTime, set: TermSet) -> TermInstant {
    let year = instant.date.year;
    let seed = boundary(year - 1, set.last());
    boundaries_in(year, set)
        .filter(|b| b.instant < *instant)
        .fold(seed, |best, b| if b.instant > best.instant { b } else { best })
}

/// Earliest boundary in `set` strictly after `instant`.
pub fn boundary_after(instant: &CivilDateTime, set: TermSet) -> TermInstant {
    let year = instant.date.year;
    // Next January's first term always follows any instant in `year`.
    let seed = boundary(year + 1, set.first());
    boundaries_in(year, set)
        .filter(|b| b.instant > *instant)
        .fold(seed, |best, b| if b.instant < best.instant { b } else { best })
}

/// Section (month-opening term) in force at `instant`.
pub fn section_at_or_before(instant: &CivilDateTime) -> TermInstant {
    boundary_at_or_before(instant, TermSet::Sections)
}

/// Next section strictly after `instant`.
pub fn section_after(instant: &CivilDateTime) -> TermInstant {
    boundary_after(instant, TermSet::Sections)
}

/// Signed whole days from `instant` to the nearest section boundary in
/// `direction`.
///
/// Minute distances are truncated to whole days. Forward counts are
/// positive, backward counts are zero or negative. On a boundary,
/// `AtOrBefore` yields 0 and `Before` yields minus the length of the
/// preceding section.
pub fn days_between(instant: &CivilDateTime, direction: TermDirection) -> i64 {
    match direction {
        TermDirection::Forward => {
            let next = section_after(instant);
            next.instant.minutes_since(instant) / MINUTES_PER_DAY
        }
        TermDirection::AtOrBefore => {
            let prev = section_at_or_before(instant);
            -(instant.minutes_since(&prev.instant) / MINUTES_PER_DAY)
        }
        TermDirection::Before => {
            let prev = boundary_before(instant, TermSet::Sections);
            -(instant.minutes_since(&prev.instant) / MINUTES_PER_DAY)
        }
    }
}
