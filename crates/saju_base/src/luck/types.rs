//! Core types for decade luck-cycle calculations.

use std::fmt::{Display, Formatter};

use crate::sexagenary::SexagenaryIndex;

/// Length of one luck cycle in years.
pub const YEARS_PER_CYCLE: i32 = 10;

/// Days between birth and the nearest section that count as one year of
/// onset age.
pub const DAYS_PER_ONSET_YEAR: i64 = 3;

/// Conventional number of cycles in a chart (about 100 years).
pub const DEFAULT_CYCLE_COUNT: usize = 10;

/// Gender of the chart subject; only the luck-cycle direction reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Which way the cycles step from the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleDirection {
    Forward,
    Backward,
}

impl CycleDirection {
    /// +1 or -1 cycle steps per decade.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Backward => "Backward",
        }
    }
}

/// Tunable parameters of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckConfig {
    /// Number of decades to generate. Default: 10.
    pub cycle_count: usize,
    /// Day distance worth one year of onset age. Default: 3.
    pub days_per_onset_year: i64,
}

impl Default for LuckConfig {
    fn default() -> Self {
        Self {
            cycle_count: DEFAULT_CYCLE_COUNT,
            days_per_onset_year: DAYS_PER_ONSET_YEAR,
        }
    }
}

/// One decade of the luck sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecadeCycleEntry {
    /// 1-indexed position in the sequence.
    pub order: usize,
    /// Stem/branch of the decade.
    pub index: SexagenaryIndex,
    /// Age at which the decade begins.
    pub onset_age: u32,
    /// Calendar year in which the decade begins.
    pub onset_year: i32,
    /// Last calendar year of the decade, inclusive.
    pub end_year: i32,
}

impl DecadeCycleEntry {
    /// Whether the calendar year falls inside this decade.
    pub fn contains_year(&self, year: i32) -> bool {
        (self.onset_year..=self.end_year).contains(&year)
    }
}

impl Display for DecadeCycleEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>2}. {} age {:>3} ({}–{})",
            self.order, self.index, self.onset_age, self.onset_year, self.end_year
        )
    }
}
