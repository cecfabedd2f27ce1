//! Decade luck-cycle generation.
//!
//! The sequence steps away from the month pillar one cycle position per
//! decade, in the direction set by gender and year-stem polarity. It is an
//! iterator: lazy, bounded by the configured count, and restartable from
//! the same inputs.

use std::iter::FusedIterator;

use saju_time::CivilDateTime;
use tracing::debug;

use crate::pillar::FourPillars;
use crate::sexagenary::SexagenaryIndex;

use super::onset::{cycle_direction, onset_age, onset_days};
use super::types::{CycleDirection, DecadeCycleEntry, Gender, LuckConfig, YEARS_PER_CYCLE};

/// Lazily generated decade luck cycles for one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeCycle {
    month: SexagenaryIndex,
    direction: CycleDirection,
    onset_days: i64,
    onset_age: u32,
    birth_year: i32,
    count: usize,
    next: usize,
}

impl DecadeCycle {
    /// Set up the sequence for a chart.
    ///
    /// `birth` is the corrected birth instant the pillars were resolved from.
    pub fn new(
        pillars: &FourPillars,
        birth: &CivilDateTime,
        gender: Gender,
        config: &LuckConfig,
    ) -> Self {
        let direction = cycle_direction(gender, pillars.year.stem());
        let days = onset_days(birth, direction);
        let age = onset_age(days, config.days_per_onset_year);
        debug!(
            %birth,
            direction = direction.name(),
            days,
            age,
            "luck cycle onset"
        );
        Self {
            month: pillars.month.index,
            direction,
            onset_days: days,
            onset_age: age,
            birth_year: birth.date.year,
            count: config.cycle_count,
            next: 0,
        }
    }

    pub fn direction(&self) -> CycleDirection {
        self.direction
    }

    /// Signed day count to the section that fixed the onset age.
    pub fn onset_days(&self) -> i64 {
        self.onset_days
    }

    /// Age at which the first decade begins.
    pub fn onset_age(&self) -> u32 {
        self.onset_age
    }

    /// Entry at 0-based position `i`, independent of iteration state and of
    /// the configured count.
    pub fn entry(&self, i: usize) -> DecadeCycleEntry {
        let steps = (i as i64 + 1) * self.direction.step();
        let onset_age = self.onset_age + (i as u32) * YEARS_PER_CYCLE as u32;
        let onset_year = self.birth_year + onset_age as i32;
        DecadeCycleEntry {
            order: i + 1,
            index: self.month.step(steps),
            onset_age,
            onset_year,
            end_year: onset_year + YEARS_PER_CYCLE - 1,
        }
    }

    /// A fresh copy positioned at the first decade.
    pub fn restart(&self) -> Self {
        Self {
            next: 0,
            ..self.clone()
        }
    }

    /// The first `count` entries, regardless of the configured count.
    pub fn take_entries(&self, count: usize) -> Vec<DecadeCycleEntry> {
        (0..count).map(|i| self.entry(i)).collect()
    }
}

impl Iterator for DecadeCycle {
    type Item = DecadeCycleEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let e = self.entry(self.next);
        self.next += 1;
        Some(e)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for DecadeCycle {}

impl FusedIterator for DecadeCycle {}

/// Decade cycles with the default configuration.
pub fn generate(pillars: &FourPillars, birth: &CivilDateTime, gender: Gender) -> DecadeCycle {
    DecadeCycle::new(pillars, birth, gender, &LuckConfig::default())
}

/// The first `count` decade cycles.
pub fn generate_n(
    pillars: &FourPillars,
    birth: &CivilDateTime,
    gender: Gender,
    count: usize,
) -> Vec<DecadeCycleEntry> {
    let config = LuckConfig {
        cycle_count: count,
        ..LuckConfig::default()
    };
    DecadeCycle::new(pillars, birth, gender, &config).collect()
}
