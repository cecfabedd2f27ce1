//! Decade luck cycles (大運).
//!
//! Direction comes from gender and year-stem polarity, onset age from the
//! day distance between birth and the nearest section boundary, and each
//! decade's stem/branch from stepping the month pillar.

pub mod cycle;
pub mod onset;
pub mod query;
pub mod types;

pub use cycle::{DecadeCycle, generate, generate_n};
pub use onset::{cycle_direction, onset_age, onset_days};
pub use query::{active_decade, decade_for_age};
pub use types::{
    CycleDirection, DAYS_PER_ONSET_YEAR, DEFAULT_CYCLE_COUNT, DecadeCycleEntry, Gender,
    LuckConfig, YEARS_PER_CYCLE,
};
