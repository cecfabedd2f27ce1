//! Sexagenary four-pillar calculations on corrected civil instants.
//!
//! This crate provides:
//! - The 60-element stem/branch cycle and its arithmetic
//! - A fixed solar-term boundary table with per-year refinements
//! - Year, month, day and hour pillar resolvers
//! - Lunar ↔ solar date conversion over an embedded 1900–2049 table
//! - Decade luck-cycle generation
//!
//! Everything is a pure function of its arguments plus read-only static
//! tables; nothing here performs I/O.

pub mod error;
pub mod lookup;
pub mod luck;
pub mod lunar;
mod lunar_data;
pub mod pillar;
pub mod resolve;
pub mod sexagenary;
pub mod solar_term;
mod solar_term_data;

pub use error::BaseError;
pub use lookup::Lookup;
pub use luck::{
    CycleDirection, DecadeCycle, DecadeCycleEntry, Gender, LuckConfig, active_decade,
    decade_for_age,
};
pub use lunar::{
    LUNAR_TABLE_RANGE, LunarDate, LunarMonth, LunarYearEntry, lunar_to_solar, lunar_year,
    solar_to_lunar,
};
pub use pillar::{FourPillars, Pillar, PillarRole};
pub use resolve::{
    DAY_ANCHOR_DATE, DAY_ANCHOR_INDEX, HourSlot, YEAR_ANCHOR, hour_slot, resolve_date_pillars,
    resolve_day, resolve_hour, resolve_month, resolve_pillars, resolve_year, sexagenary_year,
};
pub use sexagenary::{
    ALL_BRANCHES, ALL_STEMS, Branch, CYCLE_LEN, Element, Polarity, SexagenaryIndex, Stem,
    branch_of, index_of, stem_of, step,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, SolarTermBoundary, TermDirection, TermInstant, TermSet, boundary,
    boundary_after, boundary_at_or_before, boundary_before, days_between, section_after,
    section_at_or_before, term_at_or_before,
};
