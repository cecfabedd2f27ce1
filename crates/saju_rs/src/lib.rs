//! Convenience wrapper for the sexagenary four-pillars engine.
//!
//! Takes a birth as the user reports it (solar or lunar date, optional
//! wall-clock time, gender), converts and corrects it, and resolves the
//! four pillars and decade luck cycles.
//!
//! # Quick start
//!
//! ```rust
//! use saju_rs::*;
//!
//! let input = BirthInput::solar(1990, 2, 4, Gender::Male).with_time(0, 10);
//! let report = compute_pillars(&input).unwrap();
//! assert_eq!(report.pillars.year.name(), "己巳");
//!
//! for decade in report.decade_cycle().take(3) {
//!     println!("{decade}");
//! }
//! ```

pub mod convenience;
pub mod error;
pub mod input;

// Primary re-exports — users should only need `use saju_rs::*`
pub use convenience::{
    PillarsReport, compute_pillars, compute_pillars_with, generate_decade_cycle, lunar_to_solar,
    solar_to_lunar,
};
pub use error::SajuError;
pub use input::{BirthInput, CalendarType};

// Re-export the types callers see in results.
pub use saju_base::{
    Branch, CycleDirection, DecadeCycle, DecadeCycleEntry, Element, FourPillars, Gender, Lookup,
    LuckConfig, LunarDate, Pillar, PillarRole, Polarity, SexagenaryIndex, Stem, active_decade,
};
pub use saju_time::{CivilDate, CivilDateTime, CorrectionConfig, CorrectionReport};
