//! Boundary data for the 24 solar terms.
//!
//! The base cycle is a fixed, year-independent approximation of when each
//! term begins, as a Korean standard time clock reading. Individual years
//! can be refined by the sparse override table; anything not overridden uses
//! the base cycle.
//!
//! Resolvers compare these readings unchanged against the corrected (true
//! solar) birth instant. No meridian shift is applied to the table, so a
//! boundary listed at 11:14 is crossed when the corrected instant reaches
//! 11:14.

use crate::solar_term::{SolarTerm, SolarTermBoundary};

const fn b(term: SolarTerm, month: u32, day: u32, hour: u32, minute: u32) -> SolarTermBoundary {
    SolarTermBoundary {
        term,
        month,
        day,
        minute_of_day: hour * 60 + minute,
    }
}

/// Approximate start of each term, in calendar order from January.
pub const BASE_BOUNDARIES: [SolarTermBoundary; 24] = [
    b(SolarTerm::MinorCold, 1, 6, 5, 30),
    b(SolarTerm::MajorCold, 1, 20, 22, 50),
    b(SolarTerm::StartOfSpring, 2, 4, 17, 10),
    b(SolarTerm::RainWater, 2, 19, 13, 0),
    b(SolarTerm::AwakeningOfInsects, 3, 6, 11, 0),
    b(SolarTerm::SpringEquinox, 3, 21, 11, 50),
    b(SolarTerm::PureBrightness, 4, 5, 15, 50),
    b(SolarTerm::GrainRain, 4, 20, 22, 50),
    b(SolarTerm::StartOfSummer, 5, 6, 9, 10),
    b(SolarTerm::GrainBuds, 5, 21, 22, 0),
    b(SolarTerm::GrainInEar, 6, 6, 13, 30),
    b(SolarTerm::SummerSolstice, 6, 21, 6, 30),
    b(SolarTerm::MinorHeat, 7, 7, 23, 50),
    b(SolarTerm::MajorHeat, 7, 23, 17, 10),
    b(SolarTerm::StartOfAutumn, 8, 8, 9, 30),
    b(SolarTerm::EndOfHeat, 8, 23, 0, 20),
    b(SolarTerm::WhiteDew, 9, 8, 12, 30),
    b(SolarTerm::AutumnEquinox, 9, 23, 22, 0),
    b(SolarTerm::ColdDew, 10, 9, 4, 0),
    b(SolarTerm::FrostDescent, 10, 24, 7, 20),
    b(SolarTerm::StartOfWinter, 11, 8, 7, 30),
    b(SolarTerm::MinorSnow, 11, 23, 5, 0),
    b(SolarTerm::MajorSnow, 12, 7, 23, 50),
    b(SolarTerm::WinterSolstice, 12, 22, 17, 50),
];

/// A year-specific refinement of one term boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermOverride {
    pub year: i32,
    pub boundary: SolarTermBoundary,
}

const fn li_chun(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> TermOverride {
    TermOverride {
        year,
        boundary: b(SolarTerm::StartOfSpring, month, day, hour, minute),
    }
}

/// Published Start-of-Spring clock readings (KST) for years where the base
/// cycle is off by more than a few minutes. Compared as is against corrected
/// instants, like the base cycle.
pub const TERM_OVERRIDES: [TermOverride; 12] = [
    li_chun(1990, 2, 4, 11, 14),
    li_chun(2000, 2, 4, 21, 40),
    li_chun(2016, 2, 4, 18, 46),
    li_chun(2017, 2, 4, 0, 34),
    li_chun(2018, 2, 4, 6, 28),
    li_chun(2019, 2, 4, 12, 14),
    li_chun(2020, 2, 4, 18, 3),
    li_chun(2021, 2, 3, 23, 59),
    li_chun(2022, 2, 4, 5, 51),
    li_chun(2023, 2, 4, 11, 42),
    li_chun(2024, 2, 4, 17, 27),
    li_chun(2025, 2, 3, 23, 10),
];
