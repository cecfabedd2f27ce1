//! Resolved pillars and the four-pillar set.

use std::fmt::{Display, Formatter};

use crate::sexagenary::{Branch, Element, SexagenaryIndex, Stem};

/// Calendar role of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// One resolved stem/branch pair with its role.
///
/// Always built from a [`SexagenaryIndex`], so the pair is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub role: PillarRole,
    pub index: SexagenaryIndex,
}

impl Pillar {
    pub const fn new(role: PillarRole, index: SexagenaryIndex) -> Self {
        Self { role, index }
    }

    pub const fn stem(&self) -> Stem {
        self.index.stem()
    }

    pub const fn branch(&self) -> Branch {
        self.index.branch()
    }

    pub const fn stem_element(&self) -> Element {
        self.index.stem().element()
    }

    pub const fn branch_element(&self) -> Element {
        self.index.branch().element()
    }

    /// Two-character hanja name.
    pub fn name(&self) -> String {
        self.index.name()
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index)
    }
}

/// Year, month and day pillars, plus the hour pillar when the birth time is
/// known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl FourPillars {
    /// Pillars in hour, day, month, year order, the conventional
    /// right-to-left chart layout read left to right.
    pub fn chart_order(&self) -> Vec<Pillar> {
        self.hour
            .into_iter()
            .chain([self.day, self.month, self.year])
            .collect()
    }

    /// Pillars in year, month, day, hour order.
    pub fn iter(&self) -> impl Iterator<Item = Pillar> + '_ {
        [self.year, self.month, self.day]
            .into_iter()
            .chain(self.hour)
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.year, self.month, self.day)?;
        match self.hour {
            Some(h) => write!(f, " {h}"),
            None => write!(f, " --"),
        }
    }
}
