//! The sexagenary (60-element) stem/branch cycle.
//!
//! Ten heavenly stems and twelve earthly branches step in lockstep; the
//! combined index runs 0 (甲子) to 59 (癸亥). `stem = index mod 10`,
//! `branch = index mod 12`, so only the 60 pairs whose stem and branch
//! indices share parity exist. Every pillar is built from a
//! [`SexagenaryIndex`], never from a free (stem, branch) pair.
//!
//! Symbol order is fixed and is part of the public contract.

use std::fmt::{Display, Formatter};

use crate::error::BaseError;

/// Number of entries in the cycle.
pub const CYCLE_LEN: u8 = 60;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

/// Yang/yin polarity of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

/// The 10 heavenly stems, 甲 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in canonical order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index mod 10`.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    pub const fn hanja(self) -> &'static str {
        STEM_HANJA[self as usize]
    }

    /// Romanized (pinyin) name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self as usize]
    }

    /// Element: two consecutive stems per element, starting with Wood.
    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self.polarity(), Polarity::Yang)
    }
}

/// The 12 earthly branches, 子 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in canonical order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index mod 12`.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    pub const fn hanja(self) -> &'static str {
        BRANCH_HANJA[self as usize]
    }

    /// Romanized (pinyin) name.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }
}

/// Position in the 60-cycle, always in `0..60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SexagenaryIndex(u8);

impl SexagenaryIndex {
    /// 甲子, index 0.
    pub const JIAZI: Self = Self(0);

    /// `None` unless `value < 60`.
    pub const fn new(value: u8) -> Option<Self> {
        if value < CYCLE_LEN {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Reduce any integer into the cycle (Euclidean modulo 60).
    pub const fn wrapping(value: i64) -> Self {
        Self(value.rem_euclid(CYCLE_LEN as i64) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn stem(self) -> Stem {
        Stem::from_index(self.0 % 10)
    }

    pub const fn branch(self) -> Branch {
        Branch::from_index(self.0 % 12)
    }

    /// Move `delta` places around the cycle; negative steps go backward.
    pub const fn step(self, delta: i64) -> Self {
        Self::wrapping(self.0 as i64 + delta)
    }

    /// Two-character hanja name, e.g. `甲子`.
    pub fn name(self) -> String {
        format!("{}{}", self.stem().hanja(), self.branch().hanja())
    }

    /// Romanized name, e.g. `Jia-Zi`.
    pub fn romanized(self) -> String {
        format!("{}-{}", self.stem().name(), self.branch().name())
    }
}

impl Display for SexagenaryIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem().hanja(), self.branch().hanja())
    }
}

/// Stem of a cycle index.
pub const fn stem_of(index: SexagenaryIndex) -> Stem {
    index.stem()
}

/// Branch of a cycle index.
pub const fn branch_of(index: SexagenaryIndex) -> Branch {
    index.branch()
}

/// Cycle index of a (stem, branch) pair.
///
/// Fails with [`BaseError::InvalidPair`] when the parities differ; 40 of the
/// 100 combinations do not exist in the cycle.
pub fn index_of(stem: Stem, branch: Branch) -> Result<SexagenaryIndex, BaseError> {
    let (s, b) = (stem.index() as i64, branch.index() as i64);
    if s % 2 != b % 2 {
        return Err(BaseError::InvalidPair { stem, branch });
    }
    // 6s - 5b is ≡ s (mod 10) and ≡ b (mod 12) whenever s ≡ b (mod 2).
    Ok(SexagenaryIndex::wrapping(6 * s - 5 * b))
}

/// Step an index around the cycle, wrapping modulo 60.
pub const fn step(index: SexagenaryIndex, delta: i64) -> SexagenaryIndex {
    index.step(delta)
}
