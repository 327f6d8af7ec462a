//! The 12 Earthly Branches (dizhi).
//!
//! Branches carry an element, a polarity, a fixed two-hour interval of the
//! day (Zi straddles midnight: 23:00-01:00), and one to three concealed
//! stems with tabulated weights used for five-element strength scoring.

use serde::Serialize;

use crate::element::Element;
use crate::stem::{Polarity, Stem};

/// The 12 Earthly Branches (Zi=0 .. Hai=11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
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

/// All 12 branches in cycle order.
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

/// A stem concealed within a branch, with its strength weight.
///
/// Principal qi weighs 1.0, middle qi 0.6, residual qi 0.3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub weight: f64,
}

const fn hs(stem: Stem, weight: f64) -> HiddenStem {
    HiddenStem { stem, weight }
}

/// Concealed-stem table, indexed by branch.
pub const HIDDEN_STEMS: [&[HiddenStem]; 12] = [
    &[hs(Stem::Gui, 1.0)],                                       // Zi
    &[hs(Stem::Ji, 1.0), hs(Stem::Gui, 0.6), hs(Stem::Xin, 0.3)], // Chou
    &[hs(Stem::Jia, 1.0), hs(Stem::Bing, 0.6), hs(Stem::Wu, 0.3)], // Yin
    &[hs(Stem::Yi, 1.0)],                                        // Mao
    &[hs(Stem::Wu, 1.0), hs(Stem::Yi, 0.6), hs(Stem::Gui, 0.3)], // Chen
    &[hs(Stem::Bing, 1.0), hs(Stem::Geng, 0.6), hs(Stem::Wu, 0.3)], // Si
    &[hs(Stem::Ding, 1.0), hs(Stem::Ji, 0.6)],                   // Wu
    &[hs(Stem::Ji, 1.0), hs(Stem::Ding, 0.6), hs(Stem::Yi, 0.3)], // Wei
    &[hs(Stem::Geng, 1.0), hs(Stem::Ren, 0.6), hs(Stem::Wu, 0.3)], // Shen
    &[hs(Stem::Xin, 1.0)],                                       // You
    &[hs(Stem::Wu, 1.0), hs(Stem::Xin, 0.6), hs(Stem::Ding, 0.3)], // Xu
    &[hs(Stem::Ren, 1.0), hs(Stem::Jia, 0.6)],                   // Hai
];

impl Branch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Zodiac animal (English).
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch from its 0-based index, modulo the cycle length.
    pub fn from_index_wrapping(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Branch from its 0-based index; `None` if out of range.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_BRANCHES.get(i as usize).copied()
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Stems concealed within this branch, principal qi first.
    pub fn hidden_stems(self) -> &'static [HiddenStem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Branch governing a clock hour.
    ///
    /// Each branch spans two hours; Zi covers 23:00-01:00, Chou 01:00-03:00,
    /// and so on around the day.
    pub fn from_hour(hour: u32) -> Self {
        ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
    }
}
