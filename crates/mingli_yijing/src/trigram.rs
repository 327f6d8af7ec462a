//! The eight trigrams in Fuxi (Earlier Heaven) order.

use serde::Serialize;

use mingli_cycle::Element;

use crate::error::YijingError;

/// One of the eight trigrams, numbered 1..=8 in Fuxi order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

/// All eight trigrams in Fuxi order.
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Kun,
];

impl Trigram {
    /// Fuxi number, 1..=8.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Li => "Li",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Kun => "Kun",
        }
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Li => "离",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Qian => "☰",
            Self::Dui => "☱",
            Self::Li => "☲",
            Self::Zhen => "☳",
            Self::Xun => "☴",
            Self::Kan => "☵",
            Self::Gen => "☶",
            Self::Kun => "☷",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Gen | Self::Kun => Element::Earth,
        }
    }

    /// Lines bottom-to-top; `true` is a yang (solid) line.
    pub fn lines(self) -> [bool; 3] {
        match self {
            Self::Qian => [true, true, true],
            Self::Dui => [true, true, false],
            Self::Li => [true, false, true],
            Self::Zhen => [true, false, false],
            Self::Xun => [false, true, true],
            Self::Kan => [false, true, false],
            Self::Gen => [false, false, true],
            Self::Kun => [false, false, false],
        }
    }

    /// Look up a trigram by its Fuxi number.
    pub fn from_number(n: u8) -> Result<Self, YijingError> {
        match n {
            1..=8 => Ok(ALL_TRIGRAMS[n as usize - 1]),
            _ => Err(YijingError::InvalidTrigram(n)),
        }
    }

    /// Wrap any value onto a Fuxi number. Zero maps to Kun (8).
    pub fn from_number_wrapping(n: u64) -> Self {
        let k = n % 8;
        if k == 0 {
            Self::Kun
        } else {
            ALL_TRIGRAMS[k as usize - 1]
        }
    }

    /// Reconstruct a trigram from its lines (bottom-to-top).
    pub fn from_lines(lines: [bool; 3]) -> Self {
        match lines {
            [true, true, true] => Self::Qian,
            [true, true, false] => Self::Dui,
            [true, false, true] => Self::Li,
            [true, false, false] => Self::Zhen,
            [false, true, true] => Self::Xun,
            [false, true, false] => Self::Kan,
            [false, false, true] => Self::Gen,
            [false, false, false] => Self::Kun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuxi_numbering() {
        assert_eq!(Trigram::Qian.number(), 1);
        assert_eq!(Trigram::Kun.number(), 8);
        assert_eq!(Trigram::from_number(6).unwrap(), Trigram::Kan);
        assert!(Trigram::from_number(0).is_err());
        assert!(Trigram::from_number(9).is_err());
    }

    #[test]
    fn wrapping_sends_zero_to_kun() {
        assert_eq!(Trigram::from_number_wrapping(0), Trigram::Kun);
        assert_eq!(Trigram::from_number_wrapping(8), Trigram::Kun);
        assert_eq!(Trigram::from_number_wrapping(9), Trigram::Qian);
        assert_eq!(Trigram::from_number_wrapping(13), Trigram::Xun);
    }

    #[test]
    fn lines_round_trip() {
        for t in ALL_TRIGRAMS {
            assert_eq!(Trigram::from_lines(t.lines()), t);
        }
    }

    #[test]
    fn elements() {
        assert_eq!(Trigram::Qian.element(), Element::Metal);
        assert_eq!(Trigram::Dui.element(), Element::Metal);
        assert_eq!(Trigram::Li.element(), Element::Fire);
        assert_eq!(Trigram::Zhen.element(), Element::Wood);
        assert_eq!(Trigram::Xun.element(), Element::Wood);
        assert_eq!(Trigram::Kan.element(), Element::Water);
        assert_eq!(Trigram::Gen.element(), Element::Earth);
        assert_eq!(Trigram::Kun.element(), Element::Earth);
    }
}
