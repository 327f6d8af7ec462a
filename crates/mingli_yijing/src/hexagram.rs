//! Hexagrams: trigram pairs, King Wen numbering, and the inner/outer
//! trigram relation.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use mingli_cycle::ElementRelation;

use crate::error::YijingError;
use crate::trigram::Trigram;

/// King Wen numbers indexed by [lower][upper] in Fuxi order.
const KING_WEN: [[u8; 8]; 8] = [
    [1, 43, 14, 34, 9, 5, 26, 11],
    [10, 58, 38, 54, 61, 60, 41, 19],
    [13, 49, 30, 55, 37, 63, 22, 36],
    [25, 17, 21, 51, 42, 3, 27, 24],
    [44, 28, 50, 32, 57, 48, 18, 46],
    [6, 47, 64, 40, 59, 29, 4, 7],
    [33, 31, 56, 62, 53, 39, 52, 15],
    [12, 45, 35, 16, 20, 8, 23, 2],
];

/// Hexagram names in King Wen order (index 0 is hexagram 1).
const HEXAGRAM_NAMES: [&str; 64] = [
    "乾", "坤", "屯", "蒙", "需", "讼", "师", "比", "小畜", "履", "泰", "否", "同人", "大有", "谦",
    "豫", "随", "蛊", "临", "观", "噬嗑", "贲", "剥", "复", "无妄", "大畜", "颐", "大过", "坎",
    "离", "咸", "恒", "遁", "大壮", "晋", "明夷", "家人", "睽", "蹇", "解", "损", "益", "夬", "姤",
    "萃", "升", "困", "井", "革", "鼎", "震", "艮", "渐", "归妹", "丰", "旅", "巽", "兑", "涣",
    "节", "中孚", "小过", "既济", "未济",
];

/// How the outer (upper) trigram's element stands to the inner (lower) one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrigramRelation {
    Harmonious,
    OuterGeneratesInner,
    InnerGeneratesOuter,
    OuterControlsInner,
    InnerControlsOuter,
}

/// A hexagram with its (possibly empty) set of changing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    pub upper: Trigram,
    pub lower: Trigram,
    /// Changing line positions, 1 (bottom) to 6 (top), sorted ascending.
    pub changing: Vec<u8>,
}

impl Hexagram {
    /// Build a hexagram, validating changing-line positions.
    pub fn new(upper: Trigram, lower: Trigram, mut changing: Vec<u8>) -> Result<Self, YijingError> {
        for &pos in &changing {
            if !(1..=6).contains(&pos) {
                return Err(YijingError::InvalidLine(pos));
            }
        }
        changing.sort_unstable();
        changing.dedup();
        Ok(Self {
            upper,
            lower,
            changing,
        })
    }

    /// A hexagram with no changing lines.
    pub fn stable(upper: Trigram, lower: Trigram) -> Self {
        Self {
            upper,
            lower,
            changing: Vec::new(),
        }
    }

    /// Reconstruct from six lines, bottom-to-top.
    pub fn from_lines(lines: [bool; 6], changing: Vec<u8>) -> Result<Self, YijingError> {
        let lower = Trigram::from_lines([lines[0], lines[1], lines[2]]);
        let upper = Trigram::from_lines([lines[3], lines[4], lines[5]]);
        Self::new(upper, lower, changing)
    }

    /// All six lines bottom-to-top; `true` is yang.
    pub fn lines(&self) -> [bool; 6] {
        let lo = self.lower.lines();
        let hi = self.upper.lines();
        [lo[0], lo[1], lo[2], hi[0], hi[1], hi[2]]
    }

    /// Position in the King Wen sequence, 1..=64.
    pub fn king_wen_number(&self) -> u8 {
        KING_WEN[self.lower as usize][self.upper as usize]
    }

    pub fn name(&self) -> &'static str {
        HEXAGRAM_NAMES[self.king_wen_number() as usize - 1]
    }

    /// Relation between the outer and inner trigram elements.
    pub fn trigram_relation(&self) -> TrigramRelation {
        match self.upper.element().relation_to(self.lower.element()) {
            ElementRelation::Same => TrigramRelation::Harmonious,
            ElementRelation::Generates => TrigramRelation::OuterGeneratesInner,
            ElementRelation::GeneratedBy => TrigramRelation::InnerGeneratesOuter,
            ElementRelation::Controls => TrigramRelation::OuterControlsInner,
            ElementRelation::ControlledBy => TrigramRelation::InnerControlsOuter,
        }
    }
}

impl Display for Hexagram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}{})",
            self.name(),
            self.upper.symbol(),
            self.lower.symbol()
        )
    }
}

/// Iterate all 64 hexagrams (no changing lines), in Fuxi pair order.
pub fn all_hexagrams() -> impl Iterator<Item = Hexagram> {
    crate::trigram::ALL_TRIGRAMS.into_iter().flat_map(|lower| {
        crate::trigram::ALL_TRIGRAMS
            .into_iter()
            .map(move |upper| Hexagram::stable(upper, lower))
    })
}
