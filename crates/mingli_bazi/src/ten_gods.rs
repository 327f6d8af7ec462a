//! The Ten Gods: named relations between the day master and another stem.
//!
//! The relation is fixed by the element relation between the target stem
//! and the day master, split by whether the two stems share polarity.
//! Same-polarity and different-polarity variants pair up, so the ten names
//! cover the 5 x 2 product exactly.

use serde::Serialize;

use mingli_cycle::{ElementRelation, Stem};

/// The ten relation names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    /// 比肩 — same element, same polarity.
    Friend,
    /// 劫财 — same element, different polarity.
    RobWealth,
    /// 食神 — day master generates target, same polarity.
    EatingGod,
    /// 伤官 — day master generates target, different polarity.
    HurtingOfficer,
    /// 偏财 — day master controls target, same polarity.
    IndirectWealth,
    /// 正财 — day master controls target, different polarity.
    DirectWealth,
    /// 七杀 — target controls day master, same polarity.
    SevenKillings,
    /// 正官 — target controls day master, different polarity.
    DirectOfficer,
    /// 偏印 — target generates day master, same polarity.
    IndirectResource,
    /// 正印 — target generates day master, different polarity.
    DirectResource,
}

impl TenGod {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    /// Chinese name.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Friend => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }
}

/// Relation of `target` to the day master.
pub fn ten_god(day_master: Stem, target: Stem) -> TenGod {
    let same_polarity = day_master.polarity() == target.polarity();
    match day_master.element().relation_to(target.element()) {
        ElementRelation::Same => {
            if same_polarity {
                TenGod::Friend
            } else {
                TenGod::RobWealth
            }
        }
        ElementRelation::Generates => {
            if same_polarity {
                TenGod::EatingGod
            } else {
                TenGod::HurtingOfficer
            }
        }
        ElementRelation::Controls => {
            if same_polarity {
                TenGod::IndirectWealth
            } else {
                TenGod::DirectWealth
            }
        }
        ElementRelation::ControlledBy => {
            if same_polarity {
                TenGod::SevenKillings
            } else {
                TenGod::DirectOfficer
            }
        }
        ElementRelation::GeneratedBy => {
            if same_polarity {
                TenGod::IndirectResource
            } else {
                TenGod::DirectResource
            }
        }
    }
}
