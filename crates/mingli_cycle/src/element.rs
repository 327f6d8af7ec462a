//! The five elements (wuxing) and their generate/control cycle.
//!
//! The cycle is fixed: Wood -> Fire -> Earth -> Metal -> Water -> Wood
//! (generation), and Wood -> Earth -> Water -> Fire -> Metal -> Wood
//! (control). Both are total over the five elements.

use serde::Serialize;

/// The five elements in generation order (Wood=0 .. Water=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Pairwise relation of one element to another under the fixed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// Self generates the other (mother-of).
    Generates,
    /// The other generates self (child-of).
    GeneratedBy,
    /// Self controls the other.
    Controls,
    /// The other controls self.
    ControlledBy,
}

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generation order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element from its generation-order index.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_ELEMENTS.get(i as usize).copied()
    }

    /// The element this one generates (next in the generation cycle).
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one controls (two steps ahead in the cycle).
    pub const fn controls(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Fire => Self::Metal,
            Self::Earth => Self::Water,
            Self::Metal => Self::Wood,
            Self::Water => Self::Fire,
        }
    }

    /// Relation of `self` to `other`.
    pub fn relation_to(self, other: Element) -> ElementRelation {
        if self == other {
            ElementRelation::Same
        } else if self.generates() == other {
            ElementRelation::Generates
        } else if other.generates() == self {
            ElementRelation::GeneratedBy
        } else if self.controls() == other {
            ElementRelation::Controls
        } else {
            ElementRelation::ControlledBy
        }
    }
}
