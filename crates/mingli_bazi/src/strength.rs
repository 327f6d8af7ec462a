//! Five-element strength scoring over a chart.
//!
//! Each pillar's stem and branch contribute position-weighted strength; the
//! positions are asymmetric on purpose (day weighs most for stems, month
//! for branches). Concealed stems contribute at a 0.3 damping of their
//! tabulated weight. Percentages are rounded per element independently and
//! the rounded sum is NOT corrected to 100; downstream consumers rely on
//! the raw values.

use serde::Serialize;

use mingli_cycle::{ALL_ELEMENTS, Element};

use crate::pillar::BaziChart;

/// Stem position weights: year, month, day, hour. Day is highest.
pub const STEM_POSITION_WEIGHTS: [f64; 4] = [1.0, 1.2, 1.5, 1.0];

/// Branch position weights: year, month, day, hour. Month is highest.
pub const BRANCH_POSITION_WEIGHTS: [f64; 4] = [1.0, 1.5, 1.2, 1.0];

/// Damping applied to concealed-stem contributions.
pub const HIDDEN_STEM_DAMPING: f64 = 0.3;

/// Per-element strength scoring result. Arrays index by
/// `Element::index()` (Wood=0 .. Water=4).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementStrength {
    /// Visible stem + branch occurrences per element.
    pub counts: [u32; 5],
    /// Position-weighted strength per element.
    pub weighted: [f64; 5],
    /// Independently rounded percentage per element. May not sum to 100.
    pub percentages: [i32; 5],
    pub strongest: Element,
    pub weakest: Element,
}

impl ElementStrength {
    pub fn count(&self, e: Element) -> u32 {
        self.counts[e.index() as usize]
    }

    pub fn weight(&self, e: Element) -> f64 {
        self.weighted[e.index() as usize]
    }

    pub fn percentage(&self, e: Element) -> i32 {
        self.percentages[e.index() as usize]
    }
}

/// Score the five elements of a chart.
pub fn element_strength(chart: &BaziChart) -> ElementStrength {
    let mut counts = [0u32; 5];
    let mut weighted = [0f64; 5];

    for (pos, pillar) in chart.pillars().iter().enumerate() {
        let stem_el = pillar.stem().element().index() as usize;
        counts[stem_el] += 1;
        weighted[stem_el] += STEM_POSITION_WEIGHTS[pos];

        let branch = pillar.branch();
        let branch_el = branch.element().index() as usize;
        counts[branch_el] += 1;
        weighted[branch_el] += BRANCH_POSITION_WEIGHTS[pos];

        for hidden in branch.hidden_stems() {
            let el = hidden.stem.element().index() as usize;
            weighted[el] += hidden.weight * HIDDEN_STEM_DAMPING;
        }
    }

    let total: f64 = weighted.iter().sum();
    let mut percentages = [0i32; 5];
    for (i, w) in weighted.iter().enumerate() {
        percentages[i] = (w / total * 100.0).round() as i32;
    }

    let strongest = strongest_of(&weighted, f64::lt);
    let weakest = strongest_of(&weighted, f64::gt);

    ElementStrength {
        counts,
        weighted,
        percentages,
        strongest,
        weakest,
    }
}

/// Element whose weight beats all others under `worse` ("a is worse than b").
fn strongest_of(weighted: &[f64; 5], worse: fn(&f64, &f64) -> bool) -> Element {
    let mut best = Element::Wood;
    for e in ALL_ELEMENTS {
        if worse(&weighted[best.index() as usize], &weighted[e.index() as usize]) {
            best = e;
        }
    }
    best
}
