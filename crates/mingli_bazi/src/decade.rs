//! Decade-luck (dayun) sequence.
//!
//! Eight ten-year periods stepping the month pillar through the sexagenary
//! cycle. Direction is forward for (male AND Yang year stem) or
//! (female AND Yin year stem), backward otherwise. This rule differs from
//! the Purple-Star major-period direction on purpose; the two systems keep
//! their traditional forms.

use serde::Serialize;

use mingli_cycle::{Polarity, StemBranch};

use crate::error::BaziError;
use crate::pillar::BaziChart;

/// Number of decade periods in a sequence.
pub const DECADE_COUNT: usize = 8;

/// Chart-holder gender, as used by period-direction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// One ten-year luck period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadePeriod {
    pub pillar: StemBranch,
    /// Age at which the period begins, inclusive.
    pub start_age: u32,
    /// Age at which the period ends, inclusive.
    pub end_age: u32,
    /// 1-based position in the sequence.
    pub order: u8,
}

/// Whether the decade sequence walks the cycle forward.
pub fn is_forward(chart: &BaziChart, gender: Gender) -> bool {
    let yang_year = chart.year.stem().polarity() == Polarity::Yang;
    matches!(
        (gender, yang_year),
        (Gender::Male, true) | (Gender::Female, false)
    )
}

/// Decade-luck sequence from the month pillar.
pub fn decade_luck(
    chart: &BaziChart,
    gender: Gender,
    start_age: u32,
) -> Result<[DecadePeriod; DECADE_COUNT], BaziError> {
    let step = if is_forward(chart, gender) { 1 } else { -1 };
    let mut out = [DecadePeriod {
        pillar: chart.month.stem_branch,
        start_age,
        end_age: start_age + 9,
        order: 1,
    }; DECADE_COUNT];
    for (k, period) in out.iter_mut().enumerate() {
        let n = (k as i64 + 1) * step;
        period.pillar = chart.month.stem_branch.step(n)?;
        period.start_age = start_age + 10 * k as u32;
        period.end_age = period.start_age + 9;
        period.order = k as u8 + 1;
    }
    Ok(out)
}
