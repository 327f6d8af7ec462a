//! Sexagenary (60-term) cycle arithmetic.
//!
//! A cycle index 0..59 identifies one stem-branch pair; index 0 is Jiazi.
//! Only pairs whose stem and branch share odd/even parity occur, so the
//! 10 x 12 product collapses to 60 valid combinations.

use serde::Serialize;

use crate::branch::Branch;
use crate::error::CycleError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// One stem-branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    /// Pair at a 0..59 cycle index.
    pub fn from_cycle_index(i: u8) -> Result<Self, CycleError> {
        if i >= CYCLE_LEN {
            return Err(CycleError::IndexOutOfRange(i));
        }
        Ok(Self {
            stem: Stem::from_index_wrapping(i as i64),
            branch: Branch::from_index_wrapping(i as i64),
        })
    }

    /// Pair at any signed index, wrapped into the cycle.
    pub fn from_index_wrapping(i: i64) -> Self {
        Self {
            stem: Stem::from_index_wrapping(i),
            branch: Branch::from_index_wrapping(i),
        }
    }

    /// 0..59 cycle index of this pair.
    ///
    /// Fails with `InvalidCombination` when stem parity and branch parity
    /// disagree; such pairs never occur in the cycle.
    pub fn cycle_index(&self) -> Result<u8, CycleError> {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        if s % 2 != b % 2 {
            return Err(CycleError::InvalidCombination {
                stem: self.stem,
                branch: self.branch,
            });
        }
        // CRT solution of n = s (mod 10), n = b (mod 12).
        Ok((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Walk `n` steps through the cycle (negative = backward).
    ///
    /// Only meaningful for valid pairs; an invalid pair propagates
    /// `InvalidCombination`.
    pub fn step(&self, n: i64) -> Result<Self, CycleError> {
        let i = self.cycle_index()? as i64;
        Ok(Self::from_index_wrapping(i + n))
    }

    /// Pinyin rendering, e.g. "JiaZi".
    pub fn name(&self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    /// Chinese rendering, e.g. "甲子".
    pub fn hanzi(&self) -> String {
        format!("{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_zero_is_jiazi() {
        let sb = StemBranch::from_cycle_index(0).unwrap();
        assert_eq!(sb.stem, Stem::Jia);
        assert_eq!(sb.branch, Branch::Zi);
    }

    #[test]
    fn index_59_is_guihai() {
        let sb = StemBranch::from_cycle_index(59).unwrap();
        assert_eq!(sb.stem, Stem::Gui);
        assert_eq!(sb.branch, Branch::Hai);
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(
            StemBranch::from_cycle_index(60),
            Err(CycleError::IndexOutOfRange(60))
        );
    }

    #[test]
    fn round_trip_all_60() {
        for i in 0..60u8 {
            let sb = StemBranch::from_cycle_index(i).unwrap();
            assert_eq!(sb.cycle_index().unwrap(), i, "index {i}");
        }
    }

    #[test]
    fn parity_mismatch_rejected() {
        // Jia (even) with Chou (odd) never occurs.
        let sb = StemBranch {
            stem: Stem::Jia,
            branch: Branch::Chou,
        };
        assert!(matches!(
            sb.cycle_index(),
            Err(CycleError::InvalidCombination { .. })
        ));
    }

    #[test]
    fn jihai_is_index_35() {
        // The 1900-01-01 day-pillar calibration value.
        let sb = StemBranch {
            stem: Stem::Ji,
            branch: Branch::Hai,
        };
        assert_eq!(sb.cycle_index().unwrap(), 35);
    }

    #[test]
    fn step_wraps() {
        let jiazi = StemBranch::from_cycle_index(0).unwrap();
        let back = jiazi.step(-1).unwrap();
        assert_eq!(back.cycle_index().unwrap(), 59);
        let fwd = back.step(2).unwrap();
        assert_eq!(fwd.cycle_index().unwrap(), 1);
    }

    #[test]
    fn wrapping_constructor_agrees() {
        for i in 0..60i64 {
            let a = StemBranch::from_cycle_index(i as u8).unwrap();
            let b = StemBranch::from_index_wrapping(i + 120);
            assert_eq!(a, b);
        }
    }
}
