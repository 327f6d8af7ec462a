//! Error types for sexagenary-cycle arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from stem/branch cycle lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CycleError {
    /// Stem and branch parity disagree; the pair never occurs in the
    /// 60-term cycle.
    InvalidCombination { stem: Stem, branch: Branch },
    /// Cycle index outside 0..60.
    IndexOutOfRange(u8),
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCombination { stem, branch } => {
                write!(
                    f,
                    "invalid stem-branch combination: {}{}",
                    stem.name(),
                    branch.name()
                )
            }
            Self::IndexOutOfRange(i) => write!(f, "cycle index out of range: {i}"),
        }
    }
}

impl Error for CycleError {}
