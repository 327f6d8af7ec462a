//! Error types for almanac calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use mingli_time::TimeError;

/// Errors from solar-term computation and boundary resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlmanacError {
    /// No in-force solar term could be resolved. Indicates corrupt table
    /// data; an internal-consistency failure, never retryable.
    UnresolvedTerm(&'static str),
    /// Year outside the supported almanac range.
    YearOutOfRange(i32),
    /// Error from date/time construction.
    Time(TimeError),
}

impl Display for AlmanacError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedTerm(msg) => write!(f, "unresolved solar term: {msg}"),
            Self::YearOutOfRange(y) => write!(f, "year out of almanac range: {y}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for AlmanacError {}

impl From<TimeError> for AlmanacError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
