//! Error types for Four Pillars calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use mingli_almanac::AlmanacError;
use mingli_cycle::CycleError;
use mingli_time::TimeError;

/// Errors from BaZi chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaziError {
    /// Error from date/time validation.
    Time(TimeError),
    /// Error from sexagenary-cycle arithmetic.
    Cycle(CycleError),
    /// Error from solar-term resolution.
    Almanac(AlmanacError),
    /// Input outside the supported range.
    InvalidInput(&'static str),
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Cycle(e) => write!(f, "cycle error: {e}"),
            Self::Almanac(e) => write!(f, "almanac error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for BaziError {}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<CycleError> for BaziError {
    fn from(e: CycleError) -> Self {
        Self::Cycle(e)
    }
}

impl From<AlmanacError> for BaziError {
    fn from(e: AlmanacError) -> Self {
        Self::Almanac(e)
    }
}
