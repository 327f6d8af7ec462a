//! Facade-level error type wrapping the per-engine errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

use mingli_almanac::AlmanacError;
use mingli_bazi::BaziError;
use mingli_time::TimeError;
use mingli_yijing::YijingError;
use mingli_ziwei::ZiweiError;

/// Any failure surfaced by the facade.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MingliError {
    Time(TimeError),
    Almanac(AlmanacError),
    Bazi(BaziError),
    Ziwei(ZiweiError),
    Yijing(YijingError),
    /// Malformed or missing request fields.
    InvalidInput(&'static str),
}

impl Display for MingliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time: {e}"),
            Self::Almanac(e) => write!(f, "almanac: {e}"),
            Self::Bazi(e) => write!(f, "bazi: {e}"),
            Self::Ziwei(e) => write!(f, "ziwei: {e}"),
            Self::Yijing(e) => write!(f, "yijing: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for MingliError {}

impl From<TimeError> for MingliError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<AlmanacError> for MingliError {
    fn from(e: AlmanacError) -> Self {
        Self::Almanac(e)
    }
}

impl From<BaziError> for MingliError {
    fn from(e: BaziError) -> Self {
        Self::Bazi(e)
    }
}

impl From<ZiweiError> for MingliError {
    fn from(e: ZiweiError) -> Self {
        Self::Ziwei(e)
    }
}

impl From<YijingError> for MingliError {
    fn from(e: YijingError) -> Self {
        Self::Yijing(e)
    }
}
