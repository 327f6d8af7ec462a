//! Error types for calendar date/time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date/time construction and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date is invalid or outside the supported range.
    InvalidDate(&'static str),
    /// Clock time component out of range.
    InvalidTime(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
        }
    }
}

impl Error for TimeError {}
