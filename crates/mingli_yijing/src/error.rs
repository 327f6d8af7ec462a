//! Error types for hexagram casting.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from trigram/hexagram construction and casting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum YijingError {
    /// Trigram number outside 1..=8.
    InvalidTrigram(u8),
    /// Line position outside 1..=6.
    InvalidLine(u8),
    /// Question length outside the accepted 2..=200 characters.
    QuestionLength(usize),
}

impl Display for YijingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTrigram(n) => write!(f, "invalid trigram number: {n}"),
            Self::InvalidLine(n) => write!(f, "invalid line position: {n}"),
            Self::QuestionLength(n) => write!(f, "question length out of range: {n}"),
        }
    }
}

impl Error for YijingError {}
