//! Error types for Purple-Star chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use mingli_bazi::BaziError;

/// Errors from Ziwei chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ZiweiError {
    /// Error from the underlying Four Pillars derivation.
    Bazi(BaziError),
}

impl Display for ZiweiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bazi(e) => write!(f, "bazi error: {e}"),
        }
    }
}

impl Error for ZiweiError {}

impl From<BaziError> for ZiweiError {
    fn from(e: BaziError) -> Self {
        Self::Bazi(e)
    }
}
