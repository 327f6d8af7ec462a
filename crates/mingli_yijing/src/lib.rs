//! Yijing hexagram engine.
//!
//! This crate provides:
//! - the eight trigrams in Fuxi order, with elements and line patterns
//! - hexagrams with King Wen numbering and the inner/outer relation
//! - derived hexagrams (changed, mutual, opposite, reversed)
//! - five casting methods over a pluggable random source

pub mod cast;
pub mod error;
pub mod hexagram;
pub mod random;
pub mod transform;
pub mod trigram;

pub use cast::{
    CastMethod, CastResult, QUESTION_MAX_CHARS, QUESTION_MIN_CHARS, cast_by_coins, cast_by_number,
    cast_by_plum_blossom, cast_by_time, cast_personalized,
};
pub use error::YijingError;
pub use hexagram::{Hexagram, TrigramRelation, all_hexagrams};
pub use random::{EntropyPool, QualityReport, RandomSource, SeededSource};
pub use transform::{changed, mutual, opposite, reversed};
pub use trigram::{ALL_TRIGRAMS, Trigram};
