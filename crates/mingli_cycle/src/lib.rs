//! Stems, branches, and sexagenary-cycle arithmetic.
//!
//! This crate provides:
//! - the 10 Heavenly Stems and 12 Earthly Branches with element, polarity,
//!   and concealed-stem tables
//! - the five elements and their generate/control cycle
//! - 60-term cycle index arithmetic with parity validation
//!
//! All tables are fixed constants of the traditional method.

pub mod branch;
pub mod cycle;
pub mod element;
pub mod error;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch, HIDDEN_STEMS, HiddenStem};
pub use cycle::{CYCLE_LEN, StemBranch};
pub use element::{ALL_ELEMENTS, Element, ElementRelation};
pub use error::CycleError;
pub use stem::{ALL_STEMS, Polarity, Stem};
