//! Solar-term almanac and day-pillar overrides.
//!
//! This crate provides:
//! - the 24 solar terms per year from the simplified longitude
//!   approximation, with exact-instant boundary resolution
//! - the month-branch determination that fixes BaZi month pillars
//! - the hand-curated perpetual-calendar override table for day pillars
//!
//! Term instants are approximations good to the hour scale, which is what
//! the month-boundary decisions require.

pub mod error;
pub mod solar_terms;
pub mod wannianli;

pub use error::AlmanacError;
pub use solar_terms::{
    ALL_TERMS, ALMANAC_MAX_YEAR, ALMANAC_MIN_YEAR, CurrentTerm, HalfYear, MonthBoundary,
    SolarTerm, SolarTermMoment, month_branch_for, term_at, year_solar_terms,
};
pub use wannianli::lookup_day_pillar;
