//! Purple-Star Astrology (Ziwei Doushu) chart engine.
//!
//! This crate provides:
//! - Life/Body Palace derivation from the lunar view of a birth instant
//! - the Five-Element Category (bureau) table
//! - table-driven placement of the 14 main stars and the six lucky and six
//!   unlucky stars across the twelve palaces
//! - the Four Transformations and the major-period sequence
//!
//! Builds on the Four Pillars engine; all placements are deterministic
//! functions of the birth instant and gender.

pub mod chart;
pub mod error;
pub mod lunar;
pub mod palace;
pub mod stars;

pub use chart::{
    MAJOR_PERIOD_COUNT, MajorPeriod, ZiweiChart, body_palace_index, chart_from_bazi,
    compute_ziwei_chart, life_palace_index, major_periods,
};
pub use error::ZiweiError;
pub use lunar::LunarInfo;
pub use palace::{ALL_PALACE_NAMES, Palace, PalaceName, WuxingJu};
pub use stars::{
    ALL_MAIN_STARS, FourTransformations, LuckyStar, MainStar, TransformStar, UnluckyStar,
    four_transformations, lucky_star_positions, main_star_positions, tianfu_position,
    unlucky_star_positions, ziwei_position,
};
