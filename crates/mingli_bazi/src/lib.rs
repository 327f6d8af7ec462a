//! Four Pillars (BaZi) calculation engine.
//!
//! This crate provides:
//! - year/month/day/hour pillar derivation with solar-term month boundaries
//!   and the early/late Zi midnight rule
//! - Ten Gods relations between the day master and any stem
//! - five-element strength scoring with concealed-stem contributions
//! - the decade-luck (dayun) sequence
//!
//! All computation is pure and deterministic over the birth instant.

pub mod decade;
pub mod engine;
pub mod error;
pub mod pillar;
pub mod strength;
pub mod ten_gods;

pub use decade::{DECADE_COUNT, DecadePeriod, Gender, decade_luck, is_forward};
pub use engine::{EPOCH_DAY_INDEX, compute_chart, day_pillar, hour_pillar, month_pillar, year_pillar};
pub use error::BaziError;
pub use pillar::{BaziChart, Pillar, ZishiType};
pub use strength::{
    BRANCH_POSITION_WEIGHTS, ElementStrength, HIDDEN_STEM_DAMPING, STEM_POSITION_WEIGHTS,
    element_strength,
};
pub use ten_gods::{TenGod, ten_god};
