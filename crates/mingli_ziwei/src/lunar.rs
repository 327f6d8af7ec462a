//! Simplified lunar birth representation.
//!
//! The Gregorian month and day are carried over as the lunar month and day
//! directly. This preserves the behavior of the original placement tables,
//! which are keyed 1..=30; a real solar-to-lunar conversion can replace
//! `from_gregorian` without touching anything downstream.

use serde::Serialize;

use mingli_cycle::Branch;
use mingli_time::LocalDateTime;

/// Lunar-calendar view of a birth instant (simplified).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunarInfo {
    /// Lunar month 1..=12.
    pub month: u32,
    /// Lunar day 1..=30.
    pub day: u32,
    /// Branch of the birth hour.
    pub hour_branch: Branch,
}

impl LunarInfo {
    /// Build from a Gregorian instant, month/day taken as-is.
    ///
    /// Day 31 clamps to 30 since the placement tables are 30-keyed.
    pub fn from_gregorian(t: &LocalDateTime) -> Self {
        Self {
            month: t.month,
            day: t.day.min(30),
            hour_branch: Branch::from_hour(t.hour),
        }
    }
}
