//! Local civil date/time with minute precision.
//!
//! Provides `LocalDateTime`, the canonical birth-instant representation used
//! throughout the engines. Charts are derived from local wall-clock time;
//! timezone resolution happens upstream of the core.

use chrono::{Datelike, NaiveDate, Timelike};
use serde::Serialize;

use crate::error::TimeError;

/// Day-pillar calibration epoch: 1900-01-01.
pub const EPOCH_YEAR: i32 = 1900;

/// Earliest supported calendar year.
pub const MIN_YEAR: i32 = 1800;

/// Latest supported calendar year.
pub const MAX_YEAR: i32 = 2100;

/// Construction slack of one year on each side of the supported range.
/// Instants derived from a boundary year (a year's solar-term table spills
/// into the following January) must still construct.
const YEAR_SLACK: i32 = 1;

/// Local civil date with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalDateTime {
    /// Construct a validated local date/time.
    ///
    /// Guards the calendar validity of the date (including leap days) and
    /// the clock ranges hour 0-23, minute 0-59. Years outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`] plus one year of slack on each side are
    /// rejected.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        if !((MIN_YEAR - YEAR_SLACK)..=(MAX_YEAR + YEAR_SLACK)).contains(&year) {
            return Err(TimeError::InvalidDate("year outside supported range"));
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDate("no such calendar day"));
        }
        if hour > 23 {
            return Err(TimeError::InvalidTime("hour outside 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidTime("minute outside 0-59"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// The date component as a `chrono::NaiveDate`.
    ///
    /// Infallible after construction; `new` already proved the date valid.
    pub fn naive_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Signed day count from the 1900-01-01 calibration epoch.
    pub fn days_since_epoch(&self) -> i64 {
        let epoch = NaiveDate::from_ymd_opt(EPOCH_YEAR, 1, 1).unwrap_or(NaiveDate::MIN);
        (self.naive_date() - epoch).num_days()
    }

    /// The calendar day after this one, time-of-day preserved.
    ///
    /// Used by the late-Zi hour rule, which borrows the next day's day stem.
    pub fn next_day(&self) -> Self {
        let next = self.naive_date().succ_opt().unwrap_or(NaiveDate::MAX);
        Self {
            year: next.year(),
            month: next.month(),
            day: next.day(),
            hour: self.hour,
            minute: self.minute,
        }
    }

    /// Shift by a signed number of minutes, carrying across midnight.
    ///
    /// Used for the true-solar-time correction, where a longitude east or
    /// west of the standard meridian moves the clock a few minutes.
    pub fn add_minutes(&self, delta: i64) -> Result<Self, TimeError> {
        let total = self.minutes_since_epoch() + delta;
        let days = total.div_euclid(1440);
        let clock = total.rem_euclid(1440) as u32;
        let epoch = NaiveDate::from_ymd_opt(EPOCH_YEAR, 1, 1).unwrap_or(NaiveDate::MIN);
        let date = epoch
            .checked_add_signed(chrono::Duration::days(days))
            .ok_or(TimeError::InvalidDate("shifted date out of range"))?;
        Self::new(date.year(), date.month(), date.day(), clock / 60, clock % 60)
    }

    /// The current local wall-clock instant, truncated to the minute.
    pub fn now() -> Result<Self, TimeError> {
        let t = chrono::Local::now().naive_local();
        Self::new(t.year(), t.month(), t.day(), t.hour(), t.minute())
    }

    /// Minutes elapsed since local midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Ordering key: minutes from the epoch, for exact boundary comparison.
    pub fn minutes_since_epoch(&self) -> i64 {
        self.days_since_epoch() * 1440 + self.minute_of_day() as i64
    }
}

impl std::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
