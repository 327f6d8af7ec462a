//! Calendar date/time primitives for the fate-calculation engines.
//!
//! This crate provides:
//! - `LocalDateTime`, the validated local birth-instant type
//! - day-count arithmetic against the 1900-01-01 calibration epoch
//!
//! All engines consume local wall-clock time; timezone and coordinate
//! resolution are the caller's concern.

pub mod error;
pub mod local_time;

pub use error::TimeError;
pub use local_time::{EPOCH_YEAR, LocalDateTime, MAX_YEAR, MIN_YEAR};
