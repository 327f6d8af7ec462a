//! Four Pillars derivation.
//!
//! Year pillars anchor 1984 as Jiazi. Month pillars follow the solar-term
//! month, cut at exact term instants, with the month stem from the five-
//! tigers rule. Day pillars prefer the perpetual-calendar override table
//! and fall back to the 1900-01-01 Jihai calibration formula. Hour pillars
//! follow the five-rats rule with the early/late Zi disambiguation.

use mingli_almanac::{MonthBoundary, lookup_day_pillar, month_branch_for, year_solar_terms};
use mingli_cycle::{Branch, Stem, StemBranch};
use mingli_time::LocalDateTime;

use crate::error::BaziError;
use crate::pillar::{BaziChart, Pillar, ZishiType};

/// Sexagenary index of the 1900-01-01 calibration day (Jihai).
pub const EPOCH_DAY_INDEX: i64 = 35;

/// Year pillar by calendar year; 1984 is Jiazi.
///
/// Calendar-year based deliberately: callers needing term-exact year
/// boundaries must cross-check against Lichun.
pub fn year_pillar(year: i32) -> Pillar {
    let offset = (year - 4) as i64;
    Pillar::new(StemBranch {
        stem: Stem::from_index_wrapping(offset),
        branch: Branch::from_index_wrapping(offset),
    })
}

/// Solar year a birth instant belongs to: the calendar year, stepped back
/// by one when the instant precedes that year's Lichun.
fn solar_year(t: &LocalDateTime) -> Result<i32, BaziError> {
    let lichun = year_solar_terms(t.year)?[0].at;
    if t.minutes_since_epoch() < lichun.minutes_since_epoch() {
        Ok(t.year - 1)
    } else {
        Ok(t.year)
    }
}

/// Month pillar from the solar-term month boundary.
///
/// The month branch comes from the governing jie term (exact instants, so a
/// birth minutes before a cutover stays in the previous month); the month
/// stem is `(year_stem * 2 + month_branch) mod 10` against the solar year's
/// stem.
pub fn month_pillar(t: &LocalDateTime) -> Result<(Pillar, MonthBoundary), BaziError> {
    let boundary = month_branch_for(t)?;
    let year_stem = year_pillar(solar_year(t)?).stem();
    let stem_idx = (year_stem.index() as i64 * 2 + boundary.branch.index() as i64) % 10;
    let pillar = Pillar::new(StemBranch {
        stem: Stem::from_index_wrapping(stem_idx),
        branch: boundary.branch,
    });
    Ok((pillar, boundary))
}

/// Day pillar: perpetual-calendar override first, else the linear formula
/// from the 1900-01-01 Jihai calibration.
pub fn day_pillar(t: &LocalDateTime) -> Pillar {
    let sb = lookup_day_pillar(t.year, t.month, t.day).unwrap_or_else(|| {
        StemBranch::from_index_wrapping(EPOCH_DAY_INDEX + t.days_since_epoch())
    });
    Pillar::new(sb)
}

/// Hour pillar with the early/late Zi rule.
///
/// Returns the pillar and the Zi classification (None outside 23:00-00:59).
/// For late Zi the hour stem derives from the NEXT day's day stem; the
/// caller's day pillar is unaffected.
pub fn hour_pillar(t: &LocalDateTime) -> (Pillar, Option<ZishiType>) {
    let branch = Branch::from_hour(t.hour);
    let (stem_day, zishi) = match t.hour {
        23 => (day_pillar(&t.next_day()), Some(ZishiType::Late)),
        0 => (day_pillar(t), Some(ZishiType::Early)),
        _ => (day_pillar(t), None),
    };
    let stem_idx = stem_day.stem().index() as i64 * 2 + branch.index() as i64;
    let pillar = Pillar::new(StemBranch {
        stem: Stem::from_index_wrapping(stem_idx),
        branch,
    });
    (pillar, zishi)
}

/// Compute the full four-pillar chart for a birth instant.
pub fn compute_chart(t: &LocalDateTime) -> Result<BaziChart, BaziError> {
    let year = year_pillar(t.year);
    let (month, boundary) = month_pillar(t)?;
    let day = day_pillar(t);
    let (hour, zishi) = hour_pillar(t);
    Ok(BaziChart {
        birth: *t,
        year,
        month,
        day,
        hour,
        zishi,
        day_master: day.stem(),
        lunar_month: boundary.lunar_month,
    })
}
