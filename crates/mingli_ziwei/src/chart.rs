//! Ziwei chart assembly.
//!
//! Builds on a computed BaziChart: the lunar view fixes the Life and Body
//! Palaces, the Life Palace branch fixes the bureau, and the bureau plus
//! lunar day drive the table placements.

use serde::Serialize;

use mingli_bazi::{BaziChart, Gender};
use mingli_cycle::Branch;
use mingli_time::LocalDateTime;

use crate::error::ZiweiError;
use crate::lunar::LunarInfo;
use crate::palace::{ALL_PALACE_NAMES, Palace, WuxingJu};
use crate::stars::{
    FourTransformations, four_transformations, lucky_star_positions, main_star_positions,
    unlucky_star_positions,
};

/// Number of major periods in a sequence.
pub const MAJOR_PERIOD_COUNT: usize = 12;

/// One ten-year major period bound to a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MajorPeriod {
    pub palace_branch: Branch,
    pub start_age: u32,
    pub end_age: u32,
    /// 1-based position in the sequence.
    pub order: u8,
}

/// A full Purple-Star chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZiweiChart {
    pub bazi: BaziChart,
    pub lunar: LunarInfo,
    /// Life Palace branch index 0..=11.
    pub ming_gong: u8,
    /// Body Palace branch index 0..=11.
    pub shen_gong: u8,
    pub ju: WuxingJu,
    /// Palaces indexed by branch (0 = Zi .. 11 = Hai).
    pub palaces: [Palace; 12],
    pub transformations: FourTransformations,
    pub major_periods: [MajorPeriod; MAJOR_PERIOD_COUNT],
}

/// Life Palace branch index: counted off the Tiger palace by month,
/// backed off by hour.
pub fn life_palace_index(lunar_month: u32, hour_branch: Branch) -> u8 {
    (2 + lunar_month as i64 - hour_branch.index() as i64).rem_euclid(12) as u8
}

/// Body Palace branch index: counted off by month and hour together.
pub fn body_palace_index(lunar_month: u32, hour_branch: Branch) -> u8 {
    ((11 + lunar_month as i64 + hour_branch.index() as i64) % 12) as u8
}

/// Major-period sequence: twelve ten-year periods starting at the bureau
/// age, palace-stepped from the Life Palace. Male forward, female backward;
/// this rule is simpler than the BaZi decade direction and stays that way.
pub fn major_periods(
    ming_gong: u8,
    ju: WuxingJu,
    gender: Gender,
) -> [MajorPeriod; MAJOR_PERIOD_COUNT] {
    let step: i64 = match gender {
        Gender::Male => 1,
        Gender::Female => -1,
    };
    let start = ju.bureau() as u32;
    let mut out = [MajorPeriod {
        palace_branch: Branch::Zi,
        start_age: 0,
        end_age: 0,
        order: 0,
    }; MAJOR_PERIOD_COUNT];
    for (k, period) in out.iter_mut().enumerate() {
        let idx = (ming_gong as i64 + step * k as i64).rem_euclid(12);
        period.palace_branch = Branch::from_index_wrapping(idx);
        period.start_age = start + 10 * k as u32;
        period.end_age = period.start_age + 9;
        period.order = k as u8 + 1;
    }
    out
}

/// Compute the full Ziwei chart for a birth instant.
pub fn compute_ziwei_chart(t: &LocalDateTime, gender: Gender) -> Result<ZiweiChart, ZiweiError> {
    let bazi = mingli_bazi::compute_chart(t)?;
    chart_from_bazi(bazi, gender)
}

/// Assemble a Ziwei chart from an already computed BaziChart.
pub fn chart_from_bazi(bazi: BaziChart, gender: Gender) -> Result<ZiweiChart, ZiweiError> {
    let lunar = LunarInfo::from_gregorian(&bazi.birth);
    let ming_gong = life_palace_index(lunar.month, lunar.hour_branch);
    let shen_gong = body_palace_index(lunar.month, lunar.hour_branch);
    let ju = WuxingJu::from_life_palace(Branch::from_index_wrapping(ming_gong as i64));

    let year_stem = bazi.year.stem();
    let year_branch = bazi.year.branch();

    let mut palaces: [Palace; 12] = std::array::from_fn(|i| {
        // Palace names trail the Life Palace through decreasing branches.
        let name_idx = (ming_gong as i64 - i as i64).rem_euclid(12) as usize;
        Palace {
            branch: Branch::from_index_wrapping(i as i64),
            name: ALL_PALACE_NAMES[name_idx],
            main_stars: Vec::new(),
            lucky_stars: Vec::new(),
            unlucky_stars: Vec::new(),
            is_body_palace: i as u8 == shen_gong,
        }
    });

    for (star, pos) in main_star_positions(ju.bureau(), lunar.day) {
        palaces[pos as usize].main_stars.push(star);
    }
    for (star, pos) in lucky_star_positions(year_stem, lunar.month, lunar.hour_branch) {
        palaces[pos as usize].lucky_stars.push(star);
    }
    for (star, pos) in unlucky_star_positions(year_stem, year_branch, lunar.hour_branch) {
        palaces[pos as usize].unlucky_stars.push(star);
    }

    Ok(ZiweiChart {
        lunar,
        ming_gong,
        shen_gong,
        ju,
        transformations: four_transformations(year_stem),
        major_periods: major_periods(ming_gong, ju, gender),
        palaces,
        bazi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> LocalDateTime {
        LocalDateTime::new(year, month, day, hour, minute).unwrap()
    }

    #[test]
    fn life_palace_formula() {
        // Month 1, Zi hour: (2 + 1 - 0) % 12 = 3.
        assert_eq!(life_palace_index(1, Branch::Zi), 3);
        // Month 12, Hai hour: (2 + 12 - 11) % 12 = 3.
        assert_eq!(life_palace_index(12, Branch::Hai), 3);
        // Underflow wraps: month 1, Wu hour (6): (2 + 1 - 6) = -3 -> 9.
        assert_eq!(life_palace_index(1, Branch::Wu), 9);
    }

    #[test]
    fn body_palace_formula() {
        assert_eq!(body_palace_index(1, Branch::Zi), 0);
        assert_eq!(body_palace_index(12, Branch::Hai), 10);
    }

    #[test]
    fn fourteen_stars_across_palaces() {
        let chart = compute_ziwei_chart(&dt(1990, 1, 15, 14, 30), Gender::Male).unwrap();
        let total: usize = chart.palaces.iter().map(|p| p.main_stars.len()).sum();
        assert_eq!(total, 14);
        for p in &chart.palaces {
            assert!(p.main_stars.len() <= 4);
        }
    }

    #[test]
    fn life_palace_in_range_and_named_ming() {
        let chart = compute_ziwei_chart(&dt(1990, 1, 15, 14, 30), Gender::Male).unwrap();
        assert!(chart.ming_gong < 12);
        let ming = &chart.palaces[chart.ming_gong as usize];
        assert_eq!(ming.name, crate::palace::PalaceName::Ming);
    }

    #[test]
    fn exactly_one_body_palace() {
        let chart = compute_ziwei_chart(&dt(1988, 8, 8, 0, 18), Gender::Female).unwrap();
        let n = chart.palaces.iter().filter(|p| p.is_body_palace).count();
        assert_eq!(n, 1);
    }

    #[test]
    fn major_periods_direction() {
        let male = major_periods(3, WuxingJu::Wood3, Gender::Male);
        let female = major_periods(3, WuxingJu::Wood3, Gender::Female);
        assert_eq!(male[0].palace_branch, Branch::Mao);
        assert_eq!(male[1].palace_branch, Branch::Chen);
        assert_eq!(female[1].palace_branch, Branch::Yin);
        assert_eq!(male[0].start_age, 3);
        assert_eq!(male[11].end_age, 3 + 119);
    }

    #[test]
    fn twelve_palace_names_all_present() {
        use std::collections::HashSet;
        let chart = compute_ziwei_chart(&dt(1976, 3, 17, 23, 30), Gender::Male).unwrap();
        let names: HashSet<_> = chart.palaces.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), 12);
    }
}
