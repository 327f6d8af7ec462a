//! The 24 solar terms and their year tables.
//!
//! Term instants use the simplified solar-longitude approximation: a fixed
//! per-term, per-century coefficient plus a 0.2422 day/year drift, with a
//! leap correction of one day per four years. The fractional day is kept as
//! an hour-of-day so boundary decisions near a cutover compare exact
//! instants, not calendar dates.
//!
//! A year's table runs Lichun of year Y through Dahan (which falls in
//! January of Y+1), so Dongzhi sits at index 21 and the 24 instants are
//! strictly increasing.

use serde::Serialize;

use mingli_cycle::Branch;
use mingli_time::LocalDateTime;

use crate::error::AlmanacError;

/// The 24 solar terms, ordered from Lichun (start of spring).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

/// All 24 terms in table order (Lichun=0 .. Dahan=23).
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

const TERM_NAMES: [&str; 24] = [
    "Lichun",
    "Yushui",
    "Jingzhe",
    "Chunfen",
    "Qingming",
    "Guyu",
    "Lixia",
    "Xiaoman",
    "Mangzhong",
    "Xiazhi",
    "Xiaoshu",
    "Dashu",
    "Liqiu",
    "Chushu",
    "Bailu",
    "Qiufen",
    "Hanlu",
    "Shuangjiang",
    "Lidong",
    "Xiaoxue",
    "Daxue",
    "Dongzhi",
    "Xiaohan",
    "Dahan",
];

const TERM_HANZI: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑",
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

/// Per-term approximation coefficients: 20th-century and 21st-century
/// columns of the base-day constant C.
const TERM_COEFF: [(f64, f64); 24] = [
    (4.6295, 3.87),    // Lichun
    (19.4599, 18.73),  // Yushui
    (6.3826, 5.63),    // Jingzhe
    (21.4155, 20.646), // Chunfen
    (5.59, 4.81),      // Qingming
    (20.888, 20.1),    // Guyu
    (6.318, 5.52),     // Lixia
    (21.86, 21.04),    // Xiaoman
    (6.5, 5.678),      // Mangzhong
    (22.2, 21.37),     // Xiazhi
    (7.928, 7.108),    // Xiaoshu
    (23.65, 22.83),    // Dashu
    (8.35, 7.5),       // Liqiu
    (23.95, 23.13),    // Chushu
    (8.44, 7.646),     // Bailu
    (23.822, 23.042),  // Qiufen
    (9.098, 8.318),    // Hanlu
    (24.218, 23.438),  // Shuangjiang
    (8.218, 7.438),    // Lidong
    (23.08, 22.36),    // Xiaoxue
    (7.9, 7.18),       // Daxue
    (22.6, 21.94),     // Dongzhi
    (6.11, 5.4055),    // Xiaohan
    (20.84, 20.12),    // Dahan
];

/// Annual drift of a term's calendar day.
const DAYS_PER_YEAR_DRIFT: f64 = 0.2422;

impl SolarTerm {
    /// Pinyin name.
    pub fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    /// Chinese name.
    pub fn hanzi(self) -> &'static str {
        TERM_HANZI[self.index() as usize]
    }

    /// 0-based table index (Lichun=0 .. Dahan=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term from its table index; `None` if out of range.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_TERMS.get(i as usize).copied()
    }

    /// Whether this is a jie term: one of the 12 terms that open a month.
    ///
    /// Even table indices are jie (Lichun, Jingzhe, Qingming, ...); odd
    /// indices are mid-month qi terms.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Whether the term belongs to the Yin half of the year.
    ///
    /// The 12 terms from the summer solstice (Xiazhi) through Daxue form
    /// the Yin-retreating half; the rest are Yang-retreating.
    pub const fn is_yin_half(self) -> bool {
        let i = self.index();
        i >= SolarTerm::Xiazhi.index() && i <= SolarTerm::Daxue.index()
    }

    /// 1-based lunar month opened by this term's jie (both terms of a month
    /// map to it): Lichun/Yushui -> 1, ... Xiaohan/Dahan -> 12.
    pub const fn lunar_month(self) -> u32 {
        (self.index() / 2) as u32 + 1
    }

    /// Month branch for this term's month; month 1 is Yin (Tiger).
    pub fn month_branch(self) -> Branch {
        Branch::from_index_wrapping(self.lunar_month() as i64 + 1)
    }
}

/// The computed instant a solar term takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarTermMoment {
    pub term: SolarTerm,
    pub at: LocalDateTime,
}

/// Yang-retreating or Yin-retreating half of the solar-term year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HalfYear {
    Yang,
    Yin,
}

/// The in-force term for a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentTerm {
    pub moment: SolarTermMoment,
    pub half: HalfYear,
}

/// The month-governing jie boundary for a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthBoundary {
    /// The jie term whose interval contains the instant.
    pub term: SolarTermMoment,
    /// Month branch (month 1 = Yin/Tiger).
    pub branch: Branch,
    /// 1-based solar-term month number.
    pub lunar_month: u32,
}

/// Supported almanac table years: one year below the charting range, so a
/// January instant in the first supported year can resolve against the
/// previous table, through the last charting year, whose table reaches into
/// the following January.
pub const ALMANAC_MIN_YEAR: i32 = mingli_time::MIN_YEAR - 1;
pub const ALMANAC_MAX_YEAR: i32 = mingli_time::MAX_YEAR;

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Instant of one term within the table of `set_year`.
fn term_moment(set_year: i32, term: SolarTerm) -> Result<SolarTermMoment, AlmanacError> {
    let i = term.index() as usize;
    // Xiaohan and Dahan of set Y fall in January of Y+1.
    let (cal_year, mut month) = if i >= 22 {
        (set_year + 1, 1)
    } else {
        (set_year, (i as u32) / 2 + 2)
    };

    let y = cal_year.rem_euclid(100);
    let (c20, c21) = TERM_COEFF[i];
    // Century column; years outside 1900-2099 reuse the nearest column.
    let c = if cal_year < 2000 { c20 } else { c21 };
    // January/February terms take the leap correction against year-1.
    let leap = if month <= 2 {
        (y - 1).div_euclid(4)
    } else {
        y.div_euclid(4)
    };
    let f = y as f64 * DAYS_PER_YEAR_DRIFT + c;
    let mut day = f.floor() as i32 - leap;
    let frac = f - f.floor();
    let hour = (frac * 24.0).floor() as u32;
    let minute = ((frac * 1440.0).floor() as u32) % 60;

    // Carry month overflow/underflow from the drift correction.
    while day > days_in_month(cal_year, month) as i32 {
        day -= days_in_month(cal_year, month) as i32;
        month += 1;
    }
    while day < 1 {
        month -= 1;
        day += days_in_month(cal_year, month) as i32;
    }

    let at = LocalDateTime::new(cal_year, month, day as u32, hour, minute)?;
    Ok(SolarTermMoment { term, at })
}

/// The 24 solar terms of a year, strictly increasing in time.
///
/// The set runs Lichun of `year` through Dahan in January of `year + 1`;
/// Dongzhi is index 21.
pub fn year_solar_terms(year: i32) -> Result<[SolarTermMoment; 24], AlmanacError> {
    if !(ALMANAC_MIN_YEAR..=ALMANAC_MAX_YEAR).contains(&year) {
        return Err(AlmanacError::YearOutOfRange(year));
    }
    let mut out = [SolarTermMoment {
        term: SolarTerm::Lichun,
        at: LocalDateTime::new(year, 2, 4, 0, 0)?,
    }; 24];
    for term in ALL_TERMS {
        out[term.index() as usize] = term_moment(year, term)?;
    }
    Ok(out)
}

/// Last term in `terms` that takes effect at or before `t`.
fn last_at_or_before(terms: &[SolarTermMoment], t: &LocalDateTime) -> Option<SolarTermMoment> {
    let key = t.minutes_since_epoch();
    terms
        .iter()
        .filter(|m| m.at.minutes_since_epoch() <= key)
        .last()
        .copied()
}

/// The solar term in force at a given instant.
///
/// Instants before the year's Lichun resolve against the previous year's
/// table (its Xiaohan/Dahan reach into this January).
pub fn term_at(t: &LocalDateTime) -> Result<CurrentTerm, AlmanacError> {
    let current = year_solar_terms(t.year)?;
    let moment = match last_at_or_before(&current, t) {
        Some(m) => m,
        None => {
            let previous = year_solar_terms(t.year - 1)?;
            last_at_or_before(&previous, t)
                .ok_or(AlmanacError::UnresolvedTerm("no term at or before instant"))?
        }
    };
    let half = if moment.term.is_yin_half() {
        HalfYear::Yin
    } else {
        HalfYear::Yang
    };
    Ok(CurrentTerm { moment, half })
}

/// The month-governing jie boundary for a given instant.
///
/// Resolves against exact term instants; a birth minutes before a cutover
/// belongs to the previous month even on the cutover's calendar day.
pub fn month_branch_for(t: &LocalDateTime) -> Result<MonthBoundary, AlmanacError> {
    let key = t.minutes_since_epoch();
    let jie_before = |set: [SolarTermMoment; 24]| {
        set.into_iter()
            .filter(|m| m.term.is_jie() && m.at.minutes_since_epoch() <= key)
            .last()
    };
    let moment = match jie_before(year_solar_terms(t.year)?) {
        Some(m) => m,
        None => jie_before(year_solar_terms(t.year - 1)?)
            .ok_or(AlmanacError::UnresolvedTerm("no jie at or before instant"))?,
    };
    Ok(MonthBoundary {
        term: moment,
        branch: moment.term.month_branch(),
        lunar_month: moment.term.lunar_month(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_terms_count() {
        assert_eq!(ALL_TERMS.len(), 24);
    }

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(SolarTerm::from_index(i as u8), Some(*t));
        }
    }

    #[test]
    fn dongzhi_is_index_21() {
        assert_eq!(SolarTerm::Dongzhi.index(), 21);
        assert_eq!(SolarTerm::Dongzhi.hanzi(), "冬至");
    }

    #[test]
    fn twelve_jie_terms() {
        let n = ALL_TERMS.iter().filter(|t| t.is_jie()).count();
        assert_eq!(n, 12);
    }

    #[test]
    fn twelve_yin_half_terms() {
        let n = ALL_TERMS.iter().filter(|t| t.is_yin_half()).count();
        assert_eq!(n, 12);
        assert!(SolarTerm::Xiazhi.is_yin_half());
        assert!(SolarTerm::Daxue.is_yin_half());
        assert!(!SolarTerm::Dongzhi.is_yin_half());
        assert!(!SolarTerm::Lichun.is_yin_half());
    }

    #[test]
    fn month_branches() {
        use mingli_cycle::Branch;
        assert_eq!(SolarTerm::Lichun.month_branch(), Branch::Yin);
        assert_eq!(SolarTerm::Yushui.month_branch(), Branch::Yin);
        assert_eq!(SolarTerm::Jingzhe.month_branch(), Branch::Mao);
        assert_eq!(SolarTerm::Xiaohan.month_branch(), Branch::Chou);
    }

    #[test]
    fn lichun_2000_feb_4() {
        let set = year_solar_terms(2000).unwrap();
        let lichun = set[0];
        assert_eq!(lichun.term, SolarTerm::Lichun);
        assert_eq!(lichun.at.month, 2);
        assert_eq!(lichun.at.day, 4);
    }

    #[test]
    fn xiaohan_lands_in_next_january() {
        let set = year_solar_terms(1999).unwrap();
        let xiaohan = set[22];
        assert_eq!(xiaohan.term, SolarTerm::Xiaohan);
        assert_eq!(xiaohan.at.year, 2000);
        assert_eq!(xiaohan.at.month, 1);
    }

    #[test]
    fn dongzhi_in_december() {
        for year in [1950, 1984, 2000, 2024] {
            let set = year_solar_terms(year).unwrap();
            assert_eq!(set[21].term, SolarTerm::Dongzhi);
            assert_eq!(set[21].at.month, 12, "year {year}");
        }
    }

    #[test]
    fn strictly_increasing() {
        for year in [1900, 1950, 1990, 2024, 2080] {
            let set = year_solar_terms(year).unwrap();
            for w in set.windows(2) {
                assert!(
                    w[0].at.minutes_since_epoch() < w[1].at.minutes_since_epoch(),
                    "year {year}: {:?} !< {:?}",
                    w[0],
                    w[1]
                );
            }
        }
    }

    #[test]
    fn year_out_of_range() {
        assert!(matches!(
            year_solar_terms(1798),
            Err(AlmanacError::YearOutOfRange(1798))
        ));
        assert!(matches!(
            year_solar_terms(2101),
            Err(AlmanacError::YearOutOfRange(2101))
        ));
    }

    #[test]
    fn tables_cover_both_charting_edges() {
        // 1799 backs January instants of 1800; 2100's table spills into
        // January 2101.
        assert!(year_solar_terms(1799).is_ok());
        let last = year_solar_terms(2100).unwrap();
        assert_eq!(last[23].term, SolarTerm::Dahan);
        assert_eq!(last[23].at.year, 2101);
        assert_eq!(last[23].at.month, 1);
    }

    #[test]
    fn term_at_midsummer() {
        let t = LocalDateTime::new(1990, 7, 1, 12, 0).unwrap();
        let cur = term_at(&t).unwrap();
        assert_eq!(cur.half, HalfYear::Yin);
    }

    #[test]
    fn term_at_early_january_uses_previous_set() {
        // Jan 2 precedes the year's own Lichun; the in-force term comes
        // from the previous year's table (Dongzhi or Xiaohan).
        let t = LocalDateTime::new(1990, 1, 2, 0, 0).unwrap();
        let cur = term_at(&t).unwrap();
        assert!(matches!(
            cur.moment.term,
            SolarTerm::Dongzhi | SolarTerm::Xiaohan
        ));
        assert_eq!(cur.half, HalfYear::Yang);
    }

    #[test]
    fn month_branch_mid_january_is_chou() {
        let t = LocalDateTime::new(1990, 1, 15, 14, 30).unwrap();
        let mb = month_branch_for(&t).unwrap();
        assert_eq!(mb.branch, mingli_cycle::Branch::Chou);
        assert_eq!(mb.lunar_month, 12);
    }

    #[test]
    fn month_branch_flips_at_exact_lichun_instant() {
        let set = year_solar_terms(1990).unwrap();
        let lichun = set[0].at;
        let before = LocalDateTime::new(
            lichun.year,
            lichun.month,
            lichun.day,
            lichun.hour,
            lichun.minute,
        )
        .unwrap();
        let mb_at = month_branch_for(&before).unwrap();
        assert_eq!(mb_at.branch, mingli_cycle::Branch::Yin);

        // One minute earlier still belongs to the Chou month.
        let earlier = if lichun.minute > 0 {
            LocalDateTime::new(
                lichun.year,
                lichun.month,
                lichun.day,
                lichun.hour,
                lichun.minute - 1,
            )
            .unwrap()
        } else {
            LocalDateTime::new(lichun.year, lichun.month, lichun.day - 1, 23, 59).unwrap()
        };
        let mb_before = month_branch_for(&earlier).unwrap();
        assert_eq!(mb_before.branch, mingli_cycle::Branch::Chou);
    }
}
