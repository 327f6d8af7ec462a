//! Star enumerations and placement rules.
//!
//! Placement is a table protocol: the Purple Star anchors by bureau number
//! and lunar day, Tianfu mirrors it across the Yin-Shen axis, and every
//! other star sits at a fixed offset from one of those anchors or follows
//! its own small keyed rule. Nothing here is free calculation.

use serde::Serialize;

use mingli_cycle::{Branch, Stem};

/// The 14 main stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MainStar {
    Ziwei,
    Tianji,
    Taiyang,
    Wuqu,
    Tiantong,
    Lianzhen,
    Tianfu,
    Taiyin,
    Tanlang,
    Jumen,
    Tianxiang,
    Tianliang,
    Qisha,
    Pojun,
}

/// All 14 main stars.
pub const ALL_MAIN_STARS: [MainStar; 14] = [
    MainStar::Ziwei,
    MainStar::Tianji,
    MainStar::Taiyang,
    MainStar::Wuqu,
    MainStar::Tiantong,
    MainStar::Lianzhen,
    MainStar::Tianfu,
    MainStar::Taiyin,
    MainStar::Tanlang,
    MainStar::Jumen,
    MainStar::Tianxiang,
    MainStar::Tianliang,
    MainStar::Qisha,
    MainStar::Pojun,
];

impl MainStar {
    /// Chinese name.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Ziwei => "紫微",
            Self::Tianji => "天机",
            Self::Taiyang => "太阳",
            Self::Wuqu => "武曲",
            Self::Tiantong => "天同",
            Self::Lianzhen => "廉贞",
            Self::Tianfu => "天府",
            Self::Taiyin => "太阴",
            Self::Tanlang => "贪狼",
            Self::Jumen => "巨门",
            Self::Tianxiang => "天相",
            Self::Tianliang => "天梁",
            Self::Qisha => "七杀",
            Self::Pojun => "破军",
        }
    }
}

/// The six lucky stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LuckyStar {
    Wenchang,
    Wenqu,
    Zuofu,
    Youbi,
    Tiankui,
    Tianyue,
}

impl LuckyStar {
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Wenchang => "文昌",
            Self::Wenqu => "文曲",
            Self::Zuofu => "左辅",
            Self::Youbi => "右弼",
            Self::Tiankui => "天魁",
            Self::Tianyue => "天钺",
        }
    }
}

/// The six unlucky stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnluckyStar {
    Qingyang,
    Tuoluo,
    Huoxing,
    Lingxing,
    Dikong,
    Dijie,
}

impl UnluckyStar {
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Qingyang => "擎羊",
            Self::Tuoluo => "陀罗",
            Self::Huoxing => "火星",
            Self::Lingxing => "铃星",
            Self::Dikong => "地空",
            Self::Dijie => "地劫",
        }
    }
}

/// Branch index of the Yin (Tiger) palace, the placement origin.
const TIGER: i64 = Branch::Yin.index() as i64;

/// Purple-Star branch index from bureau number and lunar day.
///
/// Classical rule generating the traditional 30-row table: divide the day
/// into the bureau, borrow up to `bureau - 1` days; an even borrow walks
/// forward from the quotient palace, an odd borrow walks back.
pub fn ziwei_position(bureau: u8, lunar_day: u32) -> u8 {
    let ju = bureau as i64;
    let day = lunar_day as i64;
    let q = (day + ju - 1) / ju;
    let r = q * ju - day;
    let pos = if r % 2 == 0 {
        TIGER + (q - 1) + r
    } else {
        TIGER + (q - 1) - r
    };
    pos.rem_euclid(12) as u8
}

/// Tianfu mirrors Ziwei across the Yin-Shen axis.
pub fn tianfu_position(ziwei: u8) -> u8 {
    ((16 - ziwei as i64).rem_euclid(12)) as u8
}

/// All 14 main-star positions as (star, branch index) pairs.
///
/// Six stars trail Ziwei backward, eight run from Tianfu forward.
pub fn main_star_positions(bureau: u8, lunar_day: u32) -> [(MainStar, u8); 14] {
    let z = ziwei_position(bureau, lunar_day) as i64;
    let f = tianfu_position(z as u8) as i64;
    let at = |i: i64| i.rem_euclid(12) as u8;
    [
        (MainStar::Ziwei, at(z)),
        (MainStar::Tianji, at(z - 1)),
        (MainStar::Taiyang, at(z - 3)),
        (MainStar::Wuqu, at(z - 4)),
        (MainStar::Tiantong, at(z - 5)),
        (MainStar::Lianzhen, at(z - 8)),
        (MainStar::Tianfu, at(f)),
        (MainStar::Taiyin, at(f + 1)),
        (MainStar::Tanlang, at(f + 2)),
        (MainStar::Jumen, at(f + 3)),
        (MainStar::Tianxiang, at(f + 4)),
        (MainStar::Tianliang, at(f + 5)),
        (MainStar::Qisha, at(f + 6)),
        (MainStar::Pojun, at(f + 10)),
    ]
}

/// Lucun branch by year stem, feeding the Qingyang/Tuoluo placements.
fn lucun_position(year_stem: Stem) -> i64 {
    match year_stem {
        Stem::Jia => 2,   // Yin
        Stem::Yi => 3,    // Mao
        Stem::Bing | Stem::Wu => 5, // Si
        Stem::Ding | Stem::Ji => 6, // Wu
        Stem::Geng => 8,  // Shen
        Stem::Xin => 9,   // You
        Stem::Ren => 11,  // Hai
        Stem::Gui => 0,   // Zi
    }
}

/// Tiankui/Tianyue branch pair by year stem.
fn kui_yue_positions(year_stem: Stem) -> (i64, i64) {
    match year_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => (1, 7),  // Chou, Wei
        Stem::Yi | Stem::Ji => (0, 8),                // Zi, Shen
        Stem::Bing | Stem::Ding => (11, 9),           // Hai, You
        Stem::Xin => (6, 2),                          // Wu, Yin
        Stem::Ren | Stem::Gui => (3, 5),              // Mao, Si
    }
}

/// Huoxing start branch by year-branch trine.
fn huoxing_start(year_branch: Branch) -> i64 {
    match year_branch {
        Branch::Yin | Branch::Wu | Branch::Xu => 1,   // Chou
        Branch::Shen | Branch::Zi | Branch::Chen => 2, // Yin
        Branch::Si | Branch::You | Branch::Chou => 3, // Mao
        Branch::Hai | Branch::Mao | Branch::Wei => 9, // You
    }
}

/// Lingxing start branch by year-branch trine.
fn lingxing_start(year_branch: Branch) -> i64 {
    match year_branch {
        Branch::Yin | Branch::Wu | Branch::Xu => 3, // Mao
        _ => 10,                                    // Xu
    }
}

/// The six lucky-star positions. Each star follows its own keyed rule:
/// Wenchang/Wenqu by hour, Zuofu/Youbi by month, Tiankui/Tianyue by year
/// stem.
pub fn lucky_star_positions(
    year_stem: Stem,
    lunar_month: u32,
    hour_branch: Branch,
) -> [(LuckyStar, u8); 6] {
    let h = hour_branch.index() as i64;
    let m = lunar_month as i64;
    let (kui, yue) = kui_yue_positions(year_stem);
    let at = |i: i64| i.rem_euclid(12) as u8;
    [
        (LuckyStar::Wenchang, at(10 - h)),
        (LuckyStar::Wenqu, at(4 + h)),
        (LuckyStar::Zuofu, at(3 + m)),
        (LuckyStar::Youbi, at(11 - m)),
        (LuckyStar::Tiankui, at(kui)),
        (LuckyStar::Tianyue, at(yue)),
    ]
}

/// The six unlucky-star positions. Qingyang/Tuoluo flank Lucun (year stem),
/// Huoxing/Lingxing count from a year-branch trine start by hour,
/// Dikong/Dijie fan out from Hai by hour.
pub fn unlucky_star_positions(
    year_stem: Stem,
    year_branch: Branch,
    hour_branch: Branch,
) -> [(UnluckyStar, u8); 6] {
    let h = hour_branch.index() as i64;
    let lucun = lucun_position(year_stem);
    let at = |i: i64| i.rem_euclid(12) as u8;
    [
        (UnluckyStar::Qingyang, at(lucun + 1)),
        (UnluckyStar::Tuoluo, at(lucun - 1)),
        (UnluckyStar::Huoxing, at(huoxing_start(year_branch) + h)),
        (UnluckyStar::Lingxing, at(lingxing_start(year_branch) + h)),
        (UnluckyStar::Dikong, at(11 - h)),
        (UnluckyStar::Dijie, at(11 + h)),
    ]
}

/// The Four Transformations of a year stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourTransformations {
    /// 化禄 — fortune.
    pub lu: TransformStar,
    /// 化权 — authority.
    pub quan: TransformStar,
    /// 化科 — status.
    pub ke: TransformStar,
    /// 化忌 — obstacle.
    pub ji: TransformStar,
}

/// A star a transformation can land on (main or lucky).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransformStar {
    Main(MainStar),
    Lucky(LuckyStar),
}

impl TransformStar {
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Main(s) => s.hanzi(),
            Self::Lucky(s) => s.hanzi(),
        }
    }
}

/// Fixed transformation table keyed by year stem.
pub fn four_transformations(year_stem: Stem) -> FourTransformations {
    use LuckyStar::*;
    use MainStar::*;
    use TransformStar::{Lucky, Main};
    let (lu, quan, ke, ji) = match year_stem {
        Stem::Jia => (Main(Lianzhen), Main(Pojun), Main(Wuqu), Main(Taiyang)),
        Stem::Yi => (Main(Tianji), Main(Tianliang), Main(Ziwei), Main(Taiyin)),
        Stem::Bing => (Main(Tiantong), Main(Tianji), Lucky(Wenchang), Main(Lianzhen)),
        Stem::Ding => (Main(Taiyin), Main(Tiantong), Main(Tianji), Main(Jumen)),
        Stem::Wu => (Main(Tanlang), Main(Taiyin), Lucky(Youbi), Main(Tianji)),
        Stem::Ji => (Main(Wuqu), Main(Tanlang), Main(Tianliang), Lucky(Wenqu)),
        Stem::Geng => (Main(Taiyang), Main(Wuqu), Main(Taiyin), Main(Tiantong)),
        Stem::Xin => (Main(Jumen), Main(Taiyang), Lucky(Wenqu), Lucky(Wenchang)),
        Stem::Ren => (Main(Tianliang), Main(Ziwei), Lucky(Zuofu), Main(Wuqu)),
        Stem::Gui => (Main(Pojun), Main(Jumen), Main(Taiyin), Main(Tanlang)),
    };
    FourTransformations { lu, quan, ke, ji }
}
