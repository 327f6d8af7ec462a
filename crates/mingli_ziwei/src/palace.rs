//! The twelve palaces and the Five-Element Category.

use serde::Serialize;

use mingli_cycle::Branch;

use crate::stars::{LuckyStar, MainStar, UnluckyStar};

/// The twelve palace names, in the order they trail the Life Palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PalaceName {
    /// 命宫 — Life.
    Ming,
    /// 兄弟 — Siblings.
    Xiongdi,
    /// 夫妻 — Spouse.
    Fuqi,
    /// 子女 — Children.
    Zinv,
    /// 财帛 — Wealth.
    Caibo,
    /// 疾厄 — Health.
    Jie,
    /// 迁移 — Travel.
    Qianyi,
    /// 交友 — Friends.
    Jiaoyou,
    /// 官禄 — Career.
    Guanlu,
    /// 田宅 — Property.
    Tianzhai,
    /// 福德 — Fortune.
    Fude,
    /// 父母 — Parents.
    Fumu,
}

/// All palace names in rotation order.
pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Ming,
    PalaceName::Xiongdi,
    PalaceName::Fuqi,
    PalaceName::Zinv,
    PalaceName::Caibo,
    PalaceName::Jie,
    PalaceName::Qianyi,
    PalaceName::Jiaoyou,
    PalaceName::Guanlu,
    PalaceName::Tianzhai,
    PalaceName::Fude,
    PalaceName::Fumu,
];

impl PalaceName {
    /// Chinese name.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Ming => "命宫",
            Self::Xiongdi => "兄弟",
            Self::Fuqi => "夫妻",
            Self::Zinv => "子女",
            Self::Caibo => "财帛",
            Self::Jie => "疾厄",
            Self::Qianyi => "迁移",
            Self::Jiaoyou => "交友",
            Self::Guanlu => "官禄",
            Self::Tianzhai => "田宅",
            Self::Fude => "福德",
            Self::Fumu => "父母",
        }
    }
}

/// One palace of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palace {
    pub branch: Branch,
    pub name: PalaceName,
    pub main_stars: Vec<MainStar>,
    pub lucky_stars: Vec<LuckyStar>,
    pub unlucky_stars: Vec<UnluckyStar>,
    /// Whether the Body Palace coincides with this palace.
    pub is_body_palace: bool,
}

/// The Five-Element Category (bureau) of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WuxingJu {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

impl WuxingJu {
    /// Chinese name, e.g. "水二局".
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    /// Bureau number 2..=6, governing star placement and period timing.
    pub const fn bureau(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Fixed 12-entry table keyed by the Life Palace branch.
    pub const fn from_life_palace(branch: Branch) -> Self {
        match branch {
            Branch::Hai | Branch::Zi => Self::Water2,
            Branch::Yin | Branch::Mao => Self::Wood3,
            Branch::Shen | Branch::You => Self::Metal4,
            Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Self::Earth5,
            Branch::Si | Branch::Wu => Self::Fire6,
        }
    }
}
