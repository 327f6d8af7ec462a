//! Pillar type and the chart it composes into.

use serde::Serialize;

use mingli_cycle::{Element, HiddenStem, Stem, StemBranch};
use mingli_time::LocalDateTime;

/// One stem-branch pillar of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pillar {
    pub stem_branch: StemBranch,
}

impl Pillar {
    pub const fn new(stem_branch: StemBranch) -> Self {
        Self { stem_branch }
    }

    pub const fn stem(&self) -> Stem {
        self.stem_branch.stem
    }

    pub const fn branch(&self) -> mingli_cycle::Branch {
        self.stem_branch.branch
    }

    /// Element of the pillar, taken from its stem.
    pub const fn element(&self) -> Element {
        self.stem_branch.stem.element()
    }

    /// Stems concealed in the pillar's branch.
    pub fn hidden_stems(&self) -> &'static [HiddenStem] {
        self.stem_branch.branch.hidden_stems()
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stem_branch)
    }
}

/// Early/late midnight-hour classification.
///
/// The Zi hour spans 23:00-01:00 and straddles midnight. A 23:00-23:59
/// birth is late Zi: the day pillar keeps the current day but the hour stem
/// derives from the next day's day stem. A 00:00-00:59 birth is early Zi
/// and uses the current day throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZishiType {
    Early,
    Late,
}

/// The four pillars of a birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaziChart {
    pub birth: LocalDateTime,
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Set only for births in the Zi hour.
    pub zishi: Option<ZishiType>,
    /// Day-master stem (the day pillar's stem).
    pub day_master: Stem,
    /// 1-based solar-term month number (Lichun month = 1).
    pub lunar_month: u32,
}

impl BaziChart {
    /// The four pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Element of the day master.
    pub const fn day_master_element(&self) -> mingli_cycle::Element {
        self.day_master.element()
    }
}
