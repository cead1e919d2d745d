//! Day-master strength on the 560-point scale.
//!
//! The day master itself is worth 40. Every other stem that is a peer or a
//! resource adds `40 × seasonal ratio`. Every branch adds, for each helping
//! hidden stem, `weight × seasonal ratio × distance ratio`, where the
//! distance ratio falls off with the branch's distance from the day pillar.
//!
//! The total is then placed in one of seven bands. Three diagnostics are
//! reported beside it:
//! - seasonal support (deukryeong): the month branch's element helps;
//! - rooting support (deukji): the day branch's main hidden stem helps, or
//!   the day master is vigorous at the day branch;
//! - numerical support (deukse): at least four helping stems or hidden stems.
//!
//! Scores are rounded to one decimal when reported. The total is rounded once
//! from the unrounded sums, and the band is read from the rounded total.

use serde::Serialize;

use crate::branch::Branch;
use crate::chart::{FourPillars, PillarPosition};
use crate::element::Element;
use crate::hidden_stems::{hidden_stems, main_stem};
use crate::season::Season;
use crate::stage::twelve_stage;
use crate::stem::Stem;
use crate::ten_god::{TenGod, branch_ten_god, ten_god};
use crate::util::round1;

/// Fixed score of the day master.
pub const DAY_MASTER_SCORE: f64 = 40.0;
/// Full weight of one heavenly stem.
pub const STEM_SCORE: f64 = 40.0;
/// Upper bound of the scale.
pub const MAX_SCORE: f64 = 560.0;
/// Helping occurrences needed for numerical support.
pub const NUMERICAL_SUPPORT_MIN: u32 = 4;

/// Rooting distance ratio per position (year, month, day, hour).
const DISTANCE_RATIO: [f64; 4] = [0.75, 0.90, 1.00, 0.90];

pub const fn distance_ratio(pos: PillarPosition) -> f64 {
    DISTANCE_RATIO[pos.index() as usize]
}

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

/// Seven-band classification of the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthBand {
    ExtremelyWeak,
    VeryWeak,
    Weak,
    Balanced,
    Strong,
    VeryStrong,
    ExtremelyStrong,
}

pub const ALL_BANDS: [StrengthBand; 7] = [
    StrengthBand::ExtremelyWeak,
    StrengthBand::VeryWeak,
    StrengthBand::Weak,
    StrengthBand::Balanced,
    StrengthBand::Strong,
    StrengthBand::VeryStrong,
    StrengthBand::ExtremelyStrong,
];

/// Half-open `[lower, upper)` range of each band.
const BAND_RANGES: [(f64, f64); 7] = [
    (0.0, 40.0),
    (40.0, 80.0),
    (80.0, 140.0),
    (140.0, 200.0),
    (200.0, 320.0),
    (320.0, 450.0),
    (450.0, 560.0),
];

/// Coarse three-tier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Weak,
    Balanced,
    Strong,
}

impl StrengthBand {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ExtremelyWeak => "extremely_weak",
            Self::VeryWeak => "very_weak",
            Self::Weak => "weak",
            Self::Balanced => "balanced",
            Self::Strong => "strong",
            Self::VeryStrong => "very_strong",
            Self::ExtremelyStrong => "extremely_strong",
        }
    }

    /// `[lower, upper)` score range.
    pub const fn range(self) -> (f64, f64) {
        BAND_RANGES[self.index() as usize]
    }

    pub const fn tier(self) -> StrengthTier {
        match self {
            Self::ExtremelyWeak | Self::VeryWeak | Self::Weak => StrengthTier::Weak,
            Self::Balanced => StrengthTier::Balanced,
            Self::Strong | Self::VeryStrong | Self::ExtremelyStrong => StrengthTier::Strong,
        }
    }

    /// Band containing `score`. Scores outside `[0, 560)` clamp to the end bands.
    pub fn from_score(score: f64) -> Self {
        ALL_BANDS
            .iter()
            .copied()
            .find(|b| {
                let (lo, hi) = b.range();
                lo <= score && score < hi
            })
            .unwrap_or(if score < 0.0 {
                Self::ExtremelyWeak
            } else {
                Self::ExtremelyStrong
            })
    }
}

impl StrengthTier {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Balanced => "balanced",
            Self::Strong => "strong",
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Contribution of one non-day heavenly stem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemContribution {
    pub position: PillarPosition,
    pub stem: Stem,
    pub element: Element,
    pub ten_god: TenGod,
    pub helping: bool,
    pub seasonal_ratio: f64,
    pub score: f64,
}

/// Contribution of one hidden stem inside a branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenContribution {
    pub stem: Stem,
    pub element: Element,
    pub weight: u8,
    pub ten_god: TenGod,
    pub helping: bool,
    pub seasonal_ratio: f64,
    pub score: f64,
}

/// Contribution of one branch, summed over its hidden stems.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchContribution {
    pub position: PillarPosition,
    pub branch: Branch,
    pub distance_ratio: f64,
    /// Ten-god of the branch's main hidden stem.
    pub ten_god: TenGod,
    pub hidden: Vec<HiddenContribution>,
    pub score: f64,
}

/// Full strength evaluation of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthResult {
    pub day_master: Stem,
    pub season: Season,
    /// Peer element first, resource element second.
    pub helping_elements: [Element; 2],
    pub day_master_score: f64,
    pub stems_total: f64,
    pub branches_total: f64,
    pub total: f64,
    pub max_score: f64,
    /// Total converted to a 100-point scale.
    pub score_100: f64,
    pub band: StrengthBand,
    pub tier: StrengthTier,
    pub seasonal_support: bool,
    pub rooting_support: bool,
    pub numerical_support: bool,
    pub helping_count: u32,
    pub stems: Vec<StemContribution>,
    pub branches: Vec<BranchContribution>,
}

impl StrengthResult {
    /// Summed reported score of everything at `pos` (stem and branch).
    pub fn contribution_at(&self, pos: PillarPosition) -> f64 {
        let stem: f64 = self
            .stems
            .iter()
            .filter(|s| s.position == pos)
            .map(|s| s.score)
            .sum();
        let branch: f64 = self
            .branches
            .iter()
            .filter(|b| b.position == pos)
            .map(|b| b.score)
            .sum();
        stem + branch
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score the strength of the chart's day master.
pub fn score_strength(chart: &FourPillars) -> StrengthResult {
    let day_master = chart.day_master();
    let peer = day_master.element();
    let resource = peer.generated_by();
    let season = Season::from_month_branch(chart.branch_at(PillarPosition::Month));

    let mut helping_count = 0u32;

    let mut stems = Vec::with_capacity(3);
    let mut stems_raw = 0.0;
    for (position, pillar) in chart.present().filter(|(p, _)| *p != PillarPosition::Day) {
        let stem = pillar.stem;
        let tg = ten_god(day_master, stem);
        let ratio = season.ratio(stem.element());
        let helping = tg.is_helping();
        let score = if helping { STEM_SCORE * ratio } else { 0.0 };
        if helping {
            helping_count += 1;
        }
        stems_raw += score;
        stems.push(StemContribution {
            position,
            stem,
            element: stem.element(),
            ten_god: tg,
            helping,
            seasonal_ratio: ratio,
            score: round1(score),
        });
    }

    let mut branches = Vec::with_capacity(4);
    let mut branches_raw = 0.0;
    for (position, pillar) in chart.present() {
        let branch = pillar.branch;
        let distance = distance_ratio(position);
        let mut branch_raw = 0.0;
        let mut hidden = Vec::with_capacity(3);
        for hs in hidden_stems(branch) {
            let tg = ten_god(day_master, hs.stem);
            let ratio = season.ratio(hs.stem.element());
            let helping = tg.is_helping();
            let score = if helping {
                hs.weight as f64 * ratio * distance
            } else {
                0.0
            };
            if helping {
                helping_count += 1;
            }
            branch_raw += score;
            hidden.push(HiddenContribution {
                stem: hs.stem,
                element: hs.stem.element(),
                weight: hs.weight,
                ten_god: tg,
                helping,
                seasonal_ratio: ratio,
                score: round1(score),
            });
        }
        branches_raw += branch_raw;
        branches.push(BranchContribution {
            position,
            branch,
            distance_ratio: distance,
            ten_god: branch_ten_god(day_master, branch),
            hidden,
            score: round1(branch_raw),
        });
    }

    let total = round1(DAY_MASTER_SCORE + stems_raw + branches_raw);
    let band = StrengthBand::from_score(total);

    let is_helping_element = |e: Element| e == peer || e == resource;
    let seasonal_support = is_helping_element(chart.month.branch.element());
    let day_branch = chart.day.branch;
    let rooting_support = is_helping_element(main_stem(day_branch).element())
        || twelve_stage(day_master, day_branch).is_vigorous();

    StrengthResult {
        day_master,
        season,
        helping_elements: [peer, resource],
        day_master_score: DAY_MASTER_SCORE,
        stems_total: round1(stems_raw),
        branches_total: round1(branches_raw),
        total,
        max_score: MAX_SCORE,
        score_100: round1(total / MAX_SCORE * 100.0),
        band,
        tier: band.tier(),
        seasonal_support,
        rooting_support,
        numerical_support: helping_count >= NUMERICAL_SUPPORT_MIN,
        helping_count,
        stems,
        branches,
    }
}
