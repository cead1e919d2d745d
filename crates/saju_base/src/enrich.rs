//! Pillar enricher: the one place a raw pillar gains its ten-gods, life stage
//! and hidden stems relative to a day master.
//!
//! Birth pillars, decade pillars, annual pillars and monthly pillars all go
//! through [`enrich_pillar`].

use serde::Serialize;

use crate::chart::{FourPillars, PillarPosition};
use crate::element::{Element, Polarity};
use crate::hidden_stems::{HiddenStem, hidden_stem_days, hidden_stems, main_stem};
use crate::sexagenary::Pillar;
use crate::stage::{TwelveStage, twelve_stage};
use crate::stem::Stem;
use crate::ten_god::{TenGod, branch_ten_god, ten_god};
use crate::twelve_spirit::{TwelveSpirit, twelve_spirit};

/// A pillar with everything derived from the day master.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPillar {
    pub pillar: Pillar,
    pub stem_element: Element,
    pub stem_polarity: Polarity,
    pub branch_element: Element,
    pub branch_polarity: Polarity,
    pub ten_god_stem: TenGod,
    /// Resolved against the branch's dominant hidden stem.
    pub ten_god_branch: TenGod,
    pub main_hidden_stem: Stem,
    pub twelve_stage: TwelveStage,
    /// Weighted decomposition (sums to 100).
    pub hidden_stems: &'static [HiddenStem],
    /// Day allotment (sums to 30).
    pub hidden_stem_days: &'static [HiddenStem],
}

/// Enrich one pillar against `day_master`.
pub fn enrich_pillar(day_master: Stem, pillar: Pillar) -> EnrichedPillar {
    let Pillar { stem, branch } = pillar;
    EnrichedPillar {
        pillar,
        stem_element: stem.element(),
        stem_polarity: stem.polarity(),
        branch_element: branch.element(),
        branch_polarity: branch.polarity(),
        ten_god_stem: ten_god(day_master, stem),
        ten_god_branch: branch_ten_god(day_master, branch),
        main_hidden_stem: main_stem(branch),
        twelve_stage: twelve_stage(day_master, branch),
        hidden_stems: hidden_stems(branch),
        hidden_stem_days: hidden_stem_days(branch),
    }
}

/// Absent pillars stay absent; nothing is derived for them.
pub fn enrich_optional(day_master: Stem, pillar: Option<Pillar>) -> Option<EnrichedPillar> {
    pillar.map(|p| enrich_pillar(day_master, p))
}

/// A birth-chart pillar: enriched, with its position and twelve spirit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPillar {
    pub position: PillarPosition,
    #[serde(flatten)]
    pub enriched: EnrichedPillar,
    /// Relative to the year branch.
    pub twelve_spirit: TwelveSpirit,
}

/// Enriched birth pillars, one slot per position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedChart {
    pub day_master: Stem,
    pub year: ChartPillar,
    pub month: ChartPillar,
    pub day: ChartPillar,
    pub hour: Option<ChartPillar>,
}

impl EnrichedChart {
    pub fn get(&self, pos: PillarPosition) -> Option<&ChartPillar> {
        match pos {
            PillarPosition::Year => Some(&self.year),
            PillarPosition::Month => Some(&self.month),
            PillarPosition::Day => Some(&self.day),
            PillarPosition::Hour => self.hour.as_ref(),
        }
    }

    /// Present pillars in chart order.
    pub fn present(&self) -> impl Iterator<Item = &ChartPillar> {
        [Some(&self.year), Some(&self.month), Some(&self.day), self.hour.as_ref()]
            .into_iter()
            .flatten()
    }
}

fn chart_pillar(chart: &FourPillars, position: PillarPosition, pillar: Pillar) -> ChartPillar {
    let mut enriched = enrich_pillar(chart.day_master(), pillar);
    if position == PillarPosition::Day {
        // the day master's relation to itself
        enriched.ten_god_stem = TenGod::PeerSame;
    }
    ChartPillar {
        position,
        enriched,
        twelve_spirit: twelve_spirit(chart.year.branch, pillar.branch),
    }
}

/// Enrich all four birth pillars.
pub fn enrich_chart(chart: &FourPillars) -> EnrichedChart {
    EnrichedChart {
        day_master: chart.day_master(),
        year: chart_pillar(chart, PillarPosition::Year, chart.year),
        month: chart_pillar(chart, PillarPosition::Month, chart.month),
        day: chart_pillar(chart, PillarPosition::Day, chart.day),
        hour: chart
            .hour
            .map(|p| chart_pillar(chart, PillarPosition::Hour, p)),
    }
}
