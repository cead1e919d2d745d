//! Relationship facts: peach blossom placement and spouse stars.

use serde::Serialize;

use crate::branch::{Branch, Zodiac};
use crate::chart::{ALL_POSITIONS, FourPillars, Gender, PillarPosition};
use crate::enrich::EnrichedChart;
use crate::shensha::Slot;
use crate::shensha::tables::PEACH_BLOSSOM;
use crate::ten_god::TenGod;

/// Peach blossom read from the year branch and the day branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeachPlacement {
    pub target_from_year: Branch,
    pub target_from_day: Branch,
    /// Positions whose branch equals either target, in chart order.
    pub positions: Vec<PillarPosition>,
    pub present: bool,
}

/// One spouse-star occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpouseHit {
    pub position: PillarPosition,
    pub slot: Slot,
    pub ten_god: TenGod,
}

/// Spouse stars: wealth for male charts, authority for female charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpouseStars {
    pub targets: [TenGod; 2],
    pub positions: Vec<PillarPosition>,
    pub hit_count: usize,
    pub hits: Vec<SpouseHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipFacts {
    pub hour_known: bool,
    pub zodiac: Zodiac,
    pub peach_blossom: PeachPlacement,
    pub spouse_stars: SpouseStars,
}

pub const fn spouse_targets(gender: Gender) -> [TenGod; 2] {
    match gender {
        Gender::Male => [TenGod::WealthDirect, TenGod::WealthIndirect],
        Gender::Female => [TenGod::AuthorityDirect, TenGod::AuthorityIndirect],
    }
}

pub fn peach_placement(chart: &FourPillars) -> PeachPlacement {
    let from_year = PEACH_BLOSSOM[chart.year.branch.index() as usize];
    let from_day = PEACH_BLOSSOM[chart.day.branch.index() as usize];
    let positions: Vec<_> = ALL_POSITIONS
        .iter()
        .copied()
        .filter(|&pos| {
            chart
                .branch_at(pos)
                .is_some_and(|b| b == from_year || b == from_day)
        })
        .collect();
    PeachPlacement {
        target_from_year: from_year,
        target_from_day: from_day,
        present: !positions.is_empty(),
        positions,
    }
}

pub fn spouse_stars(enriched: &EnrichedChart, gender: Gender) -> SpouseStars {
    let targets = spouse_targets(gender);
    let mut hits = Vec::new();
    let mut positions = Vec::new();
    for p in enriched.present() {
        let before = hits.len();
        for (slot, tg) in [
            (Slot::Stem, p.enriched.ten_god_stem),
            (Slot::Branch, p.enriched.ten_god_branch),
        ] {
            if targets.contains(&tg) {
                hits.push(SpouseHit {
                    position: p.position,
                    slot,
                    ten_god: tg,
                });
            }
        }
        if hits.len() > before {
            positions.push(p.position);
        }
    }
    SpouseStars {
        targets,
        positions,
        hit_count: hits.len(),
        hits,
    }
}

pub fn relationship_facts(
    chart: &FourPillars,
    enriched: &EnrichedChart,
    gender: Gender,
) -> RelationshipFacts {
    RelationshipFacts {
        hour_known: chart.hour_known(),
        zodiac: chart.year.branch.zodiac(),
        peach_blossom: peach_placement(chart),
        spouse_stars: spouse_stars(enriched, gender),
    }
}
