//! Luck cycles: decade (daeun), annual (seun) and monthly (wolun) pillars.
//!
//! The calendar supplies the pillars and the decade start ages; this module
//! fixes the direction, enriches every pillar exactly like a birth pillar,
//! and collects the cycles. A probe that fails is recorded as skipped and the
//! remaining cycles are still produced.

use serde::{Deserialize, Serialize};

use crate::chart::Gender;
use crate::enrich::{EnrichedPillar, enrich_optional, enrich_pillar};
use crate::sexagenary::Pillar;
use crate::stem::Stem;

/// Decade progression direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }

    /// One step along the sexagenary cycle.
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Forward for a yang day master in a male chart or a yin day master in a
/// female chart; backward otherwise.
pub const fn luck_direction(day_master: Stem, gender: Gender) -> LuckDirection {
    let yang = day_master.polarity().is_yang();
    let male = matches!(gender, Gender::Male);
    if yang == male {
        LuckDirection::Forward
    } else {
        LuckDirection::Backward
    }
}

/// Local (East Asian) age: one at birth, plus one every calendar year.
pub const fn local_age(birth_year: i32, target_year: i32) -> i32 {
    target_year - birth_year + 1
}

/// When the first decade begins, as supplied by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckStart {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub forward: bool,
}

/// One decade as supplied by the calendar, before enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeSeed {
    pub start_age: i32,
    pub end_age: i32,
    pub start_year: i32,
    pub end_year: i32,
    /// Missing when the calendar has no pillar for this span.
    pub pillar: Option<Pillar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeCycle {
    pub index: usize,
    pub start_age: i32,
    pub end_age: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub pillar: Option<EnrichedPillar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualCycle {
    pub year: i32,
    pub age: i32,
    pub pillar: EnrichedPillar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCycle {
    pub year: i32,
    pub month: u32,
    pub pillar: EnrichedPillar,
}

/// A sub-period whose probe failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skipped<E> {
    pub year: i32,
    pub month: Option<u32>,
    pub error: E,
}

/// All three horizons for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckCycles {
    pub direction: LuckDirection,
    pub start: Option<LuckStart>,
    pub target_year: i32,
    /// Index of the decade covering the local age in `target_year`.
    pub current_decade: Option<usize>,
    pub decades: Vec<DecadeCycle>,
    pub annual: Vec<AnnualCycle>,
    pub monthly: Vec<MonthlyCycle>,
}

/// Enrich calendar-supplied decades, keeping their order.
pub fn decade_cycles(day_master: Stem, seeds: &[DecadeSeed]) -> Vec<DecadeCycle> {
    seeds
        .iter()
        .enumerate()
        .map(|(index, s)| DecadeCycle {
            index,
            start_age: s.start_age,
            end_age: s.end_age,
            start_year: s.start_year,
            end_year: s.end_year,
            pillar: enrich_optional(day_master, s.pillar),
        })
        .collect()
}

/// Replace each seed's pillar with the one `i + 1` steps from the month
/// pillar in `direction`. Seeds without a pillar stay empty.
pub fn restep_decades(
    month: Pillar,
    direction: LuckDirection,
    seeds: &[DecadeSeed],
) -> Vec<DecadeSeed> {
    seeds
        .iter()
        .zip(1..)
        .map(|(s, n)| DecadeSeed {
            pillar: s.pillar.map(|_| month.offset(direction.step() * n)),
            ..*s
        })
        .collect()
}

/// The decade covering `age`, if any.
pub fn decade_at_age(decades: &[DecadeCycle], age: i32) -> Option<&DecadeCycle> {
    decades
        .iter()
        .find(|d| d.start_age <= age && age <= d.end_age)
}

/// Annual cycles over `years`, probing each year's pillar.
pub fn annual_cycles<E>(
    day_master: Stem,
    birth_year: i32,
    years: impl IntoIterator<Item = i32>,
    mut probe: impl FnMut(i32) -> Result<Pillar, E>,
) -> (Vec<AnnualCycle>, Vec<Skipped<E>>) {
    let mut cycles = Vec::new();
    let mut skipped = Vec::new();
    for year in years {
        match probe(year) {
            Ok(p) => cycles.push(AnnualCycle {
                year,
                age: local_age(birth_year, year),
                pillar: enrich_pillar(day_master, p),
            }),
            Err(error) => skipped.push(Skipped {
                year,
                month: None,
                error,
            }),
        }
    }
    (cycles, skipped)
}

/// Monthly cycles for months 1..=12 of `year`.
pub fn monthly_cycles<E>(
    day_master: Stem,
    year: i32,
    mut probe: impl FnMut(i32, u32) -> Result<Pillar, E>,
) -> (Vec<MonthlyCycle>, Vec<Skipped<E>>) {
    let mut cycles = Vec::with_capacity(12);
    let mut skipped = Vec::new();
    for month in 1..=12 {
        match probe(year, month) {
            Ok(p) => cycles.push(MonthlyCycle {
                year,
                month,
                pillar: enrich_pillar(day_master, p),
            }),
            Err(error) => skipped.push(Skipped {
                year,
                month: Some(month),
                error,
            }),
        }
    }
    (cycles, skipped)
}
