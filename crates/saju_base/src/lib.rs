//! Closed-domain Four Pillars (saju / BaZi) tables and algorithms.
//!
//! This crate provides:
//! - Stems, branches, elements, polarity and the 60-pillar cycle
//! - Hidden-stem decompositions, ten-gods and the twelve life stages
//! - The pillar enricher shared by birth, decade, annual and monthly pillars
//! - 560-point day-master strength scoring
//! - Twenty shensha rules with an active list and a by-pillar map
//! - Luck-cycle assembly over calendar-supplied pillars
//!
//! Everything here is a pure function of its inputs. Calendar conversion is
//! not part of this crate; see `saju_engine` for the provider boundary.

pub mod branch;
pub mod chart;
pub mod distribution;
pub mod element;
pub mod enrich;
pub mod error;
pub mod hidden_stems;
pub mod luck;
pub mod profile;
pub mod relationship;
pub mod season;
pub mod sexagenary;
pub mod shensha;
pub mod stage;
pub mod stem;
pub mod strength;
pub mod ten_god;
pub mod twelve_spirit;
pub mod util;

pub use branch::{ALL_BRANCHES, ALL_ZODIAC, Branch, Zodiac};
pub use chart::{ALL_POSITIONS, FourPillars, Gender, PillarPosition};
pub use distribution::{ElementDistribution, element_distribution};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use enrich::{
    ChartPillar, EnrichedChart, EnrichedPillar, enrich_chart, enrich_optional, enrich_pillar,
};
pub use error::SymbolError;
pub use hidden_stems::{HiddenStem, hidden_stem_days, hidden_stems, main_stem};
pub use luck::{
    AnnualCycle, DecadeCycle, DecadeSeed, LuckCycles, LuckDirection, LuckStart, MonthlyCycle,
    Skipped, annual_cycles, decade_at_age, decade_cycles, local_age, luck_direction,
    monthly_cycles, restep_decades,
};
pub use profile::{SajuProfile, compute_profile};
pub use relationship::{RelationshipFacts, relationship_facts};
pub use season::{ALL_SEASONS, Season};
pub use sexagenary::{ALL_SEXAGENARY, Pillar};
pub use shensha::{ByPillar, Shensha, ShenshaResult, StarFinding, detect_shensha, void_branches};
pub use stage::{ALL_STAGES, TwelveStage, twelve_stage};
pub use stem::{ALL_STEMS, Stem};
pub use strength::{StrengthBand, StrengthResult, StrengthTier, score_strength};
pub use ten_god::{ALL_TEN_GODS, TenGod, TenGodFamily, branch_ten_god, ten_god};
pub use twelve_spirit::{TwelveSpirit, twelve_spirit};
