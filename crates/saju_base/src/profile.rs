//! Calendar-free profile of a chart: everything derivable from the four
//! raw pillars and the gender alone.

use serde::Serialize;

use crate::chart::{FourPillars, Gender};
use crate::distribution::{ElementDistribution, element_distribution};
use crate::enrich::{EnrichedChart, enrich_chart};
use crate::luck::{LuckDirection, luck_direction};
use crate::relationship::{RelationshipFacts, relationship_facts};
use crate::shensha::{ShenshaResult, detect_shensha};
use crate::strength::{StrengthResult, score_strength};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SajuProfile {
    pub gender: Gender,
    pub pillars: EnrichedChart,
    pub strength: StrengthResult,
    pub five_elements: ElementDistribution,
    pub shensha: ShenshaResult,
    pub relationship: RelationshipFacts,
    pub luck_direction: LuckDirection,
}

pub fn compute_profile(chart: &FourPillars, gender: Gender) -> SajuProfile {
    let pillars = enrich_chart(chart);
    let relationship = relationship_facts(chart, &pillars, gender);
    SajuProfile {
        gender,
        strength: score_strength(chart),
        five_elements: element_distribution(chart),
        shensha: detect_shensha(chart, gender),
        relationship,
        luck_direction: luck_direction(chart.day_master(), gender),
        pillars,
    }
}
