//! Shensha (sinsal): twenty classical auxiliary stars.
//!
//! Each star is a [`StarSpec`]: a detection [`Rule`], an [`Attach`] mode for
//! the by-pillar map, an optional gender scope and, for the travel horse, a
//! simplified reading. [`detect_shensha`] runs all twenty in a fixed order.
//!
//! Two stars are gender-scoped: the widow star counts only for female charts
//! and the lonely star only for male charts. Both are still evaluated and
//! reported; they are left out of the active list and the by-pillar map when
//! the gender does not match.

pub mod rule;
pub mod tables;

use serde::Serialize;

use crate::branch::Branch;
use crate::chart::{FourPillars, Gender, PillarPosition};
use crate::stem::Stem;

pub use rule::{Attach, Found, Rule, Scope, StarSpec};
pub use tables::void_branches;

/// A stem or a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Stem(Stem),
    Branch(Branch),
}

/// Stem or branch half of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Stem,
    Branch,
}

/// A target found from a specific base position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseHit {
    pub base: PillarPosition,
    pub target: Branch,
}

/// The twenty stars, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shensha {
    HeavenlyNoble,
    PeachBlossom,
    TravelHorse,
    Canopy,
    Blade,
    Commander,
    Void,
    Grudge,
    GhostGate,
    WhiteTiger,
    RedGlamour,
    HeavenlyVirtue,
    MonthlyVirtue,
    SupremeNoble,
    LiteraryStar,
    HeavenlyDoctor,
    HangingNeedle,
    LonelyPhoenix,
    Widow,
    LonelyStar,
}

impl Shensha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "heavenly_noble",
            Self::PeachBlossom => "peach_blossom",
            Self::TravelHorse => "travel_horse",
            Self::Canopy => "canopy",
            Self::Blade => "blade",
            Self::Commander => "commander",
            Self::Void => "void",
            Self::Grudge => "grudge",
            Self::GhostGate => "ghost_gate",
            Self::WhiteTiger => "white_tiger",
            Self::RedGlamour => "red_glamour",
            Self::HeavenlyVirtue => "heavenly_virtue",
            Self::MonthlyVirtue => "monthly_virtue",
            Self::SupremeNoble => "supreme_noble",
            Self::LiteraryStar => "literary_star",
            Self::HeavenlyDoctor => "heavenly_doctor",
            Self::HangingNeedle => "hanging_needle",
            Self::LonelyPhoenix => "lonely_phoenix",
            Self::Widow => "widow",
            Self::LonelyStar => "lonely_star",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "天乙貴人",
            Self::PeachBlossom => "桃花殺",
            Self::TravelHorse => "驛馬殺",
            Self::Canopy => "華蓋殺",
            Self::Blade => "羊刃殺",
            Self::Commander => "魁罡殺",
            Self::Void => "空亡",
            Self::Grudge => "怨嗔殺",
            Self::GhostGate => "鬼門關殺",
            Self::WhiteTiger => "白虎殺",
            Self::RedGlamour => "紅艶殺",
            Self::HeavenlyVirtue => "天德貴人",
            Self::MonthlyVirtue => "月德貴人",
            Self::SupremeNoble => "太極貴人",
            Self::LiteraryStar => "文昌貴人",
            Self::HeavenlyDoctor => "天醫星",
            Self::HangingNeedle => "懸針殺",
            Self::LonelyPhoenix => "孤鸞殺",
            Self::Widow => "寡宿殺",
            Self::LonelyStar => "孤辰殺",
        }
    }

    pub fn spec(self) -> &'static StarSpec {
        &STAR_SPECS[self as usize]
    }
}

const YEAR_AND_DAY: &[PillarPosition] = &[PillarPosition::Year, PillarPosition::Day];
const YEAR_ONLY: &[PillarPosition] = &[PillarPosition::Year];

const fn spec(star: Shensha, rule: Rule, attach: Attach) -> StarSpec {
    StarSpec {
        star,
        rule,
        attach,
        gender: None,
        simplified: None,
    }
}

/// All twenty stars, in [`Shensha`] order.
pub static STAR_SPECS: [StarSpec; 20] = [
    spec(
        Shensha::HeavenlyNoble,
        Rule::DayStemBranches(&tables::HEAVENLY_NOBLE),
        Attach::TargetBranch,
    ),
    spec(
        Shensha::PeachBlossom,
        Rule::BaseBranchTarget { table: &tables::PEACH_BLOSSOM, bases: YEAR_AND_DAY },
        Attach::TargetBranch,
    ),
    StarSpec {
        simplified: Some(tables::TRAVEL_SIMPLIFIED),
        ..spec(
            Shensha::TravelHorse,
            Rule::BaseBranchTarget { table: &tables::TRAVEL_HORSE, bases: YEAR_AND_DAY },
            Attach::TargetBranch,
        )
    },
    spec(
        Shensha::Canopy,
        Rule::BaseBranchTarget { table: &tables::CANOPY, bases: YEAR_AND_DAY },
        Attach::TargetBranch,
    ),
    spec(
        Shensha::Blade,
        Rule::DayStemBranches(&tables::BLADE),
        Attach::TargetBranch,
    ),
    spec(
        Shensha::Commander,
        Rule::DayPillarSet(tables::COMMANDER),
        Attach::DayOnly,
    ),
    spec(Shensha::Void, Rule::Void, Attach::TargetBranch),
    spec(
        Shensha::Grudge,
        Rule::BranchPairs(tables::GRUDGE_PAIRS),
        Attach::PairMembers,
    ),
    spec(
        Shensha::GhostGate,
        Rule::BranchPairs(tables::GHOST_GATE_PAIRS),
        Attach::PairMembers,
    ),
    spec(
        Shensha::WhiteTiger,
        Rule::DayPillarSet(tables::WHITE_TIGER),
        Attach::DayOnly,
    ),
    spec(
        Shensha::RedGlamour,
        Rule::DayStemBranches(&tables::RED_GLAMOUR),
        Attach::TargetBranch,
    ),
    spec(
        Shensha::HeavenlyVirtue,
        Rule::MonthBranchTarget { table: &tables::HEAVENLY_VIRTUE, scope: Scope::Both },
        Attach::TargetBoth,
    ),
    spec(
        Shensha::MonthlyVirtue,
        Rule::MonthBranchTarget { table: &tables::MONTHLY_VIRTUE, scope: Scope::Stems },
        Attach::TargetStem,
    ),
    spec(
        Shensha::SupremeNoble,
        Rule::DayStemBranches(&tables::SUPREME_NOBLE),
        Attach::TargetBranch,
    ),
    spec(
        Shensha::LiteraryStar,
        Rule::DayStemBranches(&tables::LITERARY_STAR),
        Attach::TargetBranch,
    ),
    spec(
        Shensha::HeavenlyDoctor,
        Rule::MonthBranchTarget { table: &tables::HEAVENLY_DOCTOR, scope: Scope::Branches },
        Attach::TargetBranch,
    ),
    spec(
        Shensha::HangingNeedle,
        Rule::SymbolSet(tables::HANGING_NEEDLE),
        Attach::TargetBoth,
    ),
    spec(
        Shensha::LonelyPhoenix,
        Rule::DayPillarSet(tables::LONELY_PHOENIX),
        Attach::DayOnly,
    ),
    StarSpec {
        gender: Some(Gender::Female),
        ..spec(
            Shensha::Widow,
            Rule::BaseBranchTarget { table: &tables::WIDOW, bases: YEAR_ONLY },
            Attach::TargetBranch,
        )
    },
    StarSpec {
        gender: Some(Gender::Male),
        ..spec(
            Shensha::LonelyStar,
            Rule::BaseBranchTarget { table: &tables::LONELY, bases: YEAR_ONLY },
            Attach::TargetBranch,
        )
    },
];

/// Outcome for one star.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarFinding {
    pub star: Shensha,
    /// The rule holds for this chart, regardless of gender scope.
    pub present: bool,
    /// Present and relevant to the chart's gender.
    pub active: bool,
    pub gender_scope: Option<Gender>,
    /// Targets the rule looked for.
    pub targets: Vec<Symbol>,
    /// Chart symbols that hit a target, in chart order.
    pub matched: Vec<Symbol>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub base_hits: Vec<BaseHit>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<(Branch, Branch)>,
    /// Positions hit by the simplified reading (travel horse only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub simplified: Vec<PillarPosition>,
    /// Positions and slots this star attaches to in the by-pillar map.
    pub attached: Vec<(PillarPosition, Slot)>,
}

/// Stars attached to one pillar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PillarStars {
    pub stem: Vec<Shensha>,
    pub branch: Vec<Shensha>,
}

impl PillarStars {
    pub fn is_empty(&self) -> bool {
        self.stem.is_empty() && self.branch.is_empty()
    }

    fn add(&mut self, slot: Slot, star: Shensha) {
        let bucket = match slot {
            Slot::Stem => &mut self.stem,
            Slot::Branch => &mut self.branch,
        };
        if !bucket.contains(&star) {
            bucket.push(star);
        }
    }
}

/// Active stars per position, split by stem and branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ByPillar {
    pub year: PillarStars,
    pub month: PillarStars,
    pub day: PillarStars,
    pub hour: PillarStars,
}

impl ByPillar {
    pub fn get(&self, pos: PillarPosition) -> &PillarStars {
        match pos {
            PillarPosition::Year => &self.year,
            PillarPosition::Month => &self.month,
            PillarPosition::Day => &self.day,
            PillarPosition::Hour => &self.hour,
        }
    }

    fn get_mut(&mut self, pos: PillarPosition) -> &mut PillarStars {
        match pos {
            PillarPosition::Year => &mut self.year,
            PillarPosition::Month => &mut self.month,
            PillarPosition::Day => &mut self.day,
            PillarPosition::Hour => &mut self.hour,
        }
    }
}

/// All twenty findings plus the aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShenshaResult {
    pub gender: Gender,
    pub findings: Vec<StarFinding>,
    pub active: Vec<Shensha>,
    pub by_pillar: ByPillar,
}

impl ShenshaResult {
    pub fn finding(&self, star: Shensha) -> &StarFinding {
        &self.findings[star as usize]
    }

    pub fn is_active(&self, star: Shensha) -> bool {
        self.active.contains(&star)
    }
}

/// Evaluate one star.
pub fn evaluate_star(spec: &StarSpec, chart: &FourPillars, gender: Gender) -> StarFinding {
    let found = spec.rule.detect(chart);
    let present = found.present();
    let active = present && spec.applies_to(gender);
    let mut attached = if active {
        spec.attach.attach(chart, &found)
    } else {
        Vec::new()
    };
    let simplified = spec.simplified_positions(chart);
    if active {
        for &pos in &simplified {
            if !attached.contains(&(pos, Slot::Branch)) {
                attached.push((pos, Slot::Branch));
            }
        }
    }
    let Found {
        targets,
        matched,
        base_hits,
        pairs,
        ..
    } = found;
    StarFinding {
        star: spec.star,
        present,
        active,
        gender_scope: spec.gender,
        targets,
        matched,
        base_hits,
        pairs,
        simplified,
        attached,
    }
}

/// Run all twenty star rules over a chart.
pub fn detect_shensha(chart: &FourPillars, gender: Gender) -> ShenshaResult {
    let findings: Vec<StarFinding> = STAR_SPECS
        .iter()
        .map(|spec| evaluate_star(spec, chart, gender))
        .collect();

    let active = findings
        .iter()
        .filter(|f| f.active)
        .map(|f| f.star)
        .collect();

    let mut by_pillar = ByPillar::default();
    for f in &findings {
        for &(pos, slot) in &f.attached {
            by_pillar.get_mut(pos).add(slot, f.star);
        }
    }

    ShenshaResult {
        gender,
        findings,
        active,
        by_pillar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(y: &str, m: &str, d: &str, h: Option<&str>) -> FourPillars {
        FourPillars::parse(y, m, d, h).unwrap()
    }

    #[test]
    fn specs_in_enum_order() {
        for (i, s) in STAR_SPECS.iter().enumerate() {
            assert_eq!(s.star as usize, i);
        }
    }

    #[test]
    fn exactly_two_gender_scoped() {
        let scoped: Vec<_> = STAR_SPECS.iter().filter(|s| s.gender.is_some()).collect();
        assert_eq!(scoped.len(), 2);
    }

    #[test]
    fn names_nonempty() {
        for s in &STAR_SPECS {
            assert!(!s.star.name().is_empty());
            assert!(!s.star.hanja().is_empty());
        }
    }

    #[test]
    fn findings_always_twenty() {
        let r = detect_shensha(&chart("壬子", "丙寅", "甲子", None), Gender::Male);
        assert_eq!(r.findings.len(), 20);
        assert_eq!(r.finding(Shensha::Void).star, Shensha::Void);
    }

    #[test]
    fn by_pillar_has_no_duplicates() {
        let r = detect_shensha(&chart("甲子", "丙子", "甲子", Some("甲子")), Gender::Male);
        for pos in crate::chart::ALL_POSITIONS {
            let stars = r.by_pillar.get(pos);
            let unique: std::collections::HashSet<_> = stars.branch.iter().collect();
            assert_eq!(unique.len(), stars.branch.len());
        }
    }
}
