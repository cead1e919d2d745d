//! Rule descriptors: how a star is detected and where it attaches.

use crate::branch::Branch;
use crate::chart::{ALL_POSITIONS, FourPillars, Gender, PillarPosition};
use crate::sexagenary::Pillar;
use crate::stem::Stem;

use super::tables::void_branches;
use super::{BaseHit, Shensha, Slot, Symbol};

/// Where a rule looks for its month-derived target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Stems,
    Branches,
    Both,
}

/// Detection pattern of a star.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Day stem selects a set of branches; any chart branch in the set hits.
    DayStemBranches(&'static [&'static [Branch]; 10]),
    /// Month branch selects one stem or branch, looked for within `scope`.
    MonthBranchTarget {
        table: &'static [Symbol; 12],
        scope: Scope,
    },
    /// Each base position's branch selects a target branch independently.
    BaseBranchTarget {
        table: &'static [Branch; 12],
        bases: &'static [PillarPosition],
    },
    /// The day pillar belongs to a fixed set.
    DayPillarSet(&'static [Pillar]),
    /// Both members of a fixed branch pair occur in the chart.
    BranchPairs(&'static [(Branch, Branch)]),
    /// Chart branches fall in the day pillar's void.
    Void,
    /// Any chart stem or branch is one of a fixed set of symbols.
    SymbolSet(&'static [Symbol]),
}

/// Where a detected star is attached in the by-pillar map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    /// Branch bucket of every position whose branch matched.
    TargetBranch,
    /// Stem bucket of every position whose stem matched.
    TargetStem,
    /// Both buckets, wherever the stem or branch matched.
    TargetBoth,
    /// Branch bucket of the day pillar only.
    DayOnly,
    /// Branch bucket of every position holding a member of a matched pair.
    PairMembers,
}

/// Everything needed to evaluate one star.
#[derive(Debug, Clone, Copy)]
pub struct StarSpec {
    pub star: Shensha,
    pub rule: Rule,
    pub attach: Attach,
    /// Star only counts for charts of this gender.
    pub gender: Option<Gender>,
    /// Alternate membership reading, attached alongside the main one.
    pub simplified: Option<&'static [Branch]>,
}

/// Raw outcome of running a rule over a chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Found {
    pub targets: Vec<Symbol>,
    pub matched: Vec<Symbol>,
    pub base_hits: Vec<BaseHit>,
    pub pairs: Vec<(Branch, Branch)>,
    pub day_pillar: bool,
}

impl Found {
    pub fn present(&self) -> bool {
        self.day_pillar || !self.matched.is_empty() || !self.pairs.is_empty()
    }
}

fn push_unique<T: PartialEq>(v: &mut Vec<T>, item: T) {
    if !v.contains(&item) {
        v.push(item);
    }
}

fn symbols_in(chart: &FourPillars, scope: Scope) -> Vec<Symbol> {
    let stems = chart.stems().map(Symbol::Stem);
    let branches = chart.branches().map(Symbol::Branch);
    match scope {
        Scope::Stems => stems.collect(),
        Scope::Branches => branches.collect(),
        Scope::Both => stems.chain(branches).collect(),
    }
}

impl Rule {
    pub fn detect(&self, chart: &FourPillars) -> Found {
        let mut found = Found::default();
        match *self {
            Self::DayStemBranches(table) => {
                let set = table[chart.day_master().index() as usize];
                found.targets = set.iter().copied().map(Symbol::Branch).collect();
                found.matched = chart
                    .branches()
                    .filter(|b| set.contains(b))
                    .map(Symbol::Branch)
                    .collect();
            }
            Self::MonthBranchTarget { table, scope } => {
                let target = table[chart.month.branch.index() as usize];
                found.targets.push(target);
                found.matched = symbols_in(chart, scope)
                    .into_iter()
                    .filter(|s| *s == target)
                    .collect();
            }
            Self::BaseBranchTarget { table, bases } => {
                for &base in bases {
                    let Some(base_branch) = chart.branch_at(base) else {
                        continue;
                    };
                    let target = table[base_branch.index() as usize];
                    push_unique(&mut found.targets, Symbol::Branch(target));
                    if chart.has_branch(target) {
                        found.base_hits.push(BaseHit { base, target });
                        push_unique(&mut found.matched, Symbol::Branch(target));
                    }
                }
            }
            Self::DayPillarSet(set) => {
                found.day_pillar = set.contains(&chart.day);
            }
            Self::BranchPairs(pairs) => {
                for &(a, b) in pairs {
                    if chart.has_branch(a) && chart.has_branch(b) {
                        found.pairs.push((a, b));
                    }
                }
            }
            Self::Void => {
                if let Some(void) = void_branches(chart.day) {
                    found.targets = void.iter().copied().map(Symbol::Branch).collect();
                    found.matched = chart
                        .branches()
                        .filter(|b| void.contains(b))
                        .map(Symbol::Branch)
                        .collect();
                }
            }
            Self::SymbolSet(set) => {
                found.targets = set.to_vec();
                found.matched = symbols_in(chart, Scope::Both)
                    .into_iter()
                    .filter(|s| set.contains(s))
                    .collect();
            }
        }
        found
    }
}

impl Attach {
    /// Slots of the chart this star attaches to.
    pub fn attach(&self, chart: &FourPillars, found: &Found) -> Vec<(PillarPosition, Slot)> {
        let stem_hit = |s: Stem| found.matched.contains(&Symbol::Stem(s));
        let branch_hit = |b: Branch| found.matched.contains(&Symbol::Branch(b));
        let mut out = Vec::new();
        match self {
            Self::TargetBranch => {
                for pos in ALL_POSITIONS {
                    if chart.branch_at(pos).is_some_and(branch_hit) {
                        out.push((pos, Slot::Branch));
                    }
                }
            }
            Self::TargetStem => {
                for pos in ALL_POSITIONS {
                    if chart.stem_at(pos).is_some_and(stem_hit) {
                        out.push((pos, Slot::Stem));
                    }
                }
            }
            Self::TargetBoth => {
                for pos in ALL_POSITIONS {
                    if chart.stem_at(pos).is_some_and(stem_hit) {
                        out.push((pos, Slot::Stem));
                    }
                    if chart.branch_at(pos).is_some_and(branch_hit) {
                        out.push((pos, Slot::Branch));
                    }
                }
            }
            Self::DayOnly => out.push((PillarPosition::Day, Slot::Branch)),
            Self::PairMembers => {
                for pos in ALL_POSITIONS {
                    let Some(b) = chart.branch_at(pos) else {
                        continue;
                    };
                    if found.pairs.iter().any(|&(x, y)| b == x || b == y) {
                        out.push((pos, Slot::Branch));
                    }
                }
            }
        }
        out
    }
}

impl StarSpec {
    /// Positions matched by the simplified reading, if the star has one.
    pub fn simplified_positions(&self, chart: &FourPillars) -> Vec<PillarPosition> {
        let Some(set) = self.simplified else {
            return Vec::new();
        };
        chart
            .present()
            .filter(|(_, p)| set.contains(&p.branch))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Whether the star counts for a chart of `gender`.
    pub fn applies_to(&self, gender: Gender) -> bool {
        self.gender.is_none_or(|g| g == gender)
    }
}
