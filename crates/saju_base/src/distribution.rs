//! Five-element distribution: a plain count of elements across the chart.
//!
//! Each present stem counts 1.0 and each present branch 0.7 toward its own
//! element. Hidden stems are not considered.

use serde::Serialize;

use crate::chart::FourPillars;
use crate::element::{ALL_ELEMENTS, Element};
use crate::util::percent1;

pub const STEM_COUNT: f64 = 1.0;
pub const BRANCH_COUNT: f64 = 0.7;

/// Raw counts and rounded percentages, both in wood..water order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementDistribution {
    pub score: [f64; 5],
    pub percent: [f64; 5],
}

impl ElementDistribution {
    pub fn score_of(&self, e: Element) -> f64 {
        self.score[e.index() as usize]
    }

    pub fn percent_of(&self, e: Element) -> f64 {
        self.percent[e.index() as usize]
    }

    /// Elements with no presence at all.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|e| self.score_of(*e) == 0.0)
            .collect()
    }

    /// Element with the highest count; earlier elements win ties.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.score_of(e) > self.score_of(best) {
                best = e;
            }
        }
        best
    }
}

pub fn element_distribution(chart: &FourPillars) -> ElementDistribution {
    let mut score = [0.0f64; 5];
    for (_, p) in chart.present() {
        score[p.stem.element().index() as usize] += STEM_COUNT;
        score[p.branch.element().index() as usize] += BRANCH_COUNT;
    }
    let sum: f64 = score.iter().sum();
    let total = if sum > 0.0 { sum } else { 1.0 };
    let percent = score.map(|v| percent1(v, total));
    ElementDistribution { score, percent }
}
