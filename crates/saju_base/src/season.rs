//! Seasons and the seasonal vigour ratios (wangsang hyusu sa).
//!
//! The month branch places a chart in one of five seasons, each ruled by an
//! element. Every element then receives a ratio by its generation-ring
//! distance from the ruler: ruler 1.0, the element it generates 0.8, the
//! element generating it 0.6, the element destroying it 0.4, the element it
//! destroys 0.2.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;

/// One of the five season categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Wood,
    Fire,
    /// Transitional months 辰 未 戌 丑.
    Earth,
    Metal,
    Water,
}

pub const ALL_SEASONS: [Season; 5] = [
    Season::Wood,
    Season::Fire,
    Season::Earth,
    Season::Metal,
    Season::Water,
];

const BRANCH_SEASON: [Season; 12] = [
    Season::Water, // 子
    Season::Earth, // 丑
    Season::Wood,  // 寅
    Season::Wood,  // 卯
    Season::Earth, // 辰
    Season::Fire,  // 巳
    Season::Fire,  // 午
    Season::Earth, // 未
    Season::Metal, // 申
    Season::Metal, // 酉
    Season::Earth, // 戌
    Season::Water, // 亥
];

/// `[season][element]`, elements in wood..water order.
const RATIOS: [[f64; 5]; 5] = [
    [1.0, 0.8, 0.2, 0.4, 0.6], // wood season
    [0.6, 1.0, 0.8, 0.2, 0.4], // fire season
    [0.4, 0.6, 1.0, 0.8, 0.2], // earth season
    [0.2, 0.4, 0.6, 1.0, 0.8], // metal season
    [0.8, 0.2, 0.4, 0.6, 1.0], // water season
];

impl Season {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Season of a month branch; with no month branch the earth season applies.
    pub const fn from_month_branch(month_branch: Option<Branch>) -> Self {
        match month_branch {
            Some(b) => BRANCH_SEASON[b.index() as usize],
            None => Self::Earth,
        }
    }

    /// Element ruling the season.
    pub const fn ruler(self) -> Element {
        match self {
            Self::Wood => Element::Wood,
            Self::Fire => Element::Fire,
            Self::Earth => Element::Earth,
            Self::Metal => Element::Metal,
            Self::Water => Element::Water,
        }
    }

    /// Seasonal ratio of an element.
    pub const fn ratio(self, element: Element) -> f64 {
        RATIOS[self.index() as usize][element.index() as usize]
    }

    /// Ratios for all five elements in wood..water order.
    pub const fn ratios(self) -> [f64; 5] {
        RATIOS[self.index() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_ELEMENTS;

    #[test]
    fn ratios_follow_ring_distance() {
        const BY_STEP: [f64; 5] = [1.0, 0.8, 0.2, 0.4, 0.6];
        for season in ALL_SEASONS {
            for e in ALL_ELEMENTS {
                let step = season.ruler().steps_to(e) as usize;
                assert_eq!(season.ratio(e), BY_STEP[step], "{season:?}/{e:?}");
            }
        }
    }

    #[test]
    fn each_ratio_once_per_season() {
        for season in ALL_SEASONS {
            let mut r = season.ratios();
            r.sort_by(|a, b| a.total_cmp(b));
            assert_eq!(r, [0.2, 0.4, 0.6, 0.8, 1.0]);
        }
    }

    #[test]
    fn wood_season_values() {
        let s = Season::from_month_branch(Some(Branch::Yin));
        assert_eq!(s, Season::Wood);
        assert_eq!(s.ratio(Element::Wood), 1.0);
        assert_eq!(s.ratio(Element::Fire), 0.8);
        assert_eq!(s.ratio(Element::Water), 0.6);
        assert_eq!(s.ratio(Element::Metal), 0.4);
        assert_eq!(s.ratio(Element::Earth), 0.2);
    }

    #[test]
    fn missing_month_defaults_to_earth() {
        assert_eq!(Season::from_month_branch(None), Season::Earth);
    }

    #[test]
    fn transitional_branches() {
        for b in [Branch::Chen, Branch::Wei, Branch::Xu, Branch::Chou] {
            assert_eq!(Season::from_month_branch(Some(b)), Season::Earth);
        }
    }
}
