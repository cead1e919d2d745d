//! Twelve spirits (sibi sinsal), read from the year branch's three-harmony
//! group.
//!
//! Each group (申子辰, 巳酉丑, 寅午戌, 亥卯未) starts its robbery spirit on the
//! branch after the group's tomb, then the twelve spirits follow the
//! branches in order.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwelveSpirit {
    /// 劫殺
    Robbery,
    /// 災殺
    Disaster,
    /// 天殺
    Heaven,
    /// 地殺
    Earth,
    /// 桃花殺 (also 年殺)
    Peach,
    /// 月殺
    Month,
    /// 亡身殺
    Ruin,
    /// 將星殺
    General,
    /// 攀鞍殺
    Saddle,
    /// 驛馬殺
    Travel,
    /// 六害殺
    SixHarm,
    /// 華蓋殺
    Canopy,
}

pub const ALL_TWELVE_SPIRITS: [TwelveSpirit; 12] = [
    TwelveSpirit::Robbery,
    TwelveSpirit::Disaster,
    TwelveSpirit::Heaven,
    TwelveSpirit::Earth,
    TwelveSpirit::Peach,
    TwelveSpirit::Month,
    TwelveSpirit::Ruin,
    TwelveSpirit::General,
    TwelveSpirit::Saddle,
    TwelveSpirit::Travel,
    TwelveSpirit::SixHarm,
    TwelveSpirit::Canopy,
];

/// Robbery branch per group, indexed by `branch.index() % 4`
/// (0 = 申子辰, 1 = 巳酉丑, 2 = 寅午戌, 3 = 亥卯未).
const ROBBERY_START: [Branch; 4] = [Branch::Si, Branch::Yin, Branch::Hai, Branch::Shen];

impl TwelveSpirit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Robbery => "robbery",
            Self::Disaster => "disaster",
            Self::Heaven => "heaven",
            Self::Earth => "earth",
            Self::Peach => "peach",
            Self::Month => "month",
            Self::Ruin => "ruin",
            Self::General => "general",
            Self::Saddle => "saddle",
            Self::Travel => "travel",
            Self::SixHarm => "six_harm",
            Self::Canopy => "canopy",
        }
    }
}

/// Spirit of `target` relative to the year branch `base`.
pub const fn twelve_spirit(base: Branch, target: Branch) -> TwelveSpirit {
    let start = ROBBERY_START[(base.index() % 4) as usize];
    let step = (target.index() as i32 - start.index() as i32).rem_euclid(12);
    ALL_TWELVE_SPIRITS[step as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    /// The three branches of a branch's three-harmony group, growth first.
    fn harmony_group(branch: Branch) -> [Branch; 3] {
        let start = ROBBERY_START[(branch.index() % 4) as usize];
        // growth sits at earth spirit, three after robbery
        let growth = start.offset(3);
        [growth, growth.offset(4), growth.offset(8)]
    }

    #[test]
    fn group_members_share_start() {
        for b in ALL_BRANCHES {
            for member in harmony_group(b) {
                assert_eq!(harmony_group(member), harmony_group(b), "{b} / {member}");
            }
        }
        assert_eq!(harmony_group(Branch::Zi), [Branch::Shen, Branch::Zi, Branch::Chen]);
        assert_eq!(harmony_group(Branch::You), [Branch::Si, Branch::You, Branch::Chou]);
    }

    #[test]
    fn si_you_chou_row() {
        use TwelveSpirit::*;
        let base = Branch::You;
        assert_eq!(twelve_spirit(base, Branch::Yin), Robbery);
        assert_eq!(twelve_spirit(base, Branch::Wu), Peach);
        assert_eq!(twelve_spirit(base, Branch::Hai), Travel);
        assert_eq!(twelve_spirit(base, Branch::Chou), Canopy);
    }

    #[test]
    fn other_groups() {
        assert_eq!(twelve_spirit(Branch::Zi, Branch::Si), TwelveSpirit::Robbery);
        assert_eq!(twelve_spirit(Branch::Zi, Branch::Yin), TwelveSpirit::Travel);
        assert_eq!(twelve_spirit(Branch::Mao, Branch::Shen), TwelveSpirit::Robbery);
        assert_eq!(twelve_spirit(Branch::Mao, Branch::Wei), TwelveSpirit::Canopy);
        assert_eq!(twelve_spirit(Branch::Wu, Branch::Hai), TwelveSpirit::Robbery);
        assert_eq!(twelve_spirit(Branch::Wu, Branch::Wu), TwelveSpirit::General);
    }

    #[test]
    fn every_spirit_once_per_base() {
        for base in ALL_BRANCHES {
            let set: std::collections::HashSet<_> =
                ALL_BRANCHES.iter().map(|&t| twelve_spirit(base, t)).collect();
            assert_eq!(set.len(), 12);
        }
    }
}
