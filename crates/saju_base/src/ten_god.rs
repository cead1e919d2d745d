//! Ten-god (sipseong) resolver.
//!
//! The relation between the day master and any other stem is fixed by the
//! forward distance from the day master's element to the target's element on
//! the generation ring, split by whether their polarities match:
//!
//! | step | relation | same polarity | different polarity |
//! |------|----------|---------------|--------------------|
//! | 0 | peer | peer-same 比肩 | peer-diff 劫財 |
//! | 1 | day master generates target | food-direct 食神 | food-indirect 傷官 |
//! | 2 | day master destroys target | wealth-indirect 偏財 | wealth-direct 正財 |
//! | 3 | target destroys day master | authority-indirect 偏官 | authority-direct 正官 |
//! | 4 | target generates day master | resource-indirect 偏印 | resource-direct 正印 |
//!
//! The five steps partition the ring, so every stem pair has a relation.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::hidden_stems::main_stem;
use crate::stem::Stem;

/// One of the 10 ten-god relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    PeerSame,
    PeerDiff,
    FoodDirect,
    FoodIndirect,
    WealthDirect,
    WealthIndirect,
    AuthorityDirect,
    AuthorityIndirect,
    ResourceDirect,
    ResourceIndirect,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::PeerSame,
    TenGod::PeerDiff,
    TenGod::FoodDirect,
    TenGod::FoodIndirect,
    TenGod::WealthDirect,
    TenGod::WealthIndirect,
    TenGod::AuthorityDirect,
    TenGod::AuthorityIndirect,
    TenGod::ResourceDirect,
    TenGod::ResourceIndirect,
];

/// The five relation families a ten-god belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGodFamily {
    Peer,
    Food,
    Wealth,
    Authority,
    Resource,
}

/// `[step][0 = same polarity, 1 = different polarity]`.
const BY_STEP: [[TenGod; 2]; 5] = [
    [TenGod::PeerSame, TenGod::PeerDiff],
    [TenGod::FoodDirect, TenGod::FoodIndirect],
    [TenGod::WealthIndirect, TenGod::WealthDirect],
    [TenGod::AuthorityIndirect, TenGod::AuthorityDirect],
    [TenGod::ResourceIndirect, TenGod::ResourceDirect],
];

impl TenGod {
    /// Canonical snake_case id.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PeerSame => "peer_same",
            Self::PeerDiff => "peer_diff",
            Self::FoodDirect => "food_direct",
            Self::FoodIndirect => "food_indirect",
            Self::WealthDirect => "wealth_direct",
            Self::WealthIndirect => "wealth_indirect",
            Self::AuthorityDirect => "authority_direct",
            Self::AuthorityIndirect => "authority_indirect",
            Self::ResourceDirect => "resource_direct",
            Self::ResourceIndirect => "resource_indirect",
        }
    }

    /// Classical two-character Han name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::PeerSame => "比肩",
            Self::PeerDiff => "劫財",
            Self::FoodDirect => "食神",
            Self::FoodIndirect => "傷官",
            Self::WealthDirect => "正財",
            Self::WealthIndirect => "偏財",
            Self::AuthorityDirect => "正官",
            Self::AuthorityIndirect => "偏官",
            Self::ResourceDirect => "正印",
            Self::ResourceIndirect => "偏印",
        }
    }

    pub const fn family(self) -> TenGodFamily {
        match self {
            Self::PeerSame | Self::PeerDiff => TenGodFamily::Peer,
            Self::FoodDirect | Self::FoodIndirect => TenGodFamily::Food,
            Self::WealthDirect | Self::WealthIndirect => TenGodFamily::Wealth,
            Self::AuthorityDirect | Self::AuthorityIndirect => TenGodFamily::Authority,
            Self::ResourceDirect | Self::ResourceIndirect => TenGodFamily::Resource,
        }
    }

    /// Peers and resources support the day master.
    pub const fn is_helping(self) -> bool {
        matches!(self.family(), TenGodFamily::Peer | TenGodFamily::Resource)
    }
}

/// Ten-god of `target` relative to `day_master`.
pub const fn ten_god(day_master: Stem, target: Stem) -> TenGod {
    let step = day_master.element().steps_to(target.element());
    let parity = if day_master.index() % 2 == target.index() % 2 { 0 } else { 1 };
    BY_STEP[step as usize][parity]
}

/// Ten-god of a branch, resolved against its dominant hidden stem only.
pub const fn branch_ten_god(day_master: Stem, branch: Branch) -> TenGod {
    ten_god(day_master, main_stem(branch))
}
