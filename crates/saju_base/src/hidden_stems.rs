//! Hidden stems (jijanggan): the stems each branch is held to contain.
//!
//! Two fixed tables are kept:
//! - the weighted decomposition used for strength scoring, one {10, 90} or
//!   {10, 30, 60} split per branch, always summing to 100;
//! - the classical day allotment of a 30-day month, used for display.
//!
//! Plus the single dominant (main) stem per branch, which is what the
//! ten-god of a branch is resolved against.

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

/// One entry of a branch's hidden-stem decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    /// Share out of 100 (weighted table) or days out of 30 (allotment table).
    pub weight: u8,
}

const fn hs(stem: Stem, weight: u8) -> HiddenStem {
    HiddenStem { stem, weight }
}

/// Weighted decomposition per branch, residual qi first and main qi last.
const WEIGHTED: [&[HiddenStem]; 12] = [
    &[hs(Stem::Ren, 10), hs(Stem::Gui, 90)],                    // 子
    &[hs(Stem::Gui, 10), hs(Stem::Xin, 30), hs(Stem::Ji, 60)],  // 丑
    &[hs(Stem::Wu, 10), hs(Stem::Bing, 30), hs(Stem::Jia, 60)], // 寅
    &[hs(Stem::Jia, 10), hs(Stem::Yi, 90)],                     // 卯
    &[hs(Stem::Yi, 10), hs(Stem::Gui, 30), hs(Stem::Wu, 60)],   // 辰
    &[hs(Stem::Wu, 10), hs(Stem::Geng, 30), hs(Stem::Bing, 60)], // 巳
    &[hs(Stem::Bing, 10), hs(Stem::Ji, 30), hs(Stem::Ding, 60)], // 午
    &[hs(Stem::Ding, 10), hs(Stem::Yi, 30), hs(Stem::Ji, 60)],  // 未
    &[hs(Stem::Wu, 10), hs(Stem::Ren, 30), hs(Stem::Geng, 60)], // 申
    &[hs(Stem::Geng, 10), hs(Stem::Xin, 90)],                   // 酉
    &[hs(Stem::Xin, 10), hs(Stem::Ding, 30), hs(Stem::Wu, 60)], // 戌
    &[hs(Stem::Wu, 10), hs(Stem::Jia, 30), hs(Stem::Ren, 60)],  // 亥
];

/// Day allotment per branch (days of a 30-day month).
const ALLOTMENT: [&[HiddenStem]; 12] = [
    &[hs(Stem::Ren, 10), hs(Stem::Gui, 20)],                   // 子
    &[hs(Stem::Gui, 9), hs(Stem::Xin, 3), hs(Stem::Ji, 18)],   // 丑
    &[hs(Stem::Wu, 7), hs(Stem::Bing, 7), hs(Stem::Jia, 16)],  // 寅
    &[hs(Stem::Jia, 10), hs(Stem::Yi, 20)],                    // 卯
    &[hs(Stem::Yi, 9), hs(Stem::Gui, 3), hs(Stem::Wu, 18)],    // 辰
    &[hs(Stem::Wu, 7), hs(Stem::Geng, 7), hs(Stem::Bing, 16)], // 巳
    &[hs(Stem::Bing, 10), hs(Stem::Ji, 9), hs(Stem::Ding, 11)], // 午
    &[hs(Stem::Ding, 9), hs(Stem::Yi, 3), hs(Stem::Ji, 18)],   // 未
    &[hs(Stem::Wu, 7), hs(Stem::Ren, 7), hs(Stem::Geng, 16)],  // 申
    &[hs(Stem::Geng, 10), hs(Stem::Xin, 20)],                  // 酉
    &[hs(Stem::Xin, 9), hs(Stem::Ding, 3), hs(Stem::Wu, 18)],  // 戌
    &[hs(Stem::Wu, 7), hs(Stem::Jia, 7), hs(Stem::Ren, 16)],   // 亥
];

const MAIN_STEM: [Stem; 12] = [
    Stem::Gui,  // 子
    Stem::Ji,   // 丑
    Stem::Jia,  // 寅
    Stem::Yi,   // 卯
    Stem::Wu,   // 辰
    Stem::Bing, // 巳
    Stem::Ding, // 午
    Stem::Ji,   // 未
    Stem::Geng, // 申
    Stem::Xin,  // 酉
    Stem::Wu,   // 戌
    Stem::Ren,  // 亥
];

/// Weighted hidden-stem decomposition of a branch (weights sum to 100).
pub fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    WEIGHTED[branch.index() as usize]
}

/// Classical day allotment of a branch (days sum to 30).
pub fn hidden_stem_days(branch: Branch) -> &'static [HiddenStem] {
    ALLOTMENT[branch.index() as usize]
}

/// The dominant hidden stem of a branch.
pub const fn main_stem(branch: Branch) -> Stem {
    MAIN_STEM[branch.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn weights_sum_to_100() {
        for b in ALL_BRANCHES {
            let total: u32 = hidden_stems(b).iter().map(|h| h.weight as u32).sum();
            assert_eq!(total, 100, "{b}");
        }
    }

    #[test]
    fn split_shapes() {
        for b in ALL_BRANCHES {
            let weights: Vec<u8> = hidden_stems(b).iter().map(|h| h.weight).collect();
            assert!(
                weights == [10, 90] || weights == [10, 30, 60],
                "{b}: {weights:?}"
            );
        }
    }

    #[test]
    fn days_sum_to_30() {
        for b in ALL_BRANCHES {
            let total: u32 = hidden_stem_days(b).iter().map(|h| h.weight as u32).sum();
            assert_eq!(total, 30, "{b}");
        }
    }

    #[test]
    fn main_stem_is_heaviest() {
        for b in ALL_BRANCHES {
            let heaviest = hidden_stems(b).iter().max_by_key(|h| h.weight).map(|h| h.stem);
            assert_eq!(heaviest, Some(main_stem(b)), "{b}");
        }
    }

    #[test]
    fn tables_list_same_stems() {
        for b in ALL_BRANCHES {
            let a: Vec<Stem> = hidden_stems(b).iter().map(|h| h.stem).collect();
            let d: Vec<Stem> = hidden_stem_days(b).iter().map(|h| h.stem).collect();
            assert_eq!(a, d, "{b}");
        }
    }

    #[test]
    fn snake_main_is_bing() {
        assert_eq!(main_stem(Branch::Si), Stem::Bing);
    }
}
