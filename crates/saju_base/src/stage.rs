//! Twelve life stages (sibi unseong) of a stem across the branches.
//!
//! Each stem is born (growth) at a fixed branch and walks the twelve stages
//! clockwise through the branches when yang, counter-clockwise when yin.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// One of the 12 life stages, in ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwelveStage {
    /// 長生
    Growth,
    /// 沐浴
    Bath,
    /// 冠帶
    Maturity,
    /// 建祿
    Prime,
    /// 帝旺
    Peak,
    /// 衰
    Decline,
    /// 病
    Sickness,
    /// 死
    Death,
    /// 墓
    Tomb,
    /// 絶
    Extinction,
    /// 胎
    Conception,
    /// 養
    Nurture,
}

pub const ALL_STAGES: [TwelveStage; 12] = [
    TwelveStage::Growth,
    TwelveStage::Bath,
    TwelveStage::Maturity,
    TwelveStage::Prime,
    TwelveStage::Peak,
    TwelveStage::Decline,
    TwelveStage::Sickness,
    TwelveStage::Death,
    TwelveStage::Tomb,
    TwelveStage::Extinction,
    TwelveStage::Conception,
    TwelveStage::Nurture,
];

impl TwelveStage {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Bath => "bath",
            Self::Maturity => "maturity",
            Self::Prime => "prime",
            Self::Peak => "peak",
            Self::Decline => "decline",
            Self::Sickness => "sickness",
            Self::Death => "death",
            Self::Tomb => "tomb",
            Self::Extinction => "extinction",
            Self::Conception => "conception",
            Self::Nurture => "nurture",
        }
    }

    /// Growth, maturity, prime and peak.
    pub const fn is_vigorous(self) -> bool {
        matches!(self, Self::Growth | Self::Maturity | Self::Prime | Self::Peak)
    }
}

use TwelveStage::{
    Bath, Conception, Death, Decline, Extinction, Growth, Maturity, Nurture, Peak, Prime,
    Sickness, Tomb,
};

/// `[stem][branch]`, branches in 子..亥 order.
const STAGE_TABLE: [[TwelveStage; 12]; 10] = [
    [Bath, Maturity, Prime, Peak, Decline, Sickness, Death, Tomb, Extinction, Conception, Nurture, Growth], // 甲
    [Sickness, Decline, Peak, Prime, Maturity, Bath, Growth, Nurture, Conception, Extinction, Tomb, Death], // 乙
    [Conception, Nurture, Growth, Bath, Maturity, Prime, Peak, Decline, Sickness, Death, Tomb, Extinction], // 丙
    [Extinction, Tomb, Death, Sickness, Decline, Peak, Prime, Maturity, Bath, Growth, Nurture, Conception], // 丁
    [Conception, Nurture, Growth, Bath, Maturity, Prime, Peak, Decline, Sickness, Death, Tomb, Extinction], // 戊
    [Extinction, Tomb, Death, Sickness, Decline, Peak, Prime, Maturity, Bath, Growth, Nurture, Conception], // 己
    [Death, Tomb, Extinction, Conception, Nurture, Growth, Bath, Maturity, Prime, Peak, Decline, Sickness], // 庚
    [Growth, Nurture, Conception, Extinction, Tomb, Death, Sickness, Decline, Peak, Prime, Maturity, Bath], // 辛
    [Peak, Decline, Sickness, Death, Tomb, Extinction, Conception, Nurture, Growth, Bath, Maturity, Prime], // 壬
    [Prime, Maturity, Bath, Growth, Nurture, Conception, Extinction, Tomb, Death, Sickness, Decline, Peak], // 癸
];

/// Branch where each stem's growth stage sits.
const GROWTH_BRANCH: [Branch; 10] = [
    Branch::Hai,  // 甲
    Branch::Wu,   // 乙
    Branch::Yin,  // 丙
    Branch::You,  // 丁
    Branch::Yin,  // 戊
    Branch::You,  // 己
    Branch::Si,   // 庚
    Branch::Zi,   // 辛
    Branch::Shen, // 壬
    Branch::Mao,  // 癸
];

/// Life stage of `stem` at `branch`.
pub const fn twelve_stage(stem: Stem, branch: Branch) -> TwelveStage {
    STAGE_TABLE[stem.index() as usize][branch.index() as usize]
}

/// Branch of a stem's growth stage.
pub const fn growth_branch(stem: Stem) -> Branch {
    GROWTH_BRANCH[stem.index() as usize]
}
