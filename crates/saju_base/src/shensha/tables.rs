//! Target tables for the shensha rules.
//!
//! Per-stem tables are indexed by stem (甲..癸), per-branch tables by branch
//! (子..亥).

use crate::branch::Branch;
use crate::sexagenary::Pillar;
use crate::stem::Stem;

use super::Symbol;

use Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};

// ── Day stem → branches ──────────────────────────────────────────────

/// 天乙貴人
pub(crate) const HEAVENLY_NOBLE: [&[Branch]; 10] = [
    &[Chou, Wei], // 甲
    &[Zi, Shen],  // 乙
    &[You, Hai],  // 丙
    &[You, Hai],  // 丁
    &[Chou, Wei], // 戊
    &[Zi, Shen],  // 己
    &[Chou, Wei], // 庚
    &[Yin, Wu],   // 辛
    &[Mao, Si],   // 壬
    &[Mao, Si],   // 癸
];

/// 太極貴人
pub(crate) const SUPREME_NOBLE: [&[Branch]; 10] = [
    &[Zi, Wu],               // 甲
    &[Zi, Wu],               // 乙
    &[Mao, You],             // 丙
    &[Mao, You],             // 丁
    &[Chen, Xu, Chou, Wei],  // 戊
    &[Chen, Xu, Chou, Wei],  // 己
    &[Yin, Hai],             // 庚
    &[Yin, Hai],             // 辛
    &[Si, Shen],             // 壬
    &[Si, Shen],             // 癸
];

/// 紅艶殺
pub(crate) const RED_GLAMOUR: [&[Branch]; 10] = [
    &[Wu, Shen], // 甲
    &[Wu],       // 乙
    &[Yin],      // 丙
    &[Wei],      // 丁
    &[Chen],     // 戊
    &[Chen],     // 己
    &[Xu, Shen], // 庚
    &[You],      // 辛
    &[Zi, Shen], // 壬
    &[Shen],     // 癸
];

/// 文昌貴人
pub(crate) const LITERARY_STAR: [&[Branch]; 10] = [
    &[Si],   // 甲
    &[Wu],   // 乙
    &[Shen], // 丙
    &[You],  // 丁
    &[Shen], // 戊
    &[You],  // 己
    &[Hai],  // 庚
    &[Zi],   // 辛
    &[Yin],  // 壬
    &[Mao],  // 癸
];

/// 羊刃殺, yang stems only.
pub(crate) const BLADE: [&[Branch]; 10] = [
    &[Mao], // 甲
    &[],    // 乙
    &[Wu],  // 丙
    &[],    // 丁
    &[Wu],  // 戊
    &[],    // 己
    &[You], // 庚
    &[],    // 辛
    &[Zi],  // 壬
    &[],    // 癸
];

// ── Month branch → stem or branch ────────────────────────────────────

/// 天德貴人
pub(crate) const HEAVENLY_VIRTUE: [Symbol; 12] = [
    Symbol::Branch(Si),        // 子
    Symbol::Stem(Stem::Geng),  // 丑
    Symbol::Stem(Stem::Ding),  // 寅
    Symbol::Branch(Shen),      // 卯
    Symbol::Stem(Stem::Ren),   // 辰
    Symbol::Stem(Stem::Xin),   // 巳
    Symbol::Branch(Hai),       // 午
    Symbol::Stem(Stem::Jia),   // 未
    Symbol::Stem(Stem::Gui),   // 申
    Symbol::Branch(Yin),       // 酉
    Symbol::Stem(Stem::Bing),  // 戌
    Symbol::Stem(Stem::Yi),    // 亥
];

/// 月德貴人: the yang stem of the month's three-harmony element.
pub(crate) const MONTHLY_VIRTUE: [Symbol; 12] = [
    Symbol::Stem(Stem::Ren),  // 子
    Symbol::Stem(Stem::Geng), // 丑
    Symbol::Stem(Stem::Bing), // 寅
    Symbol::Stem(Stem::Jia),  // 卯
    Symbol::Stem(Stem::Ren),  // 辰
    Symbol::Stem(Stem::Geng), // 巳
    Symbol::Stem(Stem::Bing), // 午
    Symbol::Stem(Stem::Jia),  // 未
    Symbol::Stem(Stem::Ren),  // 申
    Symbol::Stem(Stem::Geng), // 酉
    Symbol::Stem(Stem::Bing), // 戌
    Symbol::Stem(Stem::Jia),  // 亥
];

/// 天醫星: the branch before the month branch.
pub(crate) const HEAVENLY_DOCTOR: [Symbol; 12] = {
    let mut t = [Symbol::Branch(Zi); 12];
    let mut i = 0;
    while i < 12 {
        t[i] = Symbol::Branch(Branch::from_index(i as i32 - 1));
        i += 1;
    }
    t
};

// ── Base branch → branch ─────────────────────────────────────────────

/// 桃花殺
pub(crate) const PEACH_BLOSSOM: [Branch; 12] = [
    You, Wu, Mao, Zi, You, Wu, Mao, Zi, You, Wu, Mao, Zi,
];

/// 驛馬殺
pub(crate) const TRAVEL_HORSE: [Branch; 12] = [
    Yin, Hai, Shen, Si, Yin, Hai, Shen, Si, Yin, Hai, Shen, Si,
];

/// 華蓋殺
pub(crate) const CANOPY: [Branch; 12] = [
    Chen, Chou, Xu, Wei, Chen, Chou, Xu, Wei, Chen, Chou, Xu, Wei,
];

/// 寡宿殺, read from the year branch's season.
pub(crate) const WIDOW: [Branch; 12] = [
    Xu, Xu, Chou, Chou, Chou, Chen, Chen, Chen, Wei, Wei, Wei, Xu,
];

/// 孤辰殺, read from the year branch's season.
pub(crate) const LONELY: [Branch; 12] = [
    Yin, Yin, Si, Si, Si, Shen, Shen, Shen, Hai, Hai, Hai, Yin,
];

/// Travel-horse branches for the simplified reading (the four growth branches).
pub(crate) const TRAVEL_SIMPLIFIED: &[Branch] = &[Yin, Shen, Si, Hai];

// ── Day pillar sets ──────────────────────────────────────────────────

/// 魁罡殺
pub(crate) const COMMANDER: &[Pillar] = &[
    Pillar::new(Stem::Geng, Chen),
    Pillar::new(Stem::Geng, Xu),
    Pillar::new(Stem::Ren, Chen),
    Pillar::new(Stem::Wu, Xu),
];

/// 白虎殺
pub(crate) const WHITE_TIGER: &[Pillar] = &[
    Pillar::new(Stem::Jia, Chen),
    Pillar::new(Stem::Yi, Wei),
    Pillar::new(Stem::Bing, Xu),
    Pillar::new(Stem::Ding, Chou),
    Pillar::new(Stem::Wu, Chen),
    Pillar::new(Stem::Ren, Xu),
    Pillar::new(Stem::Gui, Chou),
];

/// 孤鸞殺
pub(crate) const LONELY_PHOENIX: &[Pillar] = &[
    Pillar::new(Stem::Jia, Yin),
    Pillar::new(Stem::Yi, Si),
    Pillar::new(Stem::Ding, Si),
    Pillar::new(Stem::Wu, Shen),
    Pillar::new(Stem::Xin, Hai),
];

// ── Branch pairs ─────────────────────────────────────────────────────

/// 怨嗔殺
pub(crate) const GRUDGE_PAIRS: &[(Branch, Branch)] = &[
    (Zi, Wei),
    (Chou, Wu),
    (Yin, You),
    (Mao, Shen),
    (Chen, Hai),
    (Si, Xu),
];

/// 鬼門關殺
pub(crate) const GHOST_GATE_PAIRS: &[(Branch, Branch)] = &[
    (Zi, You),
    (Chou, Wu),
    (Yin, Wei),
    (Mao, Shen),
    (Chen, Hai),
    (Si, Xu),
];

// ── Raw symbols ──────────────────────────────────────────────────────

/// 懸針殺: characters with a hanging-needle stroke.
pub(crate) const HANGING_NEEDLE: &[Symbol] = &[
    Symbol::Stem(Stem::Jia),
    Symbol::Stem(Stem::Xin),
    Symbol::Branch(Shen),
    Symbol::Branch(Mao),
    Symbol::Branch(Wu),
];

// ── Void ─────────────────────────────────────────────────────────────

/// 空亡 per xun (`cycle_index / 10`): the two branches the xun skips.
const VOID_BY_XUN: [[Branch; 2]; 6] = [
    [Xu, Hai],
    [Shen, You],
    [Wu, Wei],
    [Chen, Si],
    [Yin, Mao],
    [Zi, Chou],
];

/// Void branches for a day pillar; `None` when the pillar is outside the 60-cycle.
pub fn void_branches(day: Pillar) -> Option<[Branch; 2]> {
    day.xun_index().map(|x| VOID_BY_XUN[x as usize])
}
