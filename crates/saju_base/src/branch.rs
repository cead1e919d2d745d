//! The twelve earthly branches (jiji) and their zodiac animals.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::SymbolError;

/// One of the 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water, // 子
    Element::Earth, // 丑
    Element::Wood,  // 寅
    Element::Wood,  // 卯
    Element::Earth, // 辰
    Element::Fire,  // 巳
    Element::Fire,  // 午
    Element::Earth, // 未
    Element::Metal, // 申
    Element::Metal, // 酉
    Element::Earth, // 戌
    Element::Water, // 亥
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at a cycle position, wrapping modulo 12.
    pub const fn from_index(i: i32) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Canonical pinyin id.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// Han character.
    pub const fn hanja(self) -> char {
        match self {
            Self::Zi => '子',
            Self::Chou => '丑',
            Self::Yin => '寅',
            Self::Mao => '卯',
            Self::Chen => '辰',
            Self::Si => '巳',
            Self::Wu => '午',
            Self::Wei => '未',
            Self::Shen => '申',
            Self::You => '酉',
            Self::Xu => '戌',
            Self::Hai => '亥',
        }
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub const fn zodiac(self) -> Zodiac {
        ALL_ZODIAC[self.index() as usize]
    }

    /// The branch `n` steps forward (negative for backward).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index(self.index() as i32 + n)
    }

    /// Branch from its Han character.
    pub fn from_char(c: char) -> Result<Self, SymbolError> {
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.hanja() == c)
            .ok_or(SymbolError::UnknownBranch(c))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl std::str::FromStr for Branch {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if !c.is_ascii() {
                return Self::from_char(c);
            }
        }
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name() == s)
            .ok_or_else(|| SymbolError::UnknownName(s.to_string()))
    }
}

/// Zodiac animal of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

pub const ALL_ZODIAC: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

impl Zodiac {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "rat",
            Self::Ox => "ox",
            Self::Tiger => "tiger",
            Self::Rabbit => "rabbit",
            Self::Dragon => "dragon",
            Self::Snake => "snake",
            Self::Horse => "horse",
            Self::Goat => "goat",
            Self::Monkey => "monkey",
            Self::Rooster => "rooster",
            Self::Dog => "dog",
            Self::Pig => "pig",
        }
    }
}
