//! The ten heavenly stems (cheongan).
//!
//! Stems pair off into elements in generation order, yang before yin:
//! 甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal, 壬癸 water.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::SymbolError;

/// One of the 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cycle position, wrapping modulo 10.
    pub const fn from_index(i: i32) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Canonical pinyin id.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// Han character.
    pub const fn hanja(self) -> char {
        match self {
            Self::Jia => '甲',
            Self::Yi => '乙',
            Self::Bing => '丙',
            Self::Ding => '丁',
            Self::Wu => '戊',
            Self::Ji => '己',
            Self::Geng => '庚',
            Self::Xin => '辛',
            Self::Ren => '壬',
            Self::Gui => '癸',
        }
    }

    pub const fn element(self) -> Element {
        Element::from_index((self.index() / 2) as i32)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Stem from its Han character.
    pub fn from_char(c: char) -> Result<Self, SymbolError> {
        ALL_STEMS
            .iter()
            .copied()
            .find(|s| s.hanja() == c)
            .ok_or(SymbolError::UnknownStem(c))
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl std::str::FromStr for Stem {
    type Err = SymbolError;

    /// Accepts either the Han character or the pinyin id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if !c.is_ascii() {
                return Self::from_char(c);
            }
        }
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.name() == s)
            .ok_or_else(|| SymbolError::UnknownName(s.to_string()))
    }
}
