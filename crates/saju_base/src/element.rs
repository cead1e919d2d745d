//! Five elements (wuxing) and yin-yang polarity.
//!
//! Elements are indexed in generation order: wood(0) → fire(1) → earth(2) →
//! metal(3) → water(4) → wood. The destruction cycle is the +2 step of the
//! same ring (wood → earth → water → fire → metal → wood).

use serde::{Deserialize, Serialize};

use crate::error::SymbolError;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generation order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generation order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a ring position, wrapping modulo 5.
    pub const fn from_index(i: i32) -> Self {
        ALL_ELEMENTS[i.rem_euclid(5) as usize]
    }

    /// Canonical lowercase id.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Han character.
    pub const fn hanja(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// The element this one generates (feeds).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() as i32 + 1)
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() as i32 - 1)
    }

    /// The element this one destroys (controls).
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() as i32 + 2)
    }

    /// The element that destroys this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() as i32 - 2)
    }

    /// Forward distance on the generation ring, `(other - self) mod 5`.
    pub const fn steps_to(self, other: Self) -> u8 {
        (other.index() as i32 - self.index() as i32).rem_euclid(5) as u8
    }
}

impl std::str::FromStr for Element {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .find(|e| e.name() == s || s.chars().eq(std::iter::once(e.hanja())))
            .ok_or_else(|| SymbolError::UnknownName(s.to_string()))
    }
}

/// Yin-yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of an even (yang) or odd (yin) cycle index.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}
