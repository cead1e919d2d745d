//! Sexagenary (60-pair) stem-branch cycle.
//!
//! A pillar is any (stem, branch) pair. Only pairs of matching polarity occur
//! in the calendar; those 60 form the cycle 甲子, 乙丑, … 癸亥, where index `i`
//! pairs stem `i mod 10` with branch `i mod 12`.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::SymbolError;
use crate::stem::Stem;

/// A (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

/// The 60 pillars in cycle order (index 0 = 甲子).
pub const ALL_SEXAGENARY: [Pillar; 60] = {
    let mut out = [Pillar::new(Stem::Jia, Branch::Zi); 60];
    let mut i = 0;
    while i < 60 {
        out[i] = Pillar::from_cycle_index(i as i32);
        i += 1;
    }
    out
};

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a cycle position, wrapping modulo 60.
    pub const fn from_cycle_index(i: i32) -> Self {
        let i = i.rem_euclid(60);
        Self::new(Stem::from_index(i % 10), Branch::from_index(i % 12))
    }

    /// Position in the 60-cycle, or `None` when the polarities differ.
    ///
    /// Solves `i ≡ s (mod 10)`, `i ≡ b (mod 12)`, which gives
    /// `i = (6s - 5b) mod 60` for same-parity `s`, `b`.
    pub const fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Index of the ten-pillar week (xun) holding this pillar, `cycle_index / 10`.
    pub const fn xun_index(self) -> Option<u8> {
        match self.cycle_index() {
            Some(i) => Some(i / 10),
            None => None,
        }
    }

    /// The pillar `n` positions later in the cycle.
    pub const fn offset(self, n: i32) -> Self {
        Self::new(
            Stem::from_index(self.stem.index() as i32 + n),
            Branch::from_index(self.branch.index() as i32 + n),
        )
    }

    /// Parses a two-character string such as `"甲子"`.
    pub fn parse_strict(s: &str) -> Result<Self, SymbolError> {
        let mut chars = s.trim().chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SymbolError::MalformedPillar(s.to_string()));
        };
        let pillar = Self::new(Stem::from_char(sc)?, Branch::from_char(bc)?);
        if pillar.cycle_index().is_none() {
            return Err(SymbolError::MismatchedPolarity(s.to_string()));
        }
        Ok(pillar)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl std::str::FromStr for Pillar {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl TryFrom<String> for Pillar {
    type Error = SymbolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_strict(&s)
    }
}

impl From<Pillar> for String {
    fn from(p: Pillar) -> Self {
        p.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_endpoints() {
        assert_eq!(ALL_SEXAGENARY[0].to_string(), "甲子");
        assert_eq!(ALL_SEXAGENARY[1].to_string(), "乙丑");
        assert_eq!(ALL_SEXAGENARY[10].to_string(), "甲戌");
        assert_eq!(ALL_SEXAGENARY[59].to_string(), "癸亥");
    }

    #[test]
    fn all_unique() {
        let set: std::collections::HashSet<_> = ALL_SEXAGENARY.iter().collect();
        assert_eq!(set.len(), 60);
    }

    #[test]
    fn index_inverts_table() {
        for (i, p) in ALL_SEXAGENARY.iter().enumerate() {
            assert_eq!(p.cycle_index(), Some(i as u8));
        }
    }

    #[test]
    fn mismatched_polarity_has_no_index() {
        assert_eq!(Pillar::new(Stem::Jia, Branch::Chou).cycle_index(), None);
        assert_eq!(
            "甲丑".parse::<Pillar>(),
            Err(SymbolError::MismatchedPolarity("甲丑".into()))
        );
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert!(matches!(
            "甲".parse::<Pillar>(),
            Err(SymbolError::MalformedPillar(_))
        ));
        assert!(matches!(
            "甲子丑".parse::<Pillar>(),
            Err(SymbolError::MalformedPillar(_))
        ));
        assert!(matches!(
            "子甲".parse::<Pillar>(),
            Err(SymbolError::UnknownStem('子'))
        ));
    }

    #[test]
    fn offset_wraps_cycle() {
        let p: Pillar = "癸亥".parse().unwrap();
        assert_eq!(p.offset(1).to_string(), "甲子");
        assert_eq!(ALL_SEXAGENARY[0].offset(-1), p);
    }

    #[test]
    fn serde_as_string() {
        let p: Pillar = "丙寅".parse().unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"丙寅\"");
        let back: Pillar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
