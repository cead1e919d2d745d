//! The four-pillar chart: positions, gender, and the raw pillars.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::SymbolError;
use crate::sexagenary::Pillar;
use crate::stem::Stem;

/// Pillar position within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// Chart subject's gender, which steers luck direction and two stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(SymbolError::UnknownName(s.to_string())),
        }
    }
}

/// Raw four pillars. Year, month and day are always present; the hour
/// pillar is absent when the birth time is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Option<Pillar>) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Parses four pillar strings; an empty or missing hour gives `None`.
    pub fn parse(
        year: &str,
        month: &str,
        day: &str,
        hour: Option<&str>,
    ) -> Result<Self, SymbolError> {
        let hour = match hour.map(str::trim) {
            Some(h) if !h.is_empty() => Some(h.parse()?),
            _ => None,
        };
        Ok(Self::new(year.parse()?, month.parse()?, day.parse()?, hour))
    }

    /// The day master (day stem).
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    pub const fn get(&self, pos: PillarPosition) -> Option<Pillar> {
        match pos {
            PillarPosition::Year => Some(self.year),
            PillarPosition::Month => Some(self.month),
            PillarPosition::Day => Some(self.day),
            PillarPosition::Hour => self.hour,
        }
    }

    pub const fn stem_at(&self, pos: PillarPosition) -> Option<Stem> {
        match self.get(pos) {
            Some(p) => Some(p.stem),
            None => None,
        }
    }

    pub const fn branch_at(&self, pos: PillarPosition) -> Option<Branch> {
        match self.get(pos) {
            Some(p) => Some(p.branch),
            None => None,
        }
    }

    /// Present pillars in chart order.
    pub fn present(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS
            .iter()
            .filter_map(move |&pos| self.get(pos).map(|p| (pos, p)))
    }

    pub fn stems(&self) -> impl Iterator<Item = Stem> + '_ {
        self.present().map(|(_, p)| p.stem)
    }

    pub fn branches(&self) -> impl Iterator<Item = Branch> + '_ {
        self.present().map(|(_, p)| p.branch)
    }

    pub fn has_stem(&self, stem: Stem) -> bool {
        self.stems().any(|s| s == stem)
    }

    pub fn has_branch(&self, branch: Branch) -> bool {
        self.branches().any(|b| b == branch)
    }

    pub const fn hour_known(&self) -> bool {
        self.hour.is_some()
    }

    /// Copy of this chart with the hour pillar removed.
    pub const fn without_hour(&self) -> Self {
        Self::new(self.year, self.month, self.day, None)
    }
}
