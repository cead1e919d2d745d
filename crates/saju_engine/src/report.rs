//! Request and report types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use saju_base::{FourPillars, Gender, LuckCycles, SajuProfile};

use crate::provider::{Almanac, CalendarKind};

/// A birth to be charted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRequest {
    pub date: NaiveDate,
    /// `None` when the birth hour is unknown.
    #[serde(default)]
    pub time: Option<NaiveTime>,
    /// IANA timezone; the configured default applies when absent.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub calendar: CalendarKind,
    #[serde(default)]
    pub leap_month: bool,
    pub gender: Gender,
}

impl BirthRequest {
    pub fn solar(date: NaiveDate, time: Option<NaiveTime>, gender: Gender) -> Self {
        Self {
            date,
            time,
            timezone: None,
            calendar: CalendarKind::Solar,
            leap_month: false,
            gender,
        }
    }

    pub fn lunar(
        date: NaiveDate,
        leap_month: bool,
        time: Option<NaiveTime>,
        gender: Gender,
    ) -> Self {
        Self {
            calendar: CalendarKind::Lunar,
            leap_month,
            ..Self::solar(date, time, gender)
        }
    }

    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    pub fn hour_known(&self) -> bool {
        self.time.is_some()
    }
}

/// The resolved birth chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthChart {
    pub solar_date: NaiveDate,
    /// Hour is `None` when the request carried no time.
    pub pillars: FourPillars,
    pub almanac: Almanac,
}

/// Luck horizon a probe belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Decade,
    Annual,
    Monthly,
}

impl Horizon {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Decade => "decade",
            Self::Annual => "annual",
            Self::Monthly => "monthly",
        }
    }
}

/// A luck-cycle probe the calendar could not answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedProbe {
    pub horizon: Horizon,
    pub year: i32,
    pub month: Option<u32>,
    pub error: String,
}

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SajuReport {
    pub request: BirthRequest,
    pub solar_date: NaiveDate,
    pub hour_known: bool,
    pub raw_pillars: FourPillars,
    #[serde(flatten)]
    pub profile: SajuProfile,
    pub luck: LuckCycles,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedProbe>,
    pub almanac: Almanac,
}
