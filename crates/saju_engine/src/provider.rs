//! The calendar boundary.
//!
//! Everything calendrical (solar and lunar conversion, solar-term month
//! boundaries, decade start arithmetic, almanac facts) lives behind
//! [`CalendarProvider`]. The engine only sees raw pillars and opaque labels.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use saju_base::{DecadeSeed, FourPillars, Gender, LuckStart};

use crate::error::ProviderError;

/// Calendar a date is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    #[default]
    Solar,
    Lunar,
}

/// One question put to the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarQuery {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub timezone: String,
    pub calendar: CalendarKind,
    /// Only meaningful for lunar dates.
    pub leap_month: bool,
}

impl CalendarQuery {
    /// A solar-calendar query, as used for luck-cycle probes.
    pub fn solar(date: NaiveDate, time: NaiveTime, timezone: &str) -> Self {
        Self {
            date,
            time,
            timezone: timezone.to_string(),
            calendar: CalendarKind::Solar,
            leap_month: false,
        }
    }
}

/// Na-yin labels per pillar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaYin {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub hour: Option<String>,
}

/// Almanac facts passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Almanac {
    pub na_yin: NaYin,
    pub solar_term: Option<String>,
    pub nine_star: Option<String>,
    pub mansion: Option<String>,
}

/// Calendar answer for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderChart {
    /// The query date in the solar calendar.
    pub solar_date: NaiveDate,
    /// All four pillars for the queried instant.
    pub pillars: FourPillars,
    pub almanac: Almanac,
}

/// Decade start and the decade pillars for a birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadePlan {
    pub start: LuckStart,
    pub seeds: Vec<DecadeSeed>,
}

/// Source of raw pillars.
///
/// Implementations may do I/O; the engine calls them synchronously and
/// treats every answer as authoritative, except a decade direction that
/// disagrees with the day master and gender.
pub trait CalendarProvider {
    /// Pillars and almanac facts for an instant.
    ///
    /// # Errors
    ///
    /// [`ProviderError::InvalidDate`] for impossible dates and
    /// [`ProviderError::OutOfRange`] for dates the provider cannot cover.
    fn pillars(&self, query: &CalendarQuery) -> Result<ProviderChart, ProviderError>;

    /// The decade plan for a birth, at most `count` decades long.
    fn decades(
        &self,
        birth: &CalendarQuery,
        gender: Gender,
        count: u32,
    ) -> Result<DecadePlan, ProviderError>;
}

impl<P: CalendarProvider + ?Sized> CalendarProvider for &P {
    fn pillars(&self, query: &CalendarQuery) -> Result<ProviderChart, ProviderError> {
        (**self).pillars(query)
    }

    fn decades(
        &self,
        birth: &CalendarQuery,
        gender: Gender,
        count: u32,
    ) -> Result<DecadePlan, ProviderError> {
        (**self).decades(birth, gender, count)
    }
}
