//! Table-backed calendar provider.
//!
//! [`StaticCalendar`] answers from a fixture of precomputed day records and
//! birth records, typically loaded from JSON:
//!
//! ```json
//! {
//!   "days": [
//!     { "date": "1990-03-15", "year": "庚午", "month": "己卯", "day": "甲子",
//!       "almanac": { "solar_term": "驚蟄" } }
//!   ],
//!   "births": [
//!     { "date": "1990-03-15", "gender": "male", "start_age": 4,
//!       "start": { "year": 1993, "month": 7, "day": 2, "forward": true } }
//!   ]
//! }
//! ```
//!
//! The hour pillar is derived from the day stem and the clock hour with the
//! five-rat rule; 23:00 and later count as the 子 hour of the same day.
//! Decade pillars step from the month pillar, one cycle position per decade,
//! in the direction carried by the birth record. Timezones are not
//! interpreted: records are taken to be in local time already.

use std::collections::HashMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Deserialize;

use saju_base::{Branch, DecadeSeed, FourPillars, Gender, LuckStart, Pillar, Stem};

use crate::error::ProviderError;
use crate::provider::{
    Almanac, CalendarKind, CalendarProvider, CalendarQuery, DecadePlan, ProviderChart,
};

/// Pillars of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub calendar: CalendarKind,
    #[serde(default)]
    pub leap_month: bool,
    /// Solar equivalent of a lunar record; solar records use `date`.
    #[serde(default)]
    pub solar_date: Option<NaiveDate>,
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    #[serde(default)]
    pub almanac: Almanac,
}

impl DayRecord {
    pub fn solar(date: NaiveDate, year: Pillar, month: Pillar, day: Pillar) -> Self {
        Self {
            date,
            calendar: CalendarKind::Solar,
            leap_month: false,
            solar_date: None,
            year,
            month,
            day,
            almanac: Almanac::default(),
        }
    }

    fn key(&self) -> DayKey {
        (self.calendar, self.leap_month, self.date)
    }

    fn solar_date(&self) -> NaiveDate {
        self.solar_date.unwrap_or(self.date)
    }
}

/// Decade start of one birth.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BirthRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub calendar: CalendarKind,
    #[serde(default)]
    pub leap_month: bool,
    pub gender: Gender,
    /// Local age at which the first decade begins.
    pub start_age: i32,
    pub start: LuckStart,
}

/// Serialized form of a [`StaticCalendar`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalendarFixture {
    #[serde(default)]
    pub days: Vec<DayRecord>,
    #[serde(default)]
    pub births: Vec<BirthRecord>,
}

type DayKey = (CalendarKind, bool, NaiveDate);

/// Calendar provider backed by in-memory records.
#[derive(Debug, Clone, Default)]
pub struct StaticCalendar {
    days: HashMap<DayKey, DayRecord>,
    births: Vec<BirthRecord>,
}

impl StaticCalendar {
    pub fn new(fixture: CalendarFixture) -> Self {
        let days = fixture.days.into_iter().map(|d| (d.key(), d)).collect();
        Self {
            days,
            births: fixture.births,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let fixture: CalendarFixture = serde_json::from_str(json)
            .map_err(|e| ProviderError::Unavailable(format!("calendar fixture: {e}")))?;
        Ok(Self::new(fixture))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Add or replace a day record.
    pub fn insert_day(&mut self, record: DayRecord) {
        self.days.insert(record.key(), record);
    }

    pub fn insert_birth(&mut self, record: BirthRecord) {
        self.births.push(record);
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    fn day(
        &self,
        calendar: CalendarKind,
        leap: bool,
        date: NaiveDate,
    ) -> Result<&DayRecord, ProviderError> {
        self.days
            .get(&(calendar, leap, date))
            .ok_or(ProviderError::OutOfRange(date))
    }
}

/// Hour branch of a clock time: 子 covers 23:00-00:59, 丑 01:00-02:59, and so on.
pub fn hour_branch(time: NaiveTime) -> Branch {
    Branch::from_index(((time.hour() + 1) / 2) as i32)
}

/// Hour pillar by the five-rat rule: the 子 hour of a 甲 or 己 day is 甲子.
pub fn hour_pillar(day_stem: Stem, time: NaiveTime) -> Pillar {
    let branch = hour_branch(time);
    let stem = Stem::from_index((day_stem.index() as i32 % 5) * 2 + branch.index() as i32);
    Pillar::new(stem, branch)
}

impl CalendarProvider for StaticCalendar {
    fn pillars(&self, query: &CalendarQuery) -> Result<ProviderChart, ProviderError> {
        let rec = self.day(query.calendar, query.leap_month, query.date)?;
        let hour = hour_pillar(rec.day.stem, query.time);
        Ok(ProviderChart {
            solar_date: rec.solar_date(),
            pillars: FourPillars::new(rec.year, rec.month, rec.day, Some(hour)),
            almanac: rec.almanac.clone(),
        })
    }

    fn decades(
        &self,
        birth: &CalendarQuery,
        gender: Gender,
        count: u32,
    ) -> Result<DecadePlan, ProviderError> {
        let day = self.day(birth.calendar, birth.leap_month, birth.date)?;
        let rec = self
            .births
            .iter()
            .find(|b| {
                b.date == birth.date
                    && b.calendar == birth.calendar
                    && b.leap_month == birth.leap_month
                    && b.gender == gender
            })
            .ok_or(ProviderError::OutOfRange(birth.date))?;

        let step = if rec.start.forward { 1 } else { -1 };
        let birth_year = day.solar_date().year();
        let seeds = (0..count as i32)
            .map(|i| {
                let start_age = rec.start_age + 10 * i;
                let start_year = birth_year + start_age - 1;
                DecadeSeed {
                    start_age,
                    end_age: start_age + 9,
                    start_year,
                    end_year: start_year + 9,
                    pillar: Some(day.month.offset(step * (i + 1))),
                }
            })
            .collect();
        Ok(DecadePlan {
            start: rec.start,
            seeds,
        })
    }
}
