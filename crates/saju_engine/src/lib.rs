//! Saju report engine.
//!
//! Bridges a [`CalendarProvider`] with the pure computations in `saju_base`:
//! the provider turns a birth date into raw pillars, the engine enriches,
//! scores and annotates them and assembles the luck cycles.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use saju_base::Gender;
//! use saju_config::EngineConfig;
//! use saju_engine::{BirthRequest, SajuEngine, StaticCalendar};
//!
//! let calendar = StaticCalendar::from_path("calendar.json").unwrap();
//! let engine = SajuEngine::new(calendar, EngineConfig::default()).unwrap();
//! let date = NaiveDate::from_ymd_opt(1990, 3, 15).unwrap();
//! let report = engine
//!     .report(&BirthRequest::solar(date, None, Gender::Female), 2026)
//!     .unwrap();
//! println!("{}", report.profile.strength.band.name());
//! ```

pub mod engine;
pub mod error;
pub mod provider;
pub mod report;
pub mod static_calendar;

pub use engine::SajuEngine;
pub use error::{EngineError, ProviderError};
pub use provider::{
    Almanac, CalendarKind, CalendarProvider, CalendarQuery, DecadePlan, NaYin, ProviderChart,
};
pub use report::{BirthChart, BirthRequest, Horizon, SajuReport, SkippedProbe};
pub use static_calendar::{
    BirthRecord, CalendarFixture, DayRecord, StaticCalendar, hour_branch, hour_pillar,
};
