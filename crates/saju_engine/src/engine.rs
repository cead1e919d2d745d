//! Orchestration: resolves a birth through the calendar and runs the
//! pure pipeline over the result.
//!
//! Entry points:
//! - [`SajuEngine::chart`]: the raw birth pillars and almanac
//! - [`SajuEngine::profile`]: enriched pillars, strength, shensha, relationship facts
//! - [`SajuEngine::luck`]: decade, annual and monthly cycles
//! - [`SajuEngine::report`]: all of the above in one bundle
//!
//! Only a failure on the birth date is fatal. A luck-cycle probe the
//! calendar cannot answer is logged, recorded in the report and skipped.

use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::{debug_span, info, warn};

use saju_base::{
    LuckCycles, LuckDirection, Pillar, SajuProfile, Skipped, annual_cycles, compute_profile,
    decade_at_age, decade_cycles, local_age, luck_direction, monthly_cycles, restep_decades,
};
use saju_config::{EngineConfig, ValidationError};

use crate::error::{EngineError, ProviderError};
use crate::provider::{CalendarProvider, CalendarQuery, DecadePlan};
use crate::report::{BirthChart, BirthRequest, Horizon, SajuReport, SkippedProbe};

/// Engine over a calendar provider.
#[derive(Debug, Clone)]
pub struct SajuEngine<P> {
    provider: P,
    config: EngineConfig,
    probe_time: NaiveTime,
}

impl<P: CalendarProvider> SajuEngine<P> {
    /// Build an engine, validating the configuration.
    pub fn new(provider: P, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let (h, m) = config.chart.unknown_hour_probe_hm()?;
        let probe_time = NaiveTime::from_hms_opt(h, m, 0)
            .ok_or_else(|| ValidationError::HourProbe(config.chart.unknown_hour_probe.clone()))?;
        Ok(Self {
            provider,
            config,
            probe_time,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn timezone<'a>(&'a self, request: &'a BirthRequest) -> &'a str {
        request
            .timezone
            .as_deref()
            .unwrap_or(&self.config.chart.default_timezone)
    }

    /// The calendar query for a birth, substituting the probe time when the
    /// hour is unknown.
    pub fn birth_query(&self, request: &BirthRequest) -> CalendarQuery {
        CalendarQuery {
            date: request.date,
            time: request.time.unwrap_or(self.probe_time),
            timezone: self.timezone(request).to_string(),
            calendar: request.calendar,
            leap_month: request.leap_month,
        }
    }

    /// Resolve the birth pillars.
    ///
    /// # Errors
    ///
    /// [`EngineError::Provider`] when the calendar cannot resolve the birth date.
    pub fn chart(&self, request: &BirthRequest) -> Result<BirthChart, EngineError> {
        let answer = self.provider.pillars(&self.birth_query(request))?;
        let mut pillars = answer.pillars;
        let mut almanac = answer.almanac;
        if !request.hour_known() {
            pillars = pillars.without_hour();
            almanac.na_yin.hour = None;
        }
        Ok(BirthChart {
            solar_date: answer.solar_date,
            pillars,
            almanac,
        })
    }

    /// Calendar-free profile of the birth chart.
    pub fn profile(&self, request: &BirthRequest) -> Result<SajuProfile, EngineError> {
        let chart = self.chart(request)?;
        Ok(compute_profile(&chart.pillars, request.gender))
    }

    /// Luck cycles around `target_year`. Never fails; unanswered probes are
    /// returned alongside the cycles.
    pub fn luck(
        &self,
        request: &BirthRequest,
        chart: &BirthChart,
        target_year: i32,
    ) -> (LuckCycles, Vec<SkippedProbe>) {
        let day_master = chart.pillars.day_master();
        let direction = luck_direction(day_master, request.gender);
        let birth_year = chart.solar_date.year();
        let mut skipped = Vec::new();

        let (start, decades) = {
            let _span = debug_span!("decades", count = self.config.luck.decade_count).entered();
            match self.provider.decades(
                &self.birth_query(request),
                request.gender,
                self.config.luck.decade_count,
            ) {
                Ok(mut plan) => {
                    reconcile_direction(&mut plan, chart.pillars.month, direction);
                    (Some(plan.start), decade_cycles(day_master, &plan.seeds))
                }
                Err(error) => {
                    let failed = Skipped {
                        year: birth_year,
                        month: None,
                        error,
                    };
                    skipped.push(record(Horizon::Decade, failed));
                    (None, Vec::new())
                }
            }
        };

        let annual = {
            let luck = &self.config.luck;
            let first = target_year - luck.years_before as i32;
            let last = target_year + luck.years_after as i32;
            let _span = debug_span!("annual", first, last).entered();
            let (cycles, failed) = annual_cycles(day_master, birth_year, first..=last, |year| {
                self.probe(year, luck.annual_probe_month, luck.annual_probe_day, request)
                    .map(|p| p.year)
            });
            skipped.extend(failed.into_iter().map(|s| record(Horizon::Annual, s)));
            cycles
        };

        let monthly = {
            let day = self.config.luck.monthly_probe_day;
            let _span = debug_span!("monthly", year = target_year).entered();
            let (cycles, failed) = monthly_cycles(day_master, target_year, |year, month| {
                self.probe(year, month, day, request).map(|p| p.month)
            });
            skipped.extend(failed.into_iter().map(|s| record(Horizon::Monthly, s)));
            cycles
        };

        let current_decade =
            decade_at_age(&decades, local_age(birth_year, target_year)).map(|d| d.index);
        let cycles = LuckCycles {
            direction,
            start,
            target_year,
            current_decade,
            decades,
            annual,
            monthly,
        };
        (cycles, skipped)
    }

    /// Full report for a birth, with luck cycles around `target_year`.
    ///
    /// # Errors
    ///
    /// [`EngineError::Provider`] when the calendar cannot resolve the birth date.
    pub fn report(
        &self,
        request: &BirthRequest,
        target_year: i32,
    ) -> Result<SajuReport, EngineError> {
        let chart = self.chart(request)?;
        let profile = compute_profile(&chart.pillars, request.gender);
        let (luck, skipped) = self.luck(request, &chart, target_year);
        info!(
            day_master = %profile.pillars.day_master,
            band = profile.strength.band.name(),
            total = profile.strength.total,
            active_stars = profile.shensha.active.len(),
            skipped = skipped.len(),
            "computed saju report"
        );
        Ok(SajuReport {
            request: request.clone(),
            solar_date: chart.solar_date,
            hour_known: request.hour_known(),
            raw_pillars: chart.pillars,
            profile,
            luck,
            skipped,
            almanac: chart.almanac,
        })
    }

    /// Pillars of a representative solar day.
    fn probe(
        &self,
        year: i32,
        month: u32,
        day: u32,
        request: &BirthRequest,
    ) -> Result<ProbePillars, ProviderError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ProviderError::InvalidDate(format!("{year}-{month:02}-{day:02}")))?;
        let query = CalendarQuery::solar(date, self.probe_time, self.timezone(request));
        let answer = self.provider.pillars(&query)?;
        Ok(ProbePillars {
            year: answer.pillars.year,
            month: answer.pillars.month,
        })
    }
}

struct ProbePillars {
    year: Pillar,
    month: Pillar,
}

/// The computed direction wins: on a mismatch the decade pillars are
/// re-stepped from the month pillar and the start flag is overwritten.
fn reconcile_direction(plan: &mut DecadePlan, month: Pillar, direction: LuckDirection) {
    let forward = direction.is_forward();
    if plan.start.forward == forward {
        return;
    }
    warn!(
        calendar_forward = plan.start.forward,
        computed_forward = forward,
        "direction_mismatch: calendar decade direction disagrees, keeping the computed one"
    );
    plan.start.forward = forward;
    plan.seeds = restep_decades(month, direction, &plan.seeds);
}

fn record(horizon: Horizon, skipped: Skipped<ProviderError>) -> SkippedProbe {
    warn!(
        horizon = horizon.name(),
        year = skipped.year,
        month = skipped.month,
        error = %skipped.error,
        "skipped luck probe"
    );
    SkippedProbe {
        horizon,
        year: skipped.year,
        month: skipped.month,
        error: skipped.error.to_string(),
    }
}

