//! Engine configuration.
//!
//! Configuration is layered: built-in defaults, then an optional file named
//! by `SAJU_CONFIG`, then `SAJU__*` environment variables (double underscore
//! between nested keys). A `.env` file is read first when present.
//!
//! ```no_run
//! use saju_config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("configuration");
//! config.validate().expect("valid configuration");
//! println!("{} decades", config.luck.decade_count);
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable naming an optional configuration file.
pub const CONFIG_FILE_VAR: &str = "SAJU_CONFIG";
/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SAJU";

/// Upper bound on the number of decade cycles.
pub const MAX_DECADES: u32 = 12;
/// Upper bound on the annual window, in years.
pub const MAX_WINDOW_YEARS: u32 = 60;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub luck: LuckConfig,
    pub chart: ChartConfig,
}

/// Luck-cycle horizons and their probe days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckConfig {
    /// Decade cycles requested from the calendar.
    pub decade_count: u32,
    /// Years before the target year in the annual window.
    pub years_before: u32,
    /// Years after the target year in the annual window.
    pub years_after: u32,
    pub annual_probe_month: u32,
    pub annual_probe_day: u32,
    pub monthly_probe_day: u32,
}

impl Default for LuckConfig {
    fn default() -> Self {
        Self {
            decade_count: 10,
            years_before: 5,
            years_after: 5,
            annual_probe_month: 6,
            annual_probe_day: 15,
            monthly_probe_day: 15,
        }
    }
}

impl LuckConfig {
    /// Number of years in the annual window, target year included.
    pub fn window_years(&self) -> u32 {
        self.years_before + self.years_after + 1
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.decade_count == 0 || self.decade_count > MAX_DECADES {
            return Err(ValidationError::DecadeCount(self.decade_count));
        }
        if !(1..=12).contains(&self.annual_probe_month) {
            return Err(ValidationError::ProbeMonth {
                field: "luck.annual_probe_month",
                value: self.annual_probe_month,
            });
        }
        for (field, value) in [
            ("luck.annual_probe_day", self.annual_probe_day),
            ("luck.monthly_probe_day", self.monthly_probe_day),
        ] {
            if !(1..=28).contains(&value) {
                return Err(ValidationError::ProbeDay { field, value });
            }
        }
        let window = self.window_years();
        if window > MAX_WINDOW_YEARS {
            return Err(ValidationError::WindowTooLarge(window));
        }
        Ok(())
    }
}

/// Defaults applied to birth requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// IANA timezone used when a request carries none.
    pub default_timezone: String,
    /// `HH:MM` passed to the calendar when the birth hour is unknown.
    pub unknown_hour_probe: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_timezone: "Asia/Seoul".to_string(),
            unknown_hour_probe: "12:00".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parsed `(hour, minute)` of the unknown-hour probe.
    pub fn unknown_hour_probe_hm(&self) -> Result<(u32, u32), ValidationError> {
        parse_hm(&self.unknown_hour_probe)
            .ok_or_else(|| ValidationError::HourProbe(self.unknown_hour_probe.clone()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_timezone.trim().is_empty() {
            return Err(ValidationError::EmptyTimezone);
        }
        self.unknown_hour_probe_hm()?;
        Ok(())
    }
}

fn parse_hm(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.trim().split_once(':')?;
    let (h, m) = (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?);
    (h < 24 && m < 60).then_some((h, m))
}

impl EngineConfig {
    /// Load from defaults, the optional `SAJU_CONFIG` file and `SAJU__*`
    /// environment variables, after reading `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source cannot be read or a value
    /// has the wrong type. Semantic checks are left to [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let file = std::env::var_os(CONFIG_FILE_VAR);
        Self::load_from(file.as_deref().map(Path::new), Self::environment())
    }

    /// Load a specific file (TOML, JSON or YAML by extension) over the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Layer an optional file and an environment source over the defaults.
    pub fn load_from(
        file: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }
        let config = builder.add_source(env).build()?.try_deserialize()?;
        Ok(config)
    }

    /// The `SAJU__*` environment source used by [`Self::load`].
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.luck.validate()?;
        self.chart.validate()?;
        Ok(())
    }
}
