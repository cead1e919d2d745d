use std::collections::HashMap;
use std::io::Write;

use saju_config::{ConfigError, EngineConfig, ValidationError};

fn write_file(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

fn env(vars: &[(&str, &str)]) -> config::Environment {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EngineConfig::environment().source(Some(map))
}

#[test]
fn toml_file_overrides_defaults() {
    let file = write_file(
        ".toml",
        r#"
[luck]
decade_count = 8
years_before = 3

[chart]
default_timezone = "Asia/Tokyo"
"#,
    );
    let c = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(c.luck.decade_count, 8);
    assert_eq!(c.luck.years_before, 3);
    assert_eq!(c.luck.years_after, 5);
    assert_eq!(c.chart.default_timezone, "Asia/Tokyo");
    assert_eq!(c.chart.unknown_hour_probe, "12:00");
    assert!(c.validate().is_ok());
}

#[test]
fn json_file_is_accepted() {
    let file = write_file(".json", r#"{"luck": {"monthly_probe_day": 1}}"#);
    let c = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(c.luck.monthly_probe_day, 1);
}

#[test]
fn environment_overrides_file() {
    let file = write_file(".toml", "[luck]\nyears_before = 3\n");
    let c = EngineConfig::load_from(
        Some(file.path()),
        env(&[("SAJU__LUCK__YEARS_BEFORE", "2"), ("SAJU__LUCK__DECADE_COUNT", "6")]),
    )
    .unwrap();
    assert_eq!(c.luck.years_before, 2);
    assert_eq!(c.luck.decade_count, 6);
}

#[test]
fn no_sources_gives_defaults() {
    let c = EngineConfig::load_from(None, env(&[])).unwrap();
    assert_eq!(c, EngineConfig::default());
}

#[test]
fn wrong_type_is_a_load_error() {
    let file = write_file(".toml", "[luck]\ndecade_count = \"many\"\n");
    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
fn loaded_but_invalid() {
    let file = write_file(".toml", "[luck]\nannual_probe_day = 30\n");
    let c = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(
        c.validate(),
        Err(ValidationError::ProbeDay {
            field: "luck.annual_probe_day",
            value: 30
        })
    );
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}
