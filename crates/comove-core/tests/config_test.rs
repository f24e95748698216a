//! Tests for the comove configuration system.

use std::sync::Mutex;

use comove_core::config::{CliOverrides, ComoveConfig};
use comove_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all COMOVE_ env vars to prevent cross-test contamination.
fn clear_comove_env_vars() {
    for key in [
        "COMOVE_MIN_SUPPORT",
        "COMOVE_MIN_CONFIDENCE",
        "COMOVE_MIN_LIFT",
        "COMOVE_INDEX_COLUMN",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn layered_resolution_cli_beats_env_beats_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_comove_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("comove.toml"),
        r#"
[mining]
min_support = 0.2
min_confidence = 0.6
min_lift = 1.5

[ingest]
index_column = "Tanggal"
"#,
    )
    .unwrap();

    std::env::set_var("COMOVE_MIN_CONFIDENCE", "0.7");
    std::env::set_var("COMOVE_MIN_LIFT", "2.0");

    let cli = CliOverrides {
        min_lift: Some(3.0),
        ..Default::default()
    };

    let config = ComoveConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.mining.min_support, Some(0.2));
    assert_eq!(config.mining.min_confidence, Some(0.7));
    assert_eq!(config.mining.min_lift, Some(3.0));
    assert_eq!(config.ingest.effective_index_column(), "Tanggal");

    clear_comove_env_vars();
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_comove_env_vars();

    let dir = tempdir();
    let config = ComoveConfig::load(dir.path(), None).unwrap();
    let thresholds = config.mining.thresholds();

    assert_eq!(thresholds.min_support, 0.1);
    assert_eq!(thresholds.min_confidence, 0.5);
    assert_eq!(thresholds.min_lift, 1.0);
    assert_eq!(config.ingest.effective_index_column(), "Periode");
    assert_eq!(config.ingest.effective_preview_rows(), 5);
}

#[test]
fn unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_comove_env_vars();

    std::env::set_var("COMOVE_MIN_SUPPORT", "lots");
    let dir = tempdir();
    let config = ComoveConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.mining.min_support, None);

    clear_comove_env_vars();
}

#[test]
fn out_of_range_threshold_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_comove_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("comove.toml"), "[mining]\nmin_lift = 25.0\n").unwrap();

    let err = ComoveConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "mining.min_lift"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_comove_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("comove.toml"), "[mining\nmin_support = ").unwrap();

    let err = ComoveConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn from_toml_ignores_unknown_keys_and_round_trips() {
    let config = ComoveConfig::from_toml(
        r#"
[mining]
min_support = 0.05
future_knob = true

[ingest]
preview_rows = 10
"#,
    )
    .unwrap();
    assert_eq!(config.mining.effective_min_support(), 0.05);
    assert_eq!(config.ingest.effective_preview_rows(), 10);

    let reparsed = ComoveConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(reparsed.mining.min_support, Some(0.05));
    assert_eq!(reparsed.ingest.preview_rows, Some(10));
}

#[test]
fn zero_preview_rows_is_rejected() {
    let config = ComoveConfig::from_toml("[ingest]\npreview_rows = 0\n").unwrap();
    assert!(ComoveConfig::validate(&config).is_err());
}
