//! Top-level comove configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{IngestConfig, MiningConfig};
use crate::constants::{MIN_CONFIDENCE_RANGE, MIN_LIFT_RANGE, MIN_SUPPORT_RANGE};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "comove.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COMOVE_*`)
/// 3. Project config (`comove.toml` in project root)
/// 4. User config (`~/.comove/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComoveConfig {
    pub mining: MiningConfig,
    pub ingest: IngestConfig,
}

/// Overrides supplied by the presentation layer's controls.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_support: Option<f64>,
    pub min_confidence: Option<f64>,
    pub min_lift: Option<f64>,
    pub index_column: Option<String>,
}

impl ComoveConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Unreadable files are skipped, bad TOML is not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ComoveConfig) -> Result<(), ConfigError> {
        let mining = &config.mining;
        for (field, value, (min, max)) in [
            ("mining.min_support", mining.min_support, MIN_SUPPORT_RANGE),
            ("mining.min_confidence", mining.min_confidence, MIN_CONFIDENCE_RANGE),
            ("mining.min_lift", mining.min_lift, MIN_LIFT_RANGE),
        ] {
            if let Some(v) = value {
                if !(min..=max).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("must be between {min} and {max}"),
                    });
                }
            }
        }
        if let Some(ref column) = config.ingest.index_column {
            if column.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "ingest.index_column".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.ingest.preview_rows == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "ingest.preview_rows".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.comove/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".comove").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ComoveConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ComoveConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut ComoveConfig, other: &ComoveConfig) {
        if other.mining.min_support.is_some() {
            base.mining.min_support = other.mining.min_support;
        }
        if other.mining.min_confidence.is_some() {
            base.mining.min_confidence = other.mining.min_confidence;
        }
        if other.mining.min_lift.is_some() {
            base.mining.min_lift = other.mining.min_lift;
        }

        if other.ingest.index_column.is_some() {
            base.ingest.index_column = other.ingest.index_column.clone();
        }
        if other.ingest.preview_rows.is_some() {
            base.ingest.preview_rows = other.ingest.preview_rows;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut ComoveConfig) {
        if let Some(v) = env_f64("COMOVE_MIN_SUPPORT") {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = env_f64("COMOVE_MIN_CONFIDENCE") {
            config.mining.min_confidence = Some(v);
        }
        if let Some(v) = env_f64("COMOVE_MIN_LIFT") {
            config.mining.min_lift = Some(v);
        }
        if let Ok(val) = std::env::var("COMOVE_INDEX_COLUMN") {
            config.ingest.index_column = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ComoveConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_support {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = cli.min_confidence {
            config.mining.min_confidence = Some(v);
        }
        if let Some(v) = cli.min_lift {
            config.mining.min_lift = Some(v);
        }
        if let Some(ref v) = cli.index_column {
            config.ingest.index_column = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok()?.trim().parse().ok()
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
