//! Mining threshold configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_LIFT, DEFAULT_MIN_SUPPORT};
use crate::types::Thresholds;

/// Thresholds applied to the mining collaborator and the rule filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum itemset support as a fraction of periods. Default: 0.1.
    pub min_support: Option<f64>,
    /// Minimum rule confidence. Default: 0.5.
    pub min_confidence: Option<f64>,
    /// Minimum rule lift. Default: 1.0.
    pub min_lift: Option<f64>,
}

impl MiningConfig {
    pub fn effective_min_support(&self) -> f64 {
        self.min_support.unwrap_or(DEFAULT_MIN_SUPPORT)
    }

    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(DEFAULT_MIN_CONFIDENCE)
    }

    pub fn effective_min_lift(&self) -> f64 {
        self.min_lift.unwrap_or(DEFAULT_MIN_LIFT)
    }

    /// Effective thresholds with defaults filled in.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(
            self.effective_min_support(),
            self.effective_min_confidence(),
            self.effective_min_lift(),
        )
    }
}
