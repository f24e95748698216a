//! Minimum support / confidence / lift for one mining run.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_LIFT, DEFAULT_MIN_SUPPORT, MIN_CONFIDENCE_RANGE,
    MIN_LIFT_RANGE, MIN_SUPPORT_RANGE,
};
use crate::errors::MiningError;

/// Thresholds supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub min_support: f64,
    pub min_confidence: f64,
    pub min_lift: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            min_lift: DEFAULT_MIN_LIFT,
        }
    }
}

impl Thresholds {
    pub fn new(min_support: f64, min_confidence: f64, min_lift: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            min_lift,
        }
    }

    /// Check every threshold against its accepted range. NaN is rejected.
    pub fn validate(&self) -> Result<(), MiningError> {
        check("min_support", self.min_support, MIN_SUPPORT_RANGE)?;
        check("min_confidence", self.min_confidence, MIN_CONFIDENCE_RANGE)?;
        check("min_lift", self.min_lift, MIN_LIFT_RANGE)
    }
}

fn check(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), MiningError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(MiningError::InvalidThreshold {
            name,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for t in [
            Thresholds::new(0.0, 0.5, 1.0),
            Thresholds::new(0.1, 1.5, 1.0),
            Thresholds::new(0.1, 0.5, 0.05),
            Thresholds::new(f64::NAN, 0.5, 1.0),
        ] {
            assert!(matches!(
                t.validate(),
                Err(MiningError::InvalidThreshold { .. })
            ));
        }
    }
}
