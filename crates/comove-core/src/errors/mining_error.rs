//! Errors at the boundary with the frequent-pattern mining collaborator.

use super::error_code::{self, ComoveErrorCode};

/// Errors raised by threshold validation or by rule derivation.
///
/// Empty results are not errors: see `MiningOutcome` in comove-rules.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("{name} = {value} is outside [{min}, {max}]")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("no support recorded for itemset [{itemset}]")]
    MissingSupport { itemset: String },
}

impl ComoveErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidThreshold { .. } => error_code::INVALID_THRESHOLD,
            Self::MissingSupport { .. } => error_code::MINING_ERROR,
        }
    }
}
