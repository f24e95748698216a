//! Aggregate error for a full analysis run.

use super::error_code::ComoveErrorCode;
use super::{ConfigError, IngestError, MiningError, TableError};

/// Errors that can occur anywhere between file upload and the final rule list.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),
}

impl ComoveErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Table(e) => e.error_code(),
            Self::Ingest(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Mining(e) => e.error_code(),
        }
    }
}
