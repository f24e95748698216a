//! Input ingestion errors.

use super::error_code::{self, ComoveErrorCode};
use super::TableError;

/// Errors that can occur while reading an uploaded price file.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("input file not found: {path}")]
    FileNotFound { path: String },

    #[error("unsupported file type: {extension:?} (expected .csv or a spreadsheet)")]
    UnsupportedFormat { extension: Option<String> },

    #[error("input has no header row")]
    MissingHeader,

    #[error("invalid number {value:?} in column {column} on line {line}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error("CSV error: {message}")]
    Csv { message: String },

    #[error("spreadsheet error: {message}")]
    Spreadsheet { message: String },

    #[error("invalid price table: {0}")]
    Table(#[from] TableError),
}

impl ComoveErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => error_code::UNSUPPORTED_FORMAT,
            Self::InvalidNumber { .. } => error_code::INVALID_NUMBER,
            Self::Table(e) => e.error_code(),
            _ => error_code::INGEST_ERROR,
        }
    }
}
