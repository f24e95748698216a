//! ComoveErrorCode trait for structured error reporting.

/// Stable machine-readable code for every comove error.
/// The presentation layer keys its messages off these codes.
pub trait ComoveErrorCode {
    /// Returns the error code string (e.g., "INGEST_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const TABLE_ERROR: &str = "TABLE_ERROR";
pub const INVALID_ITEM_KEY: &str = "INVALID_ITEM_KEY";
pub const INGEST_ERROR: &str = "INGEST_ERROR";
pub const UNSUPPORTED_FORMAT: &str = "UNSUPPORTED_FORMAT";
pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_THRESHOLD: &str = "INVALID_THRESHOLD";
pub const MINING_ERROR: &str = "MINING_ERROR";
