//! Shape errors for the typed commodity and transaction tables.

use super::error_code::{self, ComoveErrorCode};

/// Errors raised when building or combining typed tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("table has no commodity columns")]
    NoCommodities,

    #[error("at least 2 periods are required, found {found}")]
    InsufficientPeriods { found: usize },

    #[error("expected {expected} columns, found {found}")]
    ColumnCountMismatch { expected: usize, found: usize },

    #[error("expected {expected} rows, found {found}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("commodity {commodity} has {found} values, expected {expected}")]
    ColumnLengthMismatch {
        commodity: String,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has {found} values, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("duplicate column name: {name}")]
    DuplicateColumn { name: String },

    #[error("commodity name must not be empty")]
    EmptyCommodityName,

    #[error("tables do not share the same periods and commodities")]
    ShapeMismatch,

    #[error("invalid item key: {key}")]
    InvalidItemKey { key: String },
}

impl ComoveErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidItemKey { .. } => error_code::INVALID_ITEM_KEY,
            _ => error_code::TABLE_ERROR,
        }
    }
}
