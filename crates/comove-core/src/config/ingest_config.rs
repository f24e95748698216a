//! Ingestion configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INDEX_COLUMN, DEFAULT_PREVIEW_ROWS};

/// How uploaded price files are interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IngestConfig {
    /// Column holding period labels. Default: "Periode".
    pub index_column: Option<String>,
    /// Rows shown in previews. Default: 5.
    pub preview_rows: Option<usize>,
}

impl IngestConfig {
    pub fn effective_index_column(&self) -> &str {
        self.index_column.as_deref().unwrap_or(DEFAULT_INDEX_COLUMN)
    }

    pub fn effective_preview_rows(&self) -> usize {
        self.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS)
    }
}
