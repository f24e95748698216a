//! Header handling and cell parsing shared by every input format.
//!
//! A column named after the configured index column supplies the period
//! labels; every other column is a commodity. Without an index column,
//! periods are numbered from 0 and a warning is returned alongside the
//! table. Empty and `NaN` cells become `f64::NAN`.

use std::fmt;

use comove_core::config::IngestConfig;
use comove_core::errors::IngestError;
use comove_core::types::PriceTable;
use serde::Serialize;
use tracing::{debug, warn};

/// Non-fatal condition found while reading input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IngestWarning {
    /// The index column was absent; periods are positional.
    MissingIndexColumn { column: String },
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIndexColumn { column } => {
                write!(f, "column '{column}' not found, periods are numbered by row")
            }
        }
    }
}

/// A parsed price table plus what happened while reading it.
#[derive(Debug, Clone)]
pub struct IngestedPrices {
    pub prices: PriceTable,
    pub warnings: Vec<IngestWarning>,
    pub rows_read: usize,
    preview_rows: usize,
}

impl IngestedPrices {
    /// The first configured number of rows, for display.
    pub fn preview(&self) -> Vec<(&str, Vec<f64>)> {
        self.prices.head(self.preview_rows)
    }
}

/// Accumulates data rows under a header and builds the price table.
pub(crate) struct PriceTableBuilder<'a> {
    headers: Vec<String>,
    index: Option<usize>,
    index_column: &'a str,
    preview_rows: usize,
    periods: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl<'a> PriceTableBuilder<'a> {
    pub(crate) fn new(headers: Vec<String>, config: &'a IngestConfig) -> Result<Self, IngestError> {
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(IngestError::MissingHeader);
        }
        let index_column = config.effective_index_column();
        let index = headers.iter().position(|h| h == index_column);
        Ok(Self {
            headers,
            index,
            index_column,
            preview_rows: config.effective_preview_rows(),
            periods: Vec::new(),
            rows: Vec::new(),
        })
    }

    /// Add one data row. `line` is the 1-based source line or sheet row.
    pub(crate) fn push_row<'c>(
        &mut self,
        line: u64,
        cells: impl IntoIterator<Item = &'c str>,
    ) -> Result<(), IngestError> {
        let position = self.rows.len();
        let mut label = None;
        let mut values = Vec::with_capacity(self.headers.len());

        for (i, (cell, column)) in cells.into_iter().zip(&self.headers).enumerate() {
            if Some(i) == self.index {
                label = Some(cell.to_string());
                continue;
            }
            let value = parse_cell(cell).ok_or_else(|| IngestError::InvalidNumber {
                line,
                column: column.clone(),
                value: cell.to_string(),
            })?;
            values.push(value);
        }

        self.periods.push(label.unwrap_or_else(|| position.to_string()));
        self.rows.push(values);
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<IngestedPrices, IngestError> {
        let mut warnings = Vec::new();
        if self.index.is_none() {
            warn!(
                column = self.index_column,
                "index column not found, using positional periods"
            );
            warnings.push(IngestWarning::MissingIndexColumn {
                column: self.index_column.to_string(),
            });
        }

        let index = self.index;
        let commodities: Vec<String> = self
            .headers
            .into_iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != index)
            .map(|(_, h)| h)
            .collect();

        let rows_read = self.rows.len();
        let prices = PriceTable::from_rows(self.periods, commodities, self.rows)?;
        debug!(
            rows = rows_read,
            commodities = prices.commodity_count(),
            "parsed price table"
        );

        Ok(IngestedPrices {
            prices,
            warnings,
            rows_read,
            preview_rows: self.preview_rows,
        })
    }
}

/// Parse one price cell. Empty and `NaN` cells are missing values.
pub(crate) fn parse_cell(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    cell.parse().ok()
}
