//! Typed tables keyed by period (rows) and commodity (columns).
//!
//! Every table derived during fuzzification shares the period labels and
//! commodity names of the price table it came from; only the cell type
//! changes. Transactions are stored row-major because the miner consumes
//! them one period at a time.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::item::{Bucket, Direction, ItemKey};
use crate::errors::TableError;

/// Column-major table with one column per commodity and one row per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityTable<T> {
    periods: Vec<String>,
    commodities: Vec<String>,
    columns: Vec<Vec<T>>,
}

/// Raw prices as uploaded.
pub type PriceTable = CommodityTable<f64>;

/// Absolute percentage change and direction per cell.
pub type ChangeTable = CommodityTable<ChangeRecord>;

/// Low/medium/high membership degrees per cell.
pub type MembershipTable = CommodityTable<MembershipRecord>;

/// Classifier output for one (period, commodity) cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Absolute percentage change, always `>= 0`.
    pub abs_change: f64,
    pub direction: Direction,
}

/// Fuzzy membership degrees for one cell. They need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl MembershipRecord {
    pub fn degree(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Low => self.low,
            Bucket::Medium => self.medium,
            Bucket::High => self.high,
        }
    }
}

impl<T> CommodityTable<T> {
    /// Build a table from column-major data.
    ///
    /// Requires at least one commodity, at least two periods, unique
    /// non-empty commodity names, and one value per period in every column.
    pub fn new(
        periods: Vec<String>,
        commodities: Vec<String>,
        columns: Vec<Vec<T>>,
    ) -> Result<Self, TableError> {
        if commodities.is_empty() {
            return Err(TableError::NoCommodities);
        }
        if periods.len() < 2 {
            return Err(TableError::InsufficientPeriods {
                found: periods.len(),
            });
        }
        if columns.len() != commodities.len() {
            return Err(TableError::ColumnCountMismatch {
                expected: commodities.len(),
                found: columns.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for (name, column) in commodities.iter().zip(&columns) {
            if name.trim().is_empty() {
                return Err(TableError::EmptyCommodityName);
            }
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn { name: name.clone() });
            }
            if column.len() != periods.len() {
                return Err(TableError::ColumnLengthMismatch {
                    commodity: name.clone(),
                    expected: periods.len(),
                    found: column.len(),
                });
            }
        }

        Ok(Self {
            periods,
            commodities,
            columns,
        })
    }

    /// Build a table from row-major data (one inner vec per period).
    pub fn from_rows(
        periods: Vec<String>,
        commodities: Vec<String>,
        rows: Vec<Vec<T>>,
    ) -> Result<Self, TableError> {
        let width = commodities.len();
        let mut columns: Vec<Vec<T>> = (0..width).map(|_| Vec::with_capacity(rows.len())).collect();
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(TableError::RowWidthMismatch {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        Self::new(periods, commodities, columns)
    }

    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    pub fn commodities(&self) -> &[String] {
        &self.commodities
    }

    pub fn columns(&self) -> &[Vec<T>] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&[T]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Column for a commodity by name.
    pub fn column_by_name(&self, commodity: &str) -> Option<&[T]> {
        let index = self.commodities.iter().position(|c| c == commodity)?;
        self.column(index)
    }

    pub fn row_count(&self) -> usize {
        self.periods.len()
    }

    pub fn commodity_count(&self) -> usize {
        self.commodities.len()
    }

    /// True when both tables have identical period labels and commodity names.
    pub fn same_shape<U>(&self, other: &CommodityTable<U>) -> bool {
        self.periods == other.periods && self.commodities == other.commodities
    }

    /// Apply `f` to every cell, keeping labels.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> CommodityTable<U> {
        CommodityTable {
            periods: self.periods.clone(),
            commodities: self.commodities.clone(),
            columns: self
                .columns
                .iter()
                .map(|column| column.iter().map(&mut f).collect())
                .collect(),
        }
    }

    /// Apply `f` to every cell in period order, threading a per-column state
    /// that starts from a fresh copy of `init` for each commodity.
    pub fn scan_columns<S: Clone, U>(
        &self,
        init: S,
        mut f: impl FnMut(&mut S, &T) -> U,
    ) -> CommodityTable<U> {
        CommodityTable {
            periods: self.periods.clone(),
            commodities: self.commodities.clone(),
            columns: self
                .columns
                .iter()
                .map(|column| {
                    let mut state = init.clone();
                    column.iter().map(|value| f(&mut state, value)).collect()
                })
                .collect(),
        }
    }
}

impl<T: Clone> CommodityTable<T> {
    /// Values of one period across all commodities.
    pub fn row(&self, index: usize) -> Option<Vec<T>> {
        if index >= self.periods.len() {
            return None;
        }
        Some(self.columns.iter().map(|c| c[index].clone()).collect())
    }

    /// First `n` rows as `(period, values)` pairs, for previews.
    pub fn head(&self, n: usize) -> Vec<(&str, Vec<T>)> {
        (0..n.min(self.periods.len()))
            .filter_map(|i| Some((self.periods[i].as_str(), self.row(i)?)))
            .collect()
    }
}

/// Wide boolean table: one row (transaction) per period, one column per item key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionTable {
    periods: Vec<String>,
    columns: Vec<ItemKey>,
    rows: Vec<Vec<bool>>,
}

impl TransactionTable {
    /// Build from row-major flags. Column keys must be unique.
    pub fn new(
        periods: Vec<String>,
        columns: Vec<ItemKey>,
        rows: Vec<Vec<bool>>,
    ) -> Result<Self, TableError> {
        if rows.len() != periods.len() {
            return Err(TableError::RowCountMismatch {
                expected: periods.len(),
                found: rows.len(),
            });
        }
        let mut seen = FxHashSet::default();
        for key in &columns {
            if !seen.insert(key) {
                return Err(TableError::DuplicateColumn {
                    name: key.to_string(),
                });
            }
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::RowWidthMismatch {
                    row: i,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            periods,
            columns,
            rows,
        })
    }

    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    pub fn columns(&self) -> &[ItemKey] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, key: &ItemKey) -> Option<usize> {
        self.columns.iter().position(|k| k == key)
    }

    /// Flag for `key` in period `row`. `None` if either is out of range.
    pub fn value(&self, row: usize, key: &ItemKey) -> Option<bool> {
        let column = self.column_index(key)?;
        self.rows.get(row).map(|r| r[column])
    }

    /// Column indices of the items present in each period.
    pub fn transactions(&self) -> Vec<Vec<usize>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(i, &present)| present.then_some(i))
                    .collect()
            })
            .collect()
    }

    /// Items present in period `row`.
    pub fn items(&self, row: usize) -> Vec<&ItemKey> {
        self.rows
            .get(row)
            .map(|flags| {
                flags
                    .iter()
                    .zip(&self.columns)
                    .filter_map(|(&present, key)| present.then_some(key))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First `n` rows as `(period, flags)` pairs, for previews.
    pub fn head(&self, n: usize) -> Vec<(&str, &[bool])> {
        self.periods
            .iter()
            .zip(&self.rows)
            .take(n)
            .map(|(p, r)| (p.as_str(), r.as_slice()))
            .collect()
    }
}
