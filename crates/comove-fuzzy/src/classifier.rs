//! Period-over-period percentage change and direction per cell.
//!
//! The first period has no prior price and is defined as a zero change.
//! The prior of a cell is the last non-missing price above it in the same
//! column, so a gap does not hide the move that follows it. A change that is
//! not finite (prior price of zero, or the missing cell itself) is treated
//! as zero, so it always lands in `Stable`.

use comove_core::types::{ChangeRecord, ChangeTable, CommodityTable, Direction, PriceTable};
use tracing::{debug, warn};

/// Signed percentage change from `prior` to `current`.
pub fn percent_change(prior: Option<f64>, current: f64) -> f64 {
    let Some(prior) = prior else {
        return 0.0;
    };
    let change = (current - prior) / prior * 100.0;
    if change.is_finite() {
        change
    } else {
        0.0
    }
}

/// Classify one cell given the previous price in the same column.
pub fn classify_cell(prior: Option<f64>, current: f64) -> ChangeRecord {
    let change = percent_change(prior, current);
    ChangeRecord {
        abs_change: change.abs(),
        direction: Direction::from_change(change),
    }
}

/// Classify every cell of the price table.
pub fn classify(prices: &PriceTable) -> ChangeTable {
    let mut degenerate = 0usize;
    let changes = prices.scan_columns(None::<f64>, |last_seen, &current| {
        let prior = *last_seen;
        if let Some(p) = prior {
            if !((current - p) / p).is_finite() {
                degenerate += 1;
            }
        }
        if !current.is_nan() {
            *last_seen = Some(current);
        }
        classify_cell(prior, current)
    });

    if degenerate > 0 {
        warn!(
            cells = degenerate,
            "undefined percentage changes treated as stable"
        );
    }
    debug!(
        periods = changes.row_count(),
        commodities = changes.commodity_count(),
        "classified price changes"
    );
    changes
}

/// Split a change table into its absolute-change and direction views.
pub fn split(changes: &ChangeTable) -> (CommodityTable<f64>, CommodityTable<Direction>) {
    (
        changes.map(|r| r.abs_change),
        changes.map(|r| r.direction),
    )
}
