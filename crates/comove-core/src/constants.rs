//! Shared constants for comove.

// ---- Mining thresholds ----

/// Default minimum support (fraction of periods).
pub const DEFAULT_MIN_SUPPORT: f64 = 0.1;

/// Default minimum confidence.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Default minimum lift.
pub const DEFAULT_MIN_LIFT: f64 = 1.0;

/// Accepted minimum-support range, inclusive.
pub const MIN_SUPPORT_RANGE: (f64, f64) = (0.005, 1.0);

/// Accepted minimum-confidence range, inclusive.
pub const MIN_CONFIDENCE_RANGE: (f64, f64) = (0.01, 1.0);

/// Accepted minimum-lift range, inclusive.
pub const MIN_LIFT_RANGE: (f64, f64) = (0.1, 10.0);

// ---- Ingestion ----

/// Column used as the period index when present.
pub const DEFAULT_INDEX_COLUMN: &str = "Periode";

/// Rows shown when previewing an uploaded table.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

// ---- Transactions ----

/// Boolean columns emitted per commodity: 3 buckets x 2 movements + stable.
pub const COLUMNS_PER_COMMODITY: usize = 7;

/// Separator between the commodity name and the label codes in an item key.
pub const ITEM_KEY_SEPARATOR: char = '_';

/// Separator used when rendering an itemset as text.
pub const ITEMSET_SEPARATOR: &str = ", ";
