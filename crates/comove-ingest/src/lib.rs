//! # comove-ingest
//!
//! Reads an uploaded price file into a [`PriceTable`](comove_core::types::PriceTable).
//! CSV goes through the `csv` crate, spreadsheets through `calamine`; both
//! share index-column detection and cell parsing.

mod builder;
pub mod reader;
pub mod spreadsheet;

pub use builder::{IngestWarning, IngestedPrices};
pub use reader::{load_prices, read_prices};
pub use spreadsheet::{load_workbook, read_sheet};
