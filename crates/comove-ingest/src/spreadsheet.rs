//! Spreadsheet price ingestion through `calamine`.
//!
//! Only the first worksheet is read. Its first row is the header; numeric
//! cells are taken as-is and text cells go through the same parsing as CSV.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use comove_core::config::IngestConfig;
use comove_core::errors::IngestError;
use tracing::debug;

use crate::builder::{IngestedPrices, PriceTableBuilder};

/// Extensions read as spreadsheets.
pub const EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Load the first worksheet of a workbook.
pub fn load_workbook(path: &Path, config: &IngestConfig) -> Result<IngestedPrices, IngestError> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(spreadsheet_error)?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Err(IngestError::MissingHeader);
    };
    let range = range.map_err(spreadsheet_error)?;

    debug!(
        path = %path.display(),
        rows = range.height(),
        columns = range.width(),
        "reading first worksheet"
    );
    read_sheet(&range, config)
}

/// Read price data from a worksheet range.
pub fn read_sheet(range: &Range<Data>, config: &IngestConfig) -> Result<IngestedPrices, IngestError> {
    // Sheet row of the range's first row, 1-based.
    let first_row = range.start().map_or(1, |(row, _)| u64::from(row) + 1);
    let mut rows = range.rows();

    let Some(header) = rows.next() else {
        return Err(IngestError::MissingHeader);
    };
    let headers = header.iter().map(cell_text).collect();
    let mut builder = PriceTableBuilder::new(headers, config)?;

    for (i, row) in rows.enumerate() {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        builder.push_row(first_row + 1 + i as u64, cells.iter().map(String::as_str))?;
    }

    builder.finish()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

fn spreadsheet_error(e: impl std::fmt::Display) -> IngestError {
    IngestError::Spreadsheet {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_round_trip_through_text() {
        assert_eq!(cell_text(&Data::Float(13000.5)), "13000.5");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String(" 2024-01 ".to_string())), "2024-01");
    }

    #[test]
    fn range_without_rows_has_no_header() {
        let range: Range<Data> = Range::empty();
        assert!(matches!(
            read_sheet(&range, &IngestConfig::default()),
            Err(IngestError::MissingHeader)
        ));
    }

    #[test]
    fn in_memory_range_is_parsed() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("Beras".to_string()));
        range.set_value((0, 1), Data::String("Gula".to_string()));
        range.set_value((1, 0), Data::Float(100.0));
        range.set_value((1, 1), Data::Int(200));
        range.set_value((2, 0), Data::Float(110.0));
        range.set_value((2, 1), Data::String("nan".to_string()));

        let ingested = read_sheet(&range, &IngestConfig::default()).unwrap();
        assert_eq!(ingested.prices.periods(), ["0", "1"]);
        assert_eq!(ingested.prices.column(1).unwrap()[0], 200.0);
        assert!(ingested.prices.column(1).unwrap()[1].is_nan());
        assert_eq!(ingested.warnings.len(), 1);
    }
}
