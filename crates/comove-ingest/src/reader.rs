//! File dispatch and CSV price ingestion.
//!
//! The first CSV row is the header. Cells are trimmed. Rows of unequal
//! width are a CSV error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use comove_core::config::IngestConfig;
use comove_core::errors::IngestError;
use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::builder::{IngestedPrices, PriceTableBuilder};
use crate::spreadsheet;

/// Load a price file from disk, choosing the reader by extension.
///
/// `.csv` is parsed as CSV; spreadsheet extensions (see
/// [`spreadsheet::EXTENSIONS`]) read the first worksheet.
pub fn load_prices(path: &Path, config: &IngestConfig) -> Result<IngestedPrices, IngestError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => {
            let file = File::open(path).map_err(|_| IngestError::FileNotFound {
                path: path.display().to_string(),
            })?;
            debug!(path = %path.display(), "reading CSV price file");
            read_prices(file, config)
        }
        Some(ext) if spreadsheet::EXTENSIONS.contains(&ext) => {
            spreadsheet::load_workbook(path, config)
        }
        _ => Err(IngestError::UnsupportedFormat { extension }),
    }
}

/// Read CSV price data from any reader.
pub fn read_prices<R: Read>(input: R, config: &IngestConfig) -> Result<IngestedPrices, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();
    let mut builder = PriceTableBuilder::new(headers, config)?;

    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(i as u64 + 2, |p| p.line());
        builder.push_row(line, record.iter())?;
    }

    builder.finish()
}

fn csv_error(e: csv::Error) -> IngestError {
    IngestError::Csv {
        message: e.to_string(),
    }
}
