//! Tests for the comove error handling system.

use std::collections::HashSet;

use comove_core::errors::error_code::{self, ComoveErrorCode};
use comove_core::errors::*;

#[test]
fn every_error_enum_has_a_code() {
    let table = TableError::NoCommodities;
    let ingest = IngestError::MissingHeader;
    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    let mining = MiningError::MissingSupport {
        itemset: "Beras_S".into(),
    };

    let codes: HashSet<&str> = [
        table.error_code(),
        ingest.error_code(),
        config.error_code(),
        mining.error_code(),
    ]
    .into_iter()
    .collect();

    assert!(codes.iter().all(|c| !c.is_empty()));
    assert_eq!(codes.len(), 4);
}

#[test]
fn pipeline_error_forwards_inner_code() {
    let inner = MiningError::InvalidThreshold {
        name: "min_lift",
        value: 42.0,
        min: 0.1,
        max: 10.0,
    };
    let pipeline: PipelineError = inner.into();
    assert_eq!(pipeline.error_code(), error_code::INVALID_THRESHOLD);

    let pipeline: PipelineError = IngestError::from(TableError::InvalidItemKey {
        key: "Beras_Q".into(),
    })
    .into();
    assert_eq!(pipeline.error_code(), error_code::INVALID_ITEM_KEY);
}

#[test]
fn coded_string_prefixes_the_code() {
    let err = IngestError::UnsupportedFormat {
        extension: Some("xlsx".into()),
    };
    let text = err.coded_string();
    assert!(text.starts_with("[UNSUPPORTED_FORMAT] "));
    assert!(text.contains("xlsx"));
}
