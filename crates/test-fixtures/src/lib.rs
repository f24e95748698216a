//! Test fixture loader for comove price tables and golden rule sets.
//!
//! Provides the shared CSV and JSON fixtures plus a few generated price
//! tables used by tests and benchmarks across crates.

use std::path::PathBuf;

use comove_core::types::PriceTable;
use serde::de::DeserializeOwned;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn read_fixture(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = read_fixture(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// Build a price table from row-major values with periods `P0..Pn`.
///
/// # Panics
/// Panics if the rows don't form a valid table.
pub fn price_table(commodities: &[&str], rows: &[&[f64]]) -> PriceTable {
    let periods = (0..rows.len()).map(|i| format!("P{i}")).collect();
    let commodities = commodities.iter().map(|c| c.to_string()).collect();
    let rows = rows.iter().map(|r| r.to_vec()).collect();
    PriceTable::from_rows(periods, commodities, rows)
        .unwrap_or_else(|e| panic!("Invalid fixture price table: {e}"))
}

/// Two commodities doubling together every period.
///
/// Row 0 is stable for both; every later row is a +100% (high) increase,
/// so `A_H_I -> B_H_I` holds with confidence 1.0 and lift 1.25.
pub fn lockstep_prices() -> PriceTable {
    price_table(
        &["A", "B"],
        &[
            &[100.0, 10.0],
            &[200.0, 20.0],
            &[400.0, 40.0],
            &[800.0, 80.0],
            &[1600.0, 160.0],
        ],
    )
}

/// Deterministic random-walk prices for benchmarks and property tests.
///
/// Each step moves a price by up to +/-90%, so every bucket gets exercised.
pub fn random_walk_prices(commodities: usize, periods: usize, seed: u64) -> PriceTable {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next_unit = move || {
        // 64-bit LCG (Knuth MMIX constants); top 53 bits as a fraction in [0, 1).
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    let names: Vec<String> = (0..commodities).map(|i| format!("C{i}")).collect();
    let labels: Vec<String> = (0..periods).map(|i| format!("P{i}")).collect();
    let columns: Vec<Vec<f64>> = (0..commodities)
        .map(|_| {
            let mut price = 100.0;
            (0..periods)
                .map(|_| {
                    let current = price;
                    let step = next_unit() * 1.8 - 0.9;
                    price = (price * (1.0 + step)).max(1.0);
                    current
                })
                .collect()
        })
        .collect();

    PriceTable::new(labels, names, columns)
        .unwrap_or_else(|e| panic!("Invalid generated price table: {e}"))
}
