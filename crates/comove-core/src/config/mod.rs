//! Configuration system for comove.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod comove_config;
pub mod ingest_config;
pub mod mining_config;

pub use comove_config::{CliOverrides, ComoveConfig};
pub use ingest_config::IngestConfig;
pub use mining_config::MiningConfig;
