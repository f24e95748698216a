//! # comove-core
//!
//! Foundation crate for comove.
//! Defines the typed tables, item keys, rules, errors, config, tracing setup,
//! constants, and the mining-collaborator traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ComoveConfig;
pub use errors::{ConfigError, IngestError, MiningError, PipelineError, TableError};
pub use types::{
    Bucket, ChangeRecord, ChangeTable, CommodityTable, Direction, FrequentItemset, ItemKey,
    ItemLabel, MembershipRecord, MembershipTable, Movement, PriceTable, Rule, Thresholds,
    TransactionTable,
};
