//! Data model shared by every stage of the pipeline.

pub mod item;
pub mod rule;
pub mod table;
pub mod thresholds;

pub use item::{Bucket, Direction, ItemKey, ItemLabel, Movement};
pub use rule::{FrequentItemset, Rule};
pub use table::{
    ChangeRecord, ChangeTable, CommodityTable, MembershipRecord, MembershipTable, PriceTable,
    TransactionTable,
};
pub use thresholds::Thresholds;
