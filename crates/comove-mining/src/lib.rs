//! # comove-mining
//!
//! The frequent-pattern collaborator: FP-Growth over boolean transactions,
//! then confidence/lift rule derivation over the frequent itemsets.

pub mod miner;
pub mod rules;
pub mod support;

pub use miner::FpGrowthMiner;
