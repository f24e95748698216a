//! Seams to collaborators that live outside the fuzzification core.

pub mod miner;

pub use miner::{ItemsetMiner, RuleDeriver};
