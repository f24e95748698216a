//! # comove-fuzzy
//!
//! Turns a numeric price table into a boolean transaction table.
//! Stages: change classification, fuzzy membership, transaction encoding.

pub mod classifier;
pub mod encoder;
pub mod membership;
pub mod pipeline;

pub use pipeline::{fuzzify_prices, Fuzzified};
