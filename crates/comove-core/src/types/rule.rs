//! Mining collaborator output: frequent itemsets and association rules.

use serde::{Deserialize, Serialize};

use super::item::ItemKey;

/// An itemset whose support cleared the minimum-support threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentItemset {
    /// Items in the order the miner emitted them.
    pub items: Vec<ItemKey>,
    /// Fraction of periods containing every item.
    pub support: f64,
}

/// `antecedents -> consequents`, with the metrics reported by the miner.
///
/// Antecedents and consequents are disjoint. Item order is the miner's
/// insertion order and is preserved through filtering and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub antecedents: Vec<ItemKey>,
    pub consequents: Vec<ItemKey>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl Rule {
    /// True when at least one antecedent is in `selected`.
    pub fn antecedents_intersect(&self, selected: &[ItemKey]) -> bool {
        self.antecedents.iter().any(|item| selected.contains(item))
    }
}
