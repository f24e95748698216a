//! Contract of the external frequent-pattern mining collaborator.
//!
//! The core supplies a boolean transaction table and thresholds and consumes
//! the returned itemsets and rules. Support, confidence, and lift are
//! computed on the far side of this seam.

use crate::errors::MiningError;
use crate::types::{FrequentItemset, Rule, TransactionTable};

/// Finds itemsets whose support is at least `min_support`.
pub trait ItemsetMiner: Send + Sync {
    /// Each transaction is the set of columns flagged `true` in one period.
    /// An empty result is valid and means no itemset is frequent.
    fn frequent_itemsets(
        &self,
        transactions: &TransactionTable,
        min_support: f64,
    ) -> Result<Vec<FrequentItemset>, MiningError>;
}

/// Derives association rules whose confidence is at least `min_confidence`.
pub trait RuleDeriver: Send + Sync {
    /// `confidence = support(A ∪ C) / support(A)` and
    /// `lift = confidence / support(C)`.
    fn derive_rules(
        &self,
        itemsets: &[FrequentItemset],
        min_confidence: f64,
    ) -> Result<Vec<Rule>, MiningError>;
}
