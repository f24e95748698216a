//! FP-Growth itemset mining over a transaction table.
//!
//! Transactions are handed to the `fp-growth` crate as column indices. The
//! fractional support threshold becomes an absolute count, rounded up, and
//! results are re-checked against the fraction so rounding never admits an
//! itemset below threshold. Output is canonical: items by column position,
//! itemsets by size and then by positions.

use comove_core::errors::MiningError;
use comove_core::traits::{ItemsetMiner, RuleDeriver};
use comove_core::types::{FrequentItemset, Rule, TransactionTable};
use fp_growth::algorithm::FPGrowth;
use tracing::{debug, info};

use crate::rules;

/// Frequent-pattern collaborator backed by `fp-growth`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FpGrowthMiner;

impl FpGrowthMiner {
    pub fn new() -> Self {
        Self
    }
}

/// Smallest transaction count whose fraction of `n` reaches `min_support`.
pub fn minimum_count(min_support: f64, n: usize) -> usize {
    ((min_support * n as f64) - 1e-9).ceil().max(1.0) as usize
}

fn check_fraction(name: &'static str, value: f64) -> Result<(), MiningError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidThreshold {
            name,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

impl ItemsetMiner for FpGrowthMiner {
    fn frequent_itemsets(
        &self,
        transactions: &TransactionTable,
        min_support: f64,
    ) -> Result<Vec<FrequentItemset>, MiningError> {
        check_fraction("min_support", min_support)?;

        let n = transactions.row_count();
        if n == 0 || transactions.column_count() == 0 {
            return Ok(Vec::new());
        }

        let min_count = minimum_count(min_support, n);
        let result = FPGrowth::<usize>::new(transactions.transactions(), min_count)
            .find_frequent_patterns();

        let mut patterns: Vec<(Vec<usize>, usize)> = Vec::new();
        for (items, count) in result.frequent_patterns().iter() {
            if items.is_empty() || (*count as f64 / n as f64) < min_support {
                continue;
            }
            let mut positions: Vec<usize> = items.iter().copied().collect();
            positions.sort_unstable();
            positions.dedup();
            patterns.push((positions, *count));
        }
        patterns.sort_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        patterns.dedup_by(|(a, _), (b, _)| a == b);

        let columns = transactions.columns();
        let itemsets: Vec<FrequentItemset> = patterns
            .into_iter()
            .map(|(positions, count)| FrequentItemset {
                items: positions.iter().map(|&p| columns[p].clone()).collect(),
                support: count as f64 / n as f64,
            })
            .collect();

        info!(
            transactions = n,
            min_support,
            min_count,
            itemsets = itemsets.len(),
            "mined frequent itemsets"
        );
        Ok(itemsets)
    }
}

impl RuleDeriver for FpGrowthMiner {
    fn derive_rules(
        &self,
        itemsets: &[FrequentItemset],
        min_confidence: f64,
    ) -> Result<Vec<Rule>, MiningError> {
        check_fraction("min_confidence", min_confidence)?;
        let derived = rules::derive(itemsets, min_confidence)?;
        debug!(
            itemsets = itemsets.len(),
            min_confidence,
            rules = derived.len(),
            "derived association rules"
        );
        Ok(derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_count_rounds_up() {
        assert_eq!(minimum_count(0.1, 5), 1);
        assert_eq!(minimum_count(0.2, 5), 1);
        assert_eq!(minimum_count(0.3, 5), 2);
        assert_eq!(minimum_count(0.8, 5), 4);
        assert_eq!(minimum_count(1.0, 5), 5);
        assert_eq!(minimum_count(0.005, 10), 1);
    }

    #[test]
    fn rejects_out_of_range_support() {
        let table = TransactionTable::new(Vec::new(), Vec::new(), Vec::new()).unwrap();
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(FpGrowthMiner.frequent_itemsets(&table, bad).is_err());
        }
    }

    #[test]
    fn empty_table_has_no_itemsets() {
        let table = TransactionTable::new(Vec::new(), Vec::new(), Vec::new()).unwrap();
        assert!(FpGrowthMiner.frequent_itemsets(&table, 0.5).unwrap().is_empty());
    }
}
