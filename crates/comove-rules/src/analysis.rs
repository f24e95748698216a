//! One analysis session per uploaded price table.
//!
//! The session fuzzifies once and keeps the transaction table read-only.
//! Each threshold change re-runs mining and rule derivation against it;
//! antecedent selection narrows an existing [`MiningOutcome`] without
//! re-mining.

use comove_core::errors::{PipelineError, TableError};
use comove_core::traits::{ItemsetMiner, RuleDeriver};
use comove_core::types::{
    ChangeTable, ItemKey, MembershipTable, PriceTable, Thresholds, TransactionTable,
};
use comove_fuzzy::{fuzzify_prices, Fuzzified};
use tracing::info;

use crate::filter;
use crate::outcome::MiningOutcome;

#[derive(Debug, Clone)]
pub struct Analysis {
    fuzzified: Fuzzified,
}

impl Analysis {
    /// Fuzzify `prices` and hold the derived tables.
    pub fn new(prices: &PriceTable) -> Result<Self, TableError> {
        Ok(Self {
            fuzzified: fuzzify_prices(prices)?,
        })
    }

    pub fn changes(&self) -> &ChangeTable {
        &self.fuzzified.changes
    }

    pub fn memberships(&self) -> &MembershipTable {
        &self.fuzzified.memberships
    }

    pub fn transactions(&self) -> &TransactionTable {
        &self.fuzzified.transactions
    }

    /// Every item key a caller may pick as an antecedent.
    pub fn antecedent_options(&self) -> &[ItemKey] {
        self.fuzzified.transactions.columns()
    }

    /// Mine, derive, and lift-filter with `thresholds`.
    pub fn run<M>(&self, thresholds: &Thresholds, miner: &M) -> Result<MiningOutcome, PipelineError>
    where
        M: ItemsetMiner + RuleDeriver,
    {
        thresholds.validate()?;

        let itemsets = miner.frequent_itemsets(self.transactions(), thresholds.min_support)?;
        if itemsets.is_empty() {
            info!(
                min_support = thresholds.min_support,
                "no frequent itemsets, skipping rule derivation"
            );
            return Ok(MiningOutcome::NoFrequentItemsets);
        }

        let raw = miner.derive_rules(&itemsets, thresholds.min_confidence)?;
        let raw_count = raw.len();
        let rules = filter::filter(raw, thresholds.min_lift);

        info!(
            itemsets = itemsets.len(),
            raw_rules = raw_count,
            rules = rules.len(),
            min_support = thresholds.min_support,
            min_confidence = thresholds.min_confidence,
            min_lift = thresholds.min_lift,
            "analysis run complete"
        );

        let itemset_count = itemsets.len();
        Ok(if rules.is_empty() {
            MiningOutcome::NoRules { itemset_count }
        } else {
            MiningOutcome::Rules {
                itemset_count,
                rules,
            }
        })
    }
}
