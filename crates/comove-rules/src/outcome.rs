//! Result status of one mining run.
//!
//! "Nothing frequent" and "nothing passed the thresholds" are both normal
//! results, and callers need to tell them apart.

use std::fmt;

use comove_core::types::{ItemKey, Rule};
use serde::Serialize;

use crate::filter;
use crate::render::{render_rules, RenderedRule};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MiningOutcome {
    /// The miner found no itemset at the chosen support. Rule derivation was skipped.
    NoFrequentItemsets,
    /// Itemsets were found but no rule cleared the confidence and lift thresholds.
    NoRules { itemset_count: usize },
    /// At least one rule survived, in the miner's order.
    Rules { itemset_count: usize, rules: Vec<Rule> },
}

impl MiningOutcome {
    /// Surviving rules; empty for both empty outcomes.
    pub fn rules(&self) -> &[Rule] {
        match self {
            Self::Rules { rules, .. } => rules,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rules().is_empty()
    }

    /// Rules whose antecedents intersect `selected`.
    ///
    /// An empty selection returns no rules. Callers that show the full list
    /// until the user picks an antecedent should fall back to [`rules`](Self::rules)
    /// when `selected` is empty.
    pub fn select(&self, selected: &[ItemKey]) -> Vec<Rule> {
        filter::select(self.rules(), selected)
    }

    pub fn render(&self) -> Vec<RenderedRule> {
        render_rules(self.rules())
    }

    /// Rendered rules as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.render())
    }
}

impl fmt::Display for MiningOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFrequentItemsets => {
                write!(f, "no frequent itemsets at the chosen minimum support")
            }
            Self::NoRules { itemset_count } => write!(
                f,
                "{itemset_count} frequent itemsets, but no rules passed the confidence and lift thresholds"
            ),
            Self::Rules {
                itemset_count,
                rules,
            } => write!(
                f,
                "{} rules from {itemset_count} frequent itemsets",
                rules.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outcomes_are_distinct() {
        let none = MiningOutcome::NoFrequentItemsets;
        let no_rules = MiningOutcome::NoRules { itemset_count: 3 };
        assert_ne!(none, no_rules);
        assert!(none.is_empty() && no_rules.is_empty());
        assert_ne!(none.to_string(), no_rules.to_string());
    }

    #[test]
    fn status_tag_serializes() {
        let json = serde_json::to_value(MiningOutcome::NoRules { itemset_count: 2 }).unwrap();
        assert_eq!(json["status"], "no_rules");
        assert_eq!(json["itemset_count"], 2);
    }
}
