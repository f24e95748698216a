//! Text rendering of itemsets and rules.

use comove_core::constants::ITEMSET_SEPARATOR;
use comove_core::types::{ItemKey, Rule};
use serde::{Deserialize, Serialize};

/// Join item keys in the order given. No sorting.
pub fn render_itemset(items: &[ItemKey]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(ITEMSET_SEPARATOR)
}

/// One display row of the rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedRule {
    pub antecedents: String,
    pub consequents: String,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl From<&Rule> for RenderedRule {
    fn from(rule: &Rule) -> Self {
        Self {
            antecedents: render_itemset(&rule.antecedents),
            consequents: render_itemset(&rule.consequents),
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
        }
    }
}

pub fn render_rules(rules: &[Rule]) -> Vec<RenderedRule> {
    rules.iter().map(RenderedRule::from).collect()
}
