//! Lift threshold and antecedent selection.
//!
//! Both filters keep the relative order of the incoming rules and never
//! touch a rule's item lists.

use comove_core::types::{ItemKey, Rule};
use tracing::debug;

/// Keep rules with `lift >= min_lift`. A NaN lift never passes.
pub fn filter(rules: Vec<Rule>, min_lift: f64) -> Vec<Rule> {
    let before = rules.len();
    let kept: Vec<Rule> = rules.into_iter().filter(|r| r.lift >= min_lift).collect();
    debug!(before, after = kept.len(), min_lift, "applied lift filter");
    kept
}

/// Keep rules whose antecedents share at least one item with `selected`.
/// An empty selection keeps nothing; "nothing selected yet" is the caller's
/// case to handle, see `MiningOutcome::select`.
pub fn select(rules: &[Rule], selected: &[ItemKey]) -> Vec<Rule> {
    rules
        .iter()
        .filter(|r| r.antecedents_intersect(selected))
        .cloned()
        .collect()
}
