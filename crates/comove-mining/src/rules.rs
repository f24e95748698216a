//! Association rules from frequent itemsets.
//!
//! Every non-empty proper subset of an itemset is tried as the antecedent,
//! smallest first, with the remaining items as the consequent. Subsets keep
//! the itemset's item order.

use comove_core::errors::MiningError;
use comove_core::types::{FrequentItemset, ItemKey, Rule};

use crate::support::SupportIndex;

/// Rules whose confidence reaches `min_confidence`, in itemset order.
pub fn derive(itemsets: &[FrequentItemset], min_confidence: f64) -> Result<Vec<Rule>, MiningError> {
    let index = SupportIndex::new(itemsets);
    let mut rules = Vec::new();

    for itemset in itemsets.iter().filter(|s| s.items.len() >= 2) {
        let k = itemset.items.len();
        for size in 1..k {
            for chosen in combinations(k, size) {
                let (antecedents, consequents) = partition(&itemset.items, &chosen);

                let antecedent_support = index.get(&antecedents)?;
                let consequent_support = index.get(&consequents)?;
                let confidence = itemset.support / antecedent_support;
                if confidence < min_confidence {
                    continue;
                }
                rules.push(Rule {
                    antecedents,
                    consequents,
                    support: itemset.support,
                    confidence,
                    lift: confidence / consequent_support,
                });
            }
        }
    }
    Ok(rules)
}

fn partition(items: &[ItemKey], chosen: &[usize]) -> (Vec<ItemKey>, Vec<ItemKey>) {
    let mut antecedents = Vec::with_capacity(chosen.len());
    let mut consequents = Vec::with_capacity(items.len() - chosen.len());
    for (i, item) in items.iter().enumerate() {
        if chosen.contains(&i) {
            antecedents.push(item.clone());
        } else {
            consequents.push(item.clone());
        }
    }
    (antecedents, consequents)
}

/// All `r`-element index subsets of `0..n` in lexicographic order.
pub fn combinations(n: usize, r: usize) -> Vec<Vec<usize>> {
    if r > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut current: Vec<usize> = (0..r).collect();
    loop {
        out.push(current.clone());
        // Rightmost position that can still advance.
        let Some(i) = (0..r).rev().find(|&i| current[i] < n - r + i) else {
            return out;
        };
        current[i] += 1;
        for j in i + 1..r {
            current[j] = current[j - 1] + 1;
        }
    }
}
