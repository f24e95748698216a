//! Order-insensitive support lookup for frequent itemsets.

use comove_core::errors::MiningError;
use comove_core::types::{FrequentItemset, ItemKey};
use rustc_hash::FxHashMap;

/// Support by itemset, keyed on the sorted item list.
#[derive(Debug, Default)]
pub struct SupportIndex {
    support: FxHashMap<Vec<ItemKey>, f64>,
}

impl SupportIndex {
    pub fn new(itemsets: &[FrequentItemset]) -> Self {
        let support = itemsets
            .iter()
            .map(|set| (sorted(set.items.iter()), set.support))
            .collect();
        Self { support }
    }

    pub fn len(&self) -> usize {
        self.support.len()
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }

    /// Support of `items` in any order.
    pub fn get<'a>(&self, items: impl IntoIterator<Item = &'a ItemKey>) -> Result<f64, MiningError> {
        let key = sorted(items);
        self.support
            .get(&key)
            .copied()
            .ok_or_else(|| MiningError::MissingSupport {
                itemset: key
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

fn sorted<'a>(items: impl IntoIterator<Item = &'a ItemKey>) -> Vec<ItemKey> {
    let mut key: Vec<ItemKey> = items.into_iter().cloned().collect();
    key.sort();
    key
}
