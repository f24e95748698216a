//! FP-Growth collaborator over fuzzified price tables.

use comove_core::traits::{ItemsetMiner, RuleDeriver};
use comove_core::types::{ItemKey, TransactionTable};
use comove_fuzzy::fuzzify_prices;
use comove_mining::FpGrowthMiner;
use proptest::prelude::*;
use test_fixtures::{lockstep_prices, random_walk_prices};

fn key(s: &str) -> ItemKey {
    s.parse().unwrap()
}

fn lockstep_transactions() -> TransactionTable {
    fuzzify_prices(&lockstep_prices()).unwrap().transactions
}

#[test]
fn lockstep_itemsets_and_support() {
    let itemsets = FpGrowthMiner
        .frequent_itemsets(&lockstep_transactions(), 0.1)
        .unwrap();

    let rendered: Vec<(Vec<String>, f64)> = itemsets
        .iter()
        .map(|s| (s.items.iter().map(ToString::to_string).collect(), s.support))
        .collect();
    assert_eq!(
        rendered,
        vec![
            (vec!["A_H_I".to_string()], 0.8),
            (vec!["A_S".to_string()], 0.2),
            (vec!["B_H_I".to_string()], 0.8),
            (vec!["B_S".to_string()], 0.2),
            (vec!["A_H_I".to_string(), "B_H_I".to_string()], 0.8),
            (vec!["A_S".to_string(), "B_S".to_string()], 0.2),
        ]
    );
}

#[test]
fn support_threshold_excludes_rare_itemsets() {
    let itemsets = FpGrowthMiner
        .frequent_itemsets(&lockstep_transactions(), 0.5)
        .unwrap();
    assert_eq!(itemsets.len(), 3);
    assert!(itemsets.iter().all(|s| s.support >= 0.5));
}

#[test]
fn unreachable_support_yields_nothing() {
    let itemsets = FpGrowthMiner
        .frequent_itemsets(&lockstep_transactions(), 1.0)
        .unwrap();
    assert!(itemsets.is_empty());
}

#[test]
fn lockstep_rule_has_full_confidence() {
    let miner = FpGrowthMiner;
    let itemsets = miner.frequent_itemsets(&lockstep_transactions(), 0.1).unwrap();
    let rules = miner.derive_rules(&itemsets, 0.5).unwrap();

    let rule = rules
        .iter()
        .find(|r| r.antecedents == [key("A_H_I")] && r.consequents == [key("B_H_I")])
        .expect("A_H_I -> B_H_I");
    assert_eq!(rule.confidence, 1.0);
    assert!((rule.lift - 1.25).abs() < 1e-12);
    assert!((rule.support - 0.8).abs() < 1e-12);
    assert_eq!(rules.len(), 4);
}

#[test]
fn mining_is_deterministic() {
    let t = fuzzify_prices(&random_walk_prices(6, 40, 11)).unwrap().transactions;
    let first = FpGrowthMiner.frequent_itemsets(&t, 0.05).unwrap();
    let second = FpGrowthMiner.frequent_itemsets(&t, 0.05).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn metrics_respect_thresholds(seed in any::<u64>(), min_support in 0.05f64..0.6, min_confidence in 0.1f64..1.0) {
        let t = fuzzify_prices(&random_walk_prices(4, 24, seed)).unwrap().transactions;
        let itemsets = FpGrowthMiner.frequent_itemsets(&t, min_support).unwrap();
        for set in &itemsets {
            prop_assert!(set.support >= min_support);
            let present = t
                .rows()
                .iter()
                .filter(|row| set.items.iter().all(|k| row[t.column_index(k).unwrap()]))
                .count();
            prop_assert_eq!(present as f64 / t.row_count() as f64, set.support);
        }

        let rules = FpGrowthMiner.derive_rules(&itemsets, min_confidence).unwrap();
        for rule in &rules {
            prop_assert!(rule.confidence >= min_confidence);
            prop_assert!(rule.lift > 0.0);
            prop_assert!(rule.antecedents.iter().all(|a| !rule.consequents.contains(a)));
        }
    }
}
