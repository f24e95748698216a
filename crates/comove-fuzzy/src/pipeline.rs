//! Full fuzzification: prices to transactions in one pass.

use comove_core::errors::TableError;
use comove_core::types::{ChangeTable, MembershipTable, PriceTable, TransactionTable};
use serde::Serialize;
use tracing::info;

use crate::{classifier, encoder, membership};

/// Every derived table of one fuzzification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fuzzified {
    pub changes: ChangeTable,
    pub memberships: MembershipTable,
    pub transactions: TransactionTable,
}

/// Classify, fuzzify, and encode `prices`. Recomputes everything on each call.
pub fn fuzzify_prices(prices: &PriceTable) -> Result<Fuzzified, TableError> {
    let changes = classifier::classify(prices);
    let memberships = membership::fuzzify(&changes);
    let transactions = encoder::encode(&changes, &memberships)?;

    info!(
        periods = transactions.row_count(),
        commodities = prices.commodity_count(),
        items = transactions.column_count(),
        "fuzzified price table"
    );

    Ok(Fuzzified {
        changes,
        memberships,
        transactions,
    })
}
