//! Binarizes direction and membership into one transaction per period.
//!
//! Each commodity contributes seven columns, `L_I, L_D, M_I, M_D, H_I, H_D, S`.
//! A directional column is set when the direction matches and the bucket
//! degree is positive; the degree itself is dropped here.

use comove_core::constants::COLUMNS_PER_COMMODITY;
use comove_core::errors::TableError;
use comove_core::types::{
    Bucket, ChangeTable, Direction, ItemKey, MembershipRecord, MembershipTable, Movement,
    TransactionTable,
};
use tracing::debug;

/// The seven flags of one commodity in one period, in `ItemKey::columns_for` order.
pub fn commodity_flags(
    direction: Direction,
    membership: &MembershipRecord,
) -> [bool; COLUMNS_PER_COMMODITY] {
    let mut flags = [false; COLUMNS_PER_COMMODITY];
    let mut i = 0;
    for bucket in Bucket::ALL {
        let active = membership.degree(bucket) > 0.0;
        for movement in Movement::ALL {
            flags[i] = active && direction == Direction::from(movement);
            i += 1;
        }
    }
    flags[i] = direction == Direction::Stable;
    flags
}

/// Encode a change table and its memberships into a transaction table.
///
/// Both tables must carry the same periods and commodities.
pub fn encode(
    changes: &ChangeTable,
    memberships: &MembershipTable,
) -> Result<TransactionTable, TableError> {
    if !changes.same_shape(memberships) {
        return Err(TableError::ShapeMismatch);
    }

    let columns: Vec<ItemKey> = changes
        .commodities()
        .iter()
        .flat_map(|c| ItemKey::columns_for(c))
        .collect();

    let rows: Vec<Vec<bool>> = (0..changes.row_count())
        .map(|row| {
            changes
                .columns()
                .iter()
                .zip(memberships.columns())
                .flat_map(|(change, membership)| {
                    commodity_flags(change[row].direction, &membership[row])
                })
                .collect()
        })
        .collect();

    let table = TransactionTable::new(changes.periods().to_vec(), columns, rows)?;
    debug!(
        transactions = table.row_count(),
        items = table.column_count(),
        "encoded transactions"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_sets_only_the_stable_flag() {
        let flags = commodity_flags(Direction::Stable, &MembershipRecord { low: 1.0, medium: 0.0, high: 0.0 });
        assert_eq!(flags, [false, false, false, false, false, false, true]);
    }

    #[test]
    fn increase_follows_positive_buckets() {
        let m = MembershipRecord { low: 0.0, medium: 0.4, high: 0.2 };
        let flags = commodity_flags(Direction::Increase, &m);
        assert_eq!(flags, [false, false, true, false, true, false, false]);
    }

    #[test]
    fn decrease_with_no_positive_bucket_sets_nothing() {
        let flags = commodity_flags(Direction::Decrease, &MembershipRecord::default());
        assert_eq!(flags, [false; COLUMNS_PER_COMMODITY]);
    }
}
