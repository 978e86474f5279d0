//! Transaction ledger business logic.
//!
//! The ledger is a pure accumulator: newest-first, append-only, no dedup, no
//! merge, no validation against the catalog. It trusts the caller to have
//! already validated and applied the corresponding stock change. Entries are
//! never updated or deleted.

use crate::{
    core::ids,
    state::{Product, Transaction, TransactionKind},
};
use chrono::{DateTime, Utc};

/// Prepends a transaction to the ledger (newest first).
pub fn record(transactions: &mut Vec<Transaction>, transaction: Transaction) {
    transactions.insert(0, transaction);
}

/// Builds a ledger entry for a stock movement, snapshotting the product name
/// and freezing `total_price = amount * unit price` at this moment.
#[must_use]
pub fn stock_movement(
    product: &Product,
    kind: TransactionKind,
    amount: u32,
    user_name: &str,
    timestamp: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: ids::new_id(),
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        kind,
        amount,
        user_name: user_name.to_string(),
        timestamp,
        total_price: Some(f64::from(amount) * product.price),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::test_product;

    #[test]
    fn test_record_prepends_newest_first() {
        let product = test_product("P1", "Widget", 2.0, 10);
        let mut ledger = Vec::new();

        let first = stock_movement(&product, TransactionKind::Reduction, 1, "alice", Utc::now());
        let second = stock_movement(&product, TransactionKind::Addition, 3, "bob", Utc::now());
        record(&mut ledger, first.clone());
        record(&mut ledger, second.clone());

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[0].id, second.id);
        assert_eq!(ledger[1].id, first.id);
    }

    #[test]
    fn test_stock_movement_freezes_total_price() {
        let mut product = test_product("P1", "Widget", 2.0, 10);
        let tx = stock_movement(&product, TransactionKind::Reduction, 4, "alice", Utc::now());

        assert_eq!(tx.total_price, Some(8.0));
        assert_eq!(tx.product_name, "Widget");
        assert_eq!(tx.amount, 4);

        // A later price edit must not retroactively alter the snapshot
        product.price = 100.0;
        assert_eq!(tx.total_price, Some(8.0));
    }

    #[test]
    fn test_ledger_accepts_entries_for_any_product() {
        // No validation against catalog state: the ledger records what it is
        // given, including movements larger than any current stock count.
        let product = test_product("P1", "Widget", 2.0, 1);
        let mut ledger = Vec::new();
        record(
            &mut ledger,
            stock_movement(&product, TransactionKind::Reduction, 500, "alice", Utc::now()),
        );
        assert_eq!(ledger[0].amount, 500);
    }
}
