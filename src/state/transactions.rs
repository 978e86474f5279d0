//! Transaction slice - The append-only ledger of stock-affecting events.
//!
//! Entries are historical facts: `product_name` and `total_price` are copied
//! at write time and never re-resolved against the catalog, so they survive
//! later edits and deletes of the product they describe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a stock movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Stock added (restock)
    Addition,
    /// Stock removed (sale, order fulfillment, manual reduction)
    Reduction,
}

impl TransactionKind {
    /// Lowercase wire label, as used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Reduction => "reduction",
        }
    }
}

/// One immutable ledger entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier for this event
    pub id: String,
    /// Weak reference - may point to a product that has since been deleted
    pub product_id: String,
    /// Denormalized product name snapshot, frozen at creation
    pub product_name: String,
    /// Whether stock went up or down
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Units moved, always positive
    pub amount: u32,
    /// Actor snapshot at the time of the operation
    pub user_name: String,
    /// When the event happened
    pub timestamp: DateTime<Utc>,
    /// `amount * unit price` captured at operation time; absent for
    /// non-priced movements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

/// The transaction ledger slice, newest entry first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionState {
    /// All recorded transactions, newest first
    pub transactions: Vec<Transaction>,
}
