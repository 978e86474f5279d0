//! Orders slice - The append-only ledger of order requests.
//!
//! An order's status is decided once, synchronously, at submission time:
//! either `Fulfilled` or `Rejected`. `Pending` exists as a declared variant
//! (and as a filter value for consumers) but no submission path produces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal outcome of an order request, decided at submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Declared but never produced by any submission flow
    Pending,
    /// Stock was sufficient; inventory was decremented
    Fulfilled,
    /// Stock was insufficient (or the quantity invalid); nothing was mutated
    Rejected,
}

impl OrderStatus {
    /// Lowercase wire label, as used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled => "fulfilled",
            Self::Rejected => "rejected",
        }
    }
}

/// One order request, recorded regardless of outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier for this order
    pub id: String,
    /// Weak reference - may point to a product that has since been deleted
    pub product_id: String,
    /// Denormalized product name snapshot, frozen at creation
    pub product_name: String,
    /// Requested unit count
    pub quantity: u32,
    /// Actor snapshot at submission time
    pub requested_by: String,
    /// Outcome decided at submission
    pub status: OrderStatus,
    /// When the order was submitted
    pub timestamp: DateTime<Utc>,
    /// Free-text note; carries the rejection reason when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The order ledger slice, newest entry first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersState {
    /// All recorded orders, newest first
    pub orders: Vec<Order>,
}
