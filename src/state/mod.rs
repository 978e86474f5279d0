//! State module - Contains the normalized store slices that make up the
//! application state. Each slice mirrors one concern (catalog, ledgers, POS
//! session, preferences) and the [`RootState`] combines them into the single
//! value owned by the store.

pub mod auth;
pub mod catalog;
pub mod orders;
pub mod pos;
pub mod settings;
pub mod theme;
pub mod transactions;

// Re-export the record types that the rest of the crate works with
pub use auth::{AuthState, Role, User};
pub use catalog::{CatalogState, Product};
pub use orders::{Order, OrderStatus, OrdersState};
pub use pos::{CartItem, PosState};
pub use settings::SettingsState;
pub use theme::{ThemeMode, ThemeState};
pub use transactions::{Transaction, TransactionKind, TransactionState};

use serde::{Deserialize, Serialize};

/// The combined application state: every slice the store owns.
///
/// The whole value is serialized as one blob on persistence, except the POS
/// slice, which is an ephemeral working session and is rebuilt empty on every
/// load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    /// Current session user, if any
    pub auth: AuthState,
    /// Product catalog - the authoritative owner of stock counts
    pub inventory: CatalogState,
    /// Append-only transaction ledger, newest first
    pub transactions: TransactionState,
    /// Append-only order ledger, newest first
    pub orders: OrdersState,
    /// POS cart session - never persisted
    #[serde(skip)]
    pub pos: PosState,
    /// Light/dark preference
    pub theme: ThemeState,
    /// Notification toggles
    pub settings: SettingsState,
}
