//! Settings slice - User-facing notification preferences.

use serde::{Deserialize, Serialize};

/// Notification toggles surfaced on the settings screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    /// Notify on order status outcomes
    pub order_updates: bool,
    /// Notify when a product crosses its low-stock threshold
    pub low_stock_alerts: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            order_updates: true,
            low_stock_alerts: true,
        }
    }
}
