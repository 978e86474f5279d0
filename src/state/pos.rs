//! POS slice - The ephemeral cart/checkout session.
//!
//! This slice is a working set accumulated before a single checkout and is
//! deliberately never persisted: a reload always starts with an empty cart.

use crate::state::catalog::Product;

/// One cart line: a product snapshot plus the requested quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    /// Snapshot of the product at the time it entered the cart
    pub product: Product,
    /// Units requested for this line
    pub quantity: u32,
    /// Optional per-line discount in currency units
    pub discount: Option<f64>,
}

/// The POS session state.
#[derive(Clone, Debug, PartialEq)]
pub struct PosState {
    /// Current cart lines
    pub cart: Vec<CartItem>,
    /// Tax rate applied to the subtotal (0.1 = 10%)
    pub tax_rate: f64,
    /// Flat discount on the whole cart
    pub active_discount: f64,
}

impl Default for PosState {
    fn default() -> Self {
        Self {
            cart: Vec::new(),
            tax_rate: 0.10,
            active_discount: 0.0,
        }
    }
}
