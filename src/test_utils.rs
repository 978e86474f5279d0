//! Shared test utilities for ItemHive.
//!
//! Helper constructors for products and pre-populated states with sensible
//! defaults.

use crate::state::{Product, RootState};

/// Creates a test product with the given id, name, price, and stock.
///
/// # Defaults
/// * `sku`: the id, uppercased
/// * `category`: "General"
/// * `min_stock`: 5
#[must_use]
pub fn test_product(id: &str, name: &str, price: f64, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        sku: id.to_uppercase(),
        name: name.to_string(),
        category: "General".to_string(),
        price,
        stock,
        min_stock: 5,
        description: String::new(),
        image_url: None,
        last_updated: chrono::Utc::now(),
    }
}

/// Creates a root state whose catalog holds the given products and whose
/// other slices are at their defaults.
#[must_use]
pub fn state_with_products(products: Vec<Product>) -> RootState {
    let mut state = RootState::default();
    state.inventory.products = products;
    state
}
