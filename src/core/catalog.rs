//! Catalog business logic - Handles all product-record operations.
//!
//! The catalog is the sole owner of stock counts. Functions here mutate the
//! product list in place and return explicit results: a stock mutation that
//! cannot be applied (insufficient stock, zero quantity, unknown product)
//! reports why instead of silently leaving state unchanged. Ledger writes are
//! the caller's responsibility; nothing here touches the transaction or order
//! slices.

use crate::{
    errors::{Error, Result},
    state::Product,
};

/// Inserts a new product keyed by its caller-supplied identifier.
///
/// Duplicate-SKU enforcement is performed by the store surface before this is
/// invoked, not here.
pub fn add_product(products: &mut Vec<Product>, product: Product) {
    products.push(product);
}

/// Finds a product by identifier.
#[must_use]
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// Replaces the record matching `updated.id`.
///
/// Returns `true` if a record was replaced, `false` if the identifier was
/// absent (the catalog is left untouched).
pub fn update_product(products: &mut [Product], updated: Product) -> bool {
    match products.iter_mut().find(|p| p.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Removes the record with the given identifier.
///
/// Returns `true` if a record was removed. Historical ledger entries are not
/// touched; they keep their denormalized snapshots.
pub fn delete_product(products: &mut Vec<Product>, id: &str) -> bool {
    let before = products.len();
    products.retain(|p| p.id != id);
    products.len() != before
}

/// Decrements a product's stock by `amount` and refreshes `last_updated`.
///
/// # Errors
/// Returns an error if:
/// - `amount` is zero (`InvalidQuantity`)
/// - no product matches `id` (`ProductNotFound`)
/// - `amount` exceeds the current stock (`InsufficientStock`); stock is left
///   unchanged
pub fn reduce_stock<'a>(products: &'a mut [Product], id: &str, amount: u32) -> Result<&'a Product> {
    if amount == 0 {
        return Err(Error::InvalidQuantity { quantity: amount });
    }

    let product = products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| Error::ProductNotFound { id: id.to_string() })?;

    if amount > product.stock {
        return Err(Error::InsufficientStock {
            name: product.name.clone(),
            requested: amount,
            available: product.stock,
        });
    }

    product.stock -= amount;
    product.last_updated = chrono::Utc::now();
    Ok(product)
}

/// Increments a product's stock by `amount` and refreshes `last_updated`.
///
/// # Errors
/// Returns an error if `amount` is zero or no product matches `id`.
pub fn restock<'a>(products: &'a mut [Product], id: &str, amount: u32) -> Result<&'a Product> {
    if amount == 0 {
        return Err(Error::InvalidQuantity { quantity: amount });
    }

    let product = products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| Error::ProductNotFound { id: id.to_string() })?;

    product.stock = product.stock.saturating_add(amount);
    product.last_updated = chrono::Utc::now();
    Ok(product)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::test_product;

    #[test]
    fn test_reduce_stock_success() {
        let mut products = vec![test_product("P1", "Widget", 2.0, 10)];
        let before = products[0].last_updated;

        let product = reduce_stock(&mut products, "P1", 4).unwrap();
        assert_eq!(product.stock, 6);
        assert!(product.last_updated >= before);
    }

    #[test]
    fn test_reduce_stock_insufficient_leaves_stock_unchanged() {
        let mut products = vec![test_product("P1", "Widget", 2.0, 10)];

        let result = reduce_stock(&mut products, "P1", 12);
        assert!(matches!(
            result,
            Err(Error::InsufficientStock {
                requested: 12,
                available: 10,
                ..
            })
        ));
        assert_eq!(products[0].stock, 10);
    }

    #[test]
    fn test_reduce_stock_exact_amount_empties_stock() {
        let mut products = vec![test_product("P1", "Widget", 2.0, 10)];

        let product = reduce_stock(&mut products, "P1", 10).unwrap();
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_reduce_stock_zero_quantity() {
        let mut products = vec![test_product("P1", "Widget", 2.0, 10)];

        let result = reduce_stock(&mut products, "P1", 0);
        assert!(matches!(result, Err(Error::InvalidQuantity { quantity: 0 })));
        assert_eq!(products[0].stock, 10);
    }

    #[test]
    fn test_reduce_stock_unknown_product() {
        let mut products = vec![test_product("P1", "Widget", 2.0, 10)];

        let result = reduce_stock(&mut products, "missing", 1);
        assert!(matches!(result, Err(Error::ProductNotFound { .. })));
    }

    #[test]
    fn test_restock_increments() {
        let mut products = vec![test_product("P1", "Widget", 2.0, 10)];

        let product = restock(&mut products, "P1", 5).unwrap();
        assert_eq!(product.stock, 15);
    }

    #[test]
    fn test_restock_zero_quantity() {
        let mut products = vec![test_product("P1", "Widget", 2.0, 10)];

        let result = restock(&mut products, "P1", 0);
        assert!(matches!(result, Err(Error::InvalidQuantity { quantity: 0 })));
    }

    #[test]
    fn test_update_product_replaces_matching_record() {
        let mut products = vec![test_product("P1", "Widget", 2.0, 10)];
        let mut updated = products[0].clone();
        updated.name = "Widget Mk2".to_string();
        updated.price = 3.5;

        assert!(update_product(&mut products, updated));
        assert_eq!(products[0].name, "Widget Mk2");
        assert_eq!(products[0].price, 3.5);
    }

    #[test]
    fn test_update_product_absent_id_is_noop() {
        let mut products = vec![test_product("P1", "Widget", 2.0, 10)];
        let updated = test_product("P2", "Other", 1.0, 1);

        assert!(!update_product(&mut products, updated));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
    }

    #[test]
    fn test_delete_product() {
        let mut products = vec![
            test_product("P1", "Widget", 2.0, 10),
            test_product("P2", "Gadget", 5.0, 3),
        ];

        assert!(delete_product(&mut products, "P1"));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "P2");

        assert!(!delete_product(&mut products, "P1"));
    }
}
