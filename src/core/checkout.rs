//! POS cart and checkout business logic.
//!
//! The cart is a working set of product snapshots plus quantities. Checkout is
//! all-or-nothing: every line is validated against current stock before any
//! mutation, and only then are the stock decrements and ledger appends applied,
//! one transaction per line. The receipt totals and the ledger values both use
//! the cart-line snapshot price, so a single checkout carries one price per
//! product no matter what was edited in the catalog meanwhile.

use crate::{
    core::{catalog, ids, ledger},
    errors::{Error, Result},
    state::{CartItem, PosState, Product, RootState, TransactionKind},
};
use tracing::info;

/// Totals for the current cart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartTotals {
    /// Sum of `price * quantity` over all lines
    pub subtotal: f64,
    /// `subtotal * tax_rate`
    pub tax: f64,
    /// `subtotal + tax - active_discount`
    pub total: f64,
}

/// Settled receipt returned by a successful checkout.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    /// Receipt identifier; line transactions are prefixed with it
    pub id: String,
    /// Number of cart lines settled
    pub lines: usize,
    /// Subtotal at checkout time
    pub subtotal: f64,
    /// Tax applied
    pub tax: f64,
    /// Flat cart discount applied
    pub discount: f64,
    /// Amount charged
    pub total: f64,
}

/// Adds a product to the cart, merging into an existing line if present.
///
/// Out-of-stock products never enter the cart; returns `false` for them and
/// leaves the cart unchanged.
pub fn add_to_cart(pos: &mut PosState, product: &Product) -> bool {
    if product.stock == 0 {
        return false;
    }
    match pos.cart.iter_mut().find(|item| item.product.id == product.id) {
        Some(item) => item.quantity += 1,
        None => pos.cart.push(CartItem {
            product: product.clone(),
            quantity: 1,
            discount: None,
        }),
    }
    true
}

/// Removes the line for the given product identifier, if present.
pub fn remove_from_cart(pos: &mut PosState, product_id: &str) {
    pos.cart.retain(|item| item.product.id != product_id);
}

/// Sets a line's quantity; a quantity of zero removes the line.
pub fn update_quantity(pos: &mut PosState, product_id: &str, quantity: u32) {
    if quantity == 0 {
        remove_from_cart(pos, product_id);
        return;
    }
    if let Some(item) = pos.cart.iter_mut().find(|item| item.product.id == product_id) {
        item.quantity = quantity;
    }
}

/// Empties the cart and resets the flat cart discount.
pub fn clear_cart(pos: &mut PosState) {
    pos.cart.clear();
    pos.active_discount = 0.0;
}

/// Sets the flat discount applied to the whole cart.
pub fn set_cart_discount(pos: &mut PosState, discount: f64) {
    pos.active_discount = discount;
}

/// Computes subtotal, tax, and total for the current cart.
#[must_use]
pub fn cart_totals(pos: &PosState) -> CartTotals {
    let subtotal: f64 = pos
        .cart
        .iter()
        .map(|item| item.product.price * f64::from(item.quantity))
        .sum();
    let tax = subtotal * pos.tax_rate;
    CartTotals {
        subtotal,
        tax,
        total: subtotal + tax - pos.active_discount,
    }
}

/// Checks out the cart as one uninterruptible unit.
///
/// Every line is validated against current catalog stock first; if any line is
/// unfulfillable the whole checkout fails and nothing is mutated. On success,
/// each line decrements stock and appends one reduction transaction
/// (id `<receipt>-<product id prefix>`) priced from the cart-line snapshot,
/// then the cart is cleared.
///
/// # Errors
/// Returns an error if:
/// - the cart is empty (`EmptyCart`)
/// - any line references a product no longer in the catalog (`ProductNotFound`)
/// - any line's quantity exceeds that product's current stock
///   (`InsufficientStock`)
pub fn checkout(state: &mut RootState) -> Result<Receipt> {
    if state.pos.cart.is_empty() {
        return Err(Error::EmptyCart);
    }

    // Validate all lines before touching anything, aggregating per product
    // so duplicate lines for the same product cannot pass individually while
    // their sum oversells
    let mut demanded: Vec<(&str, u32)> = Vec::new();
    for item in &state.pos.cart {
        match demanded.iter_mut().find(|(id, _)| *id == item.product.id) {
            Some((_, quantity)) => *quantity += item.quantity,
            None => demanded.push((&item.product.id, item.quantity)),
        }
    }
    for (id, quantity) in demanded {
        let product = catalog::find_product(&state.inventory.products, id).ok_or_else(|| {
            Error::ProductNotFound { id: id.to_string() }
        })?;
        if quantity > product.stock {
            return Err(Error::InsufficientStock {
                name: product.name.clone(),
                requested: quantity,
                available: product.stock,
            });
        }
    }

    let user_name = state
        .auth
        .user
        .as_ref()
        .map_or_else(|| "Staff".to_string(), |u| u.username.clone());

    let totals = cart_totals(&state.pos);
    let discount = state.pos.active_discount;
    let receipt_id = ids::order_id();
    let timestamp = chrono::Utc::now();
    let lines = std::mem::take(&mut state.pos.cart);

    for item in &lines {
        // Unit price from the cart-line snapshot, the same source the receipt
        // totals come from: one price per operation, charged and ledgered
        let mut transaction = ledger::stock_movement(
            &item.product,
            TransactionKind::Reduction,
            item.quantity,
            &user_name,
            timestamp,
        );
        let prefix: String = item.product.id.chars().take(3).collect();
        transaction.id = format!("{receipt_id}-{prefix}");

        catalog::reduce_stock(&mut state.inventory.products, &item.product.id, item.quantity)?;
        ledger::record(&mut state.transactions.transactions, transaction);
    }

    state.pos.active_discount = 0.0;

    info!(
        receipt = %receipt_id,
        lines = lines.len(),
        total = totals.total,
        "checkout settled"
    );

    Ok(Receipt {
        id: receipt_id,
        lines: lines.len(),
        subtotal: totals.subtotal,
        tax: totals.tax,
        discount,
        total: totals.total,
    })
}
