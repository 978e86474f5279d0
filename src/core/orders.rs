//! Order desk business logic - The one place an order ledger entry, a stock
//! decrement, and a transaction ledger entry must move together.
//!
//! An order's fate is decided synchronously at submission: a fulfillable
//! request (strictly positive quantity, no larger than current stock) becomes
//! a `Fulfilled` order plus a stock decrement plus one reduction transaction;
//! anything else becomes a `Rejected` order and touches nothing besides the
//! order ledger. There is no pending state and no post-creation transition in
//! the submission flow.

use crate::{
    core::{catalog, ids, ledger},
    errors::{Error, Result},
    state::{Order, OrderStatus, RootState, TransactionKind},
};
use tracing::info;

/// Prepends an order to the ledger (newest first).
pub fn add_order(orders: &mut Vec<Order>, order: Order) {
    orders.insert(0, order);
}

/// Overwrites the status of the first order matching `id`.
///
/// No submission flow calls this; order statuses are terminal at creation.
/// It exists for consumers that need a manual correction path.
///
/// # Errors
/// Returns `OrderNotFound` if no order matches.
pub fn update_order_status(orders: &mut [Order], id: &str, status: OrderStatus) -> Result<()> {
    let order = orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or_else(|| Error::OrderNotFound { id: id.to_string() })?;
    order.status = status;
    Ok(())
}

/// Submits an order request and decides its outcome.
///
/// Not fulfillable: records a `Rejected` order whose notes capture the
/// shortfall, and performs no catalog or transaction mutation. Fulfillable:
/// records a `Fulfilled` order, decrements stock by the requested quantity,
/// and appends exactly one reduction transaction whose total is
/// `quantity * unit price` captured before the decrement.
///
/// The caller-supplied note, when present, takes precedence over the
/// generated rejection reason.
///
/// # Errors
/// Returns `ProductNotFound` if `product_id` does not resolve; an unknown
/// product is a caller mistake, not an order outcome.
pub fn place_order(
    state: &mut RootState,
    product_id: &str,
    quantity: u32,
    notes: Option<String>,
) -> Result<Order> {
    let product = catalog::find_product(&state.inventory.products, product_id)
        .ok_or_else(|| Error::ProductNotFound {
            id: product_id.to_string(),
        })?
        .clone();

    let requested_by = state
        .auth
        .user
        .as_ref()
        .map_or_else(|| "Admin".to_string(), |u| u.username.clone());

    let id = ids::order_id();
    let timestamp = chrono::Utc::now();
    let fulfillable = quantity > 0 && quantity <= product.stock;

    if !fulfillable {
        let reason = if quantity == 0 {
            "Invalid quantity requested".to_string()
        } else {
            let short_by = quantity - product.stock;
            format!("Insufficient stock: short by {short_by} unit(s)")
        };
        let order = Order {
            id: id.clone(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            requested_by,
            status: OrderStatus::Rejected,
            timestamp,
            notes: notes.filter(|n| !n.trim().is_empty()).or(Some(reason)),
        };
        add_order(&mut state.orders.orders, order.clone());
        info!(order_id = %id, product = %product.name, quantity, "order rejected");
        return Ok(order);
    }

    let order = Order {
        id: id.clone(),
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        quantity,
        requested_by: requested_by.clone(),
        status: OrderStatus::Fulfilled,
        timestamp,
        notes: notes.filter(|n| !n.trim().is_empty()),
    };
    add_order(&mut state.orders.orders, order.clone());

    // Total price uses the unit price captured above, before the decrement
    let mut transaction = ledger::stock_movement(
        &product,
        TransactionKind::Reduction,
        quantity,
        &requested_by,
        timestamp,
    );
    transaction.id = format!("ORD-{id}");

    catalog::reduce_stock(&mut state.inventory.products, product_id, quantity)?;
    ledger::record(&mut state.transactions.transactions, transaction);

    info!(order_id = %id, product = %product.name, quantity, "order fulfilled");
    Ok(order)
}
