//! Report generation business logic.
//!
//! Structured inventory summaries for the dashboard and reports screens, plus
//! small formatting helpers. Everything here reads state; nothing mutates.

use crate::state::{Product, RootState, Transaction};

/// Stock-level classification of a single product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    /// Stock is above the minimum threshold
    InStock,
    /// Stock is at or below the minimum threshold but not zero
    LowStock,
    /// No stock left
    OutOfStock,
}

impl StockStatus {
    /// Display label as shown in listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

/// Classifies a product by its stock level against its minimum threshold.
#[must_use]
pub const fn stock_status(product: &Product) -> StockStatus {
    if product.stock == 0 {
        StockStatus::OutOfStock
    } else if product.stock <= product.min_stock {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Per-category rollup within an inventory summary.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRollup {
    /// Category label
    pub category: String,
    /// Number of products in the category
    pub product_count: usize,
    /// Total stock units across the category
    pub units: u64,
    /// Total inventory value (`price * stock`) across the category
    pub value: f64,
}

/// A point-in-time inventory summary.
#[derive(Clone, Debug, PartialEq)]
pub struct InventorySummary {
    /// Number of catalog entries
    pub product_count: usize,
    /// Total stock units across the catalog
    pub total_units: u64,
    /// Total inventory value (`price * stock`) across the catalog
    pub total_value: f64,
    /// Products at or below their minimum threshold (excluding out-of-stock)
    pub low_stock: Vec<Product>,
    /// Products with zero stock
    pub out_of_stock: Vec<Product>,
    /// Rollups per category, largest value first
    pub categories: Vec<CategoryRollup>,
    /// Most recent ledger entries, newest first
    pub recent_transactions: Vec<Transaction>,
}

/// Builds an inventory summary over the current state.
///
/// `recent_limit` caps the number of ledger entries included (the ledger is
/// already newest-first, so this is a simple prefix).
#[must_use]
pub fn inventory_summary(state: &RootState, recent_limit: usize) -> InventorySummary {
    let products = &state.inventory.products;

    let total_units = products.iter().map(|p| u64::from(p.stock)).sum();
    let total_value = products
        .iter()
        .map(|p| p.price * f64::from(p.stock))
        .sum();

    let low_stock = products
        .iter()
        .filter(|p| stock_status(p) == StockStatus::LowStock)
        .cloned()
        .collect();
    let out_of_stock = products
        .iter()
        .filter(|p| stock_status(p) == StockStatus::OutOfStock)
        .cloned()
        .collect();

    let mut categories: Vec<CategoryRollup> = Vec::new();
    for product in products {
        match categories
            .iter_mut()
            .find(|c| c.category == product.category)
        {
            Some(rollup) => {
                rollup.product_count += 1;
                rollup.units += u64::from(product.stock);
                rollup.value += product.price * f64::from(product.stock);
            }
            None => categories.push(CategoryRollup {
                category: product.category.clone(),
                product_count: 1,
                units: u64::from(product.stock),
                value: product.price * f64::from(product.stock),
            }),
        }
    }
    categories.sort_by(|a, b| b.value.total_cmp(&a.value));

    let recent_transactions = state
        .transactions
        .transactions
        .iter()
        .take(recent_limit)
        .cloned()
        .collect();

    InventorySummary {
        product_count: products.len(),
        total_units,
        total_value,
        low_stock,
        out_of_stock,
        categories,
        recent_transactions,
    }
}

/// Formats a currency amount like `$1,999.00` (thousands grouped).
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    // Cast safety: cent counts for any realistic inventory value fit u64;
    // truncation after round is intentional.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}
