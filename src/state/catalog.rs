//! Catalog slice - Represents the product catalog, the sole owner of stock
//! counts.
//!
//! Every stock-affecting operation reads and writes `stock` here; ledger
//! entries carry denormalized snapshots instead of referencing back into the
//! catalog, so deleting a product never rewrites history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier
    pub id: String,
    /// Human-facing stock-keeping unit, unique by caller convention
    pub sku: String,
    /// Display name of the product
    pub name: String,
    /// Free-text category label (e.g. "Electronics")
    pub category: String,
    /// Unit price in currency units, non-negative
    pub price: f64,
    /// Current stock count; never driven below zero by any single operation
    pub stock: u32,
    /// Threshold at or below which the product counts as low stock
    pub min_stock: u32,
    /// Free-text description
    pub description: String,
    /// Optional product image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Refreshed on every stock-affecting mutation
    pub last_updated: DateTime<Utc>,
}

/// The catalog slice: product records keyed by their `id` field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// All products currently in the catalog
    pub products: Vec<Product>,
}
