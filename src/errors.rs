//! Unified error types for ItemHive.
//!
//! Validation rejections (insufficient stock, invalid quantity, duplicate SKU)
//! are explicit variants rather than silent no-ops, so callers can never
//! mistake a refused stock mutation for success.

use thiserror::Error;

/// All failure modes the crate surfaces.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or value problem
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Requested quantity is zero (quantities must be strictly positive)
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The offending quantity
        quantity: u32,
    },

    /// Requested quantity exceeds the current stock count
    #[error("Insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        /// Product name
        name: String,
        /// Units requested
        requested: u32,
        /// Units actually available
        available: u32,
    },

    /// No catalog entry with the given identifier
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The identifier that failed to resolve
        id: String,
    },

    /// A product with this SKU already exists in the catalog
    #[error("A product with SKU {sku} already exists")]
    DuplicateSku {
        /// The colliding SKU
        sku: String,
    },

    /// No order with the given identifier
    #[error("Order not found: {id}")]
    OrderNotFound {
        /// The identifier that failed to resolve
        id: String,
    },

    /// Checkout was attempted with an empty cart
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Credentials did not match either fixed account
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Persisted blob could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted blob carries a version newer than this build understands
    #[error("Unsupported store version {found} (current is {current})")]
    UnsupportedVersion {
        /// Version found in the blob
        found: u32,
        /// Version this build writes
        current: u32,
    },

    /// Filesystem failure around the persisted blob or seed file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed CSV could not be read
    #[error("Seed CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Transport failure talking to the email endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Email endpoint answered with a non-success status
    #[error("Email endpoint rejected the export with status {status}")]
    EmailRejected {
        /// HTTP status code returned
        status: u16,
    },
}

/// Convenience `Result` type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
