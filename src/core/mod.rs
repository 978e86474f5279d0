//! Core business logic - framework-agnostic catalog, ledger, order, checkout,
//! auth, and reporting operations. Everything here works on plain state
//! slices; the store layer wraps these behind its serialized command surface.

/// Session login/logout against the built-in accounts
pub mod auth;
/// Product catalog operations - the owner of stock counts
pub mod catalog;
/// POS cart session and atomic checkout
pub mod checkout;
/// Random identifier generation
pub mod ids;
/// Append-only transaction ledger
pub mod ledger;
/// Order desk submission and the order ledger
pub mod orders;
/// Inventory summaries and formatting helpers
pub mod report;
