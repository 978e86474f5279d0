//! The single-writer store.
//!
//! [`Store`] owns the whole [`RootState`] behind one async mutex. Every
//! command acquires the lock, runs its multi-step sequence (validate, mutate
//! catalog, append ledger entries) to completion, and releases it. That makes
//! "no other mutation interleaves between the stock check and the decrement"
//! an enforced invariant rather than an accident of a single-threaded host.
//! Cross-process access to the same persisted file remains out of scope.

pub mod persist;

pub use persist::STORE_VERSION;

use crate::{
    config::AppConfig,
    core::{auth, catalog, checkout, ids, ledger, orders, report},
    errors::{Error, Result},
    export,
    seed,
    state::{
        Order, OrderStatus, Product, RootState, ThemeMode, Transaction, TransactionKind, User,
    },
};
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Fields accepted when adding a product; the store assigns the identifier
/// and timestamp.
#[derive(Clone, Debug)]
pub struct NewProduct {
    /// Human-facing SKU; stored uppercased, must not collide
    pub sku: String,
    /// Display name
    pub name: String,
    /// Category label; empty becomes "Uncategorized"
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Opening stock count
    pub stock: u32,
    /// Low-stock threshold
    pub min_stock: u32,
    /// Free-text description
    pub description: String,
}

/// The owned application store: state plus the optional persistence target.
pub struct Store {
    state: Mutex<RootState>,
    path: Option<PathBuf>,
}

impl Store {
    /// Wraps an existing state with no persistence target. Used by tests and
    /// embedders that manage persistence themselves.
    #[must_use]
    pub fn in_memory(state: RootState) -> Self {
        Self {
            state: Mutex::new(state),
            path: None,
        }
    }

    /// Opens the store from the configured blob path, seeding or migrating
    /// as needed.
    ///
    /// # Errors
    /// Returns an error if the seed CSV or the persisted blob cannot be read.
    pub async fn open(config: &AppConfig) -> Result<Self> {
        let seed_csv = match &config.seed_path {
            Some(path) => tokio::fs::read_to_string(path).await?,
            None => seed::BUNDLED_SEED.to_string(),
        };
        let seed = seed::parse_seed_csv(&seed_csv)?;

        let state = persist::load(&config.data_path, seed).await?;
        info!(
            products = state.inventory.products.len(),
            transactions = state.transactions.transactions.len(),
            orders = state.orders.orders.len(),
            "store opened"
        );

        Ok(Self {
            state: Mutex::new(state),
            path: Some(config.data_path.clone()),
        })
    }

    /// Writes the current state to the configured blob path. No-op for
    /// in-memory stores.
    ///
    /// # Errors
    /// Returns an error if serialization or the filesystem write fails.
    pub async fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let state = self.state.lock().await;
        persist::save(path, &state).await
    }

    // --- catalog ---

    /// Returns a snapshot of the full catalog.
    pub async fn products(&self) -> Vec<Product> {
        self.state.lock().await.inventory.products.clone()
    }

    /// Returns a snapshot of one product, if present.
    pub async fn product(&self, id: &str) -> Option<Product> {
        let state = self.state.lock().await;
        catalog::find_product(&state.inventory.products, id).cloned()
    }

    /// Adds a product to the catalog, assigning it a fresh identifier.
    ///
    /// # Errors
    /// Returns `DuplicateSku` if the SKU (compared case-insensitively)
    /// already exists.
    pub async fn add_product(&self, new: NewProduct) -> Result<Product> {
        let mut state = self.state.lock().await;

        let sku = new.sku.trim().to_uppercase();
        if state
            .inventory
            .products
            .iter()
            .any(|p| p.sku.eq_ignore_ascii_case(&sku))
        {
            return Err(Error::DuplicateSku { sku });
        }

        let category = if new.category.trim().is_empty() {
            "Uncategorized".to_string()
        } else {
            new.category
        };

        let product = Product {
            id: ids::new_id(),
            sku,
            name: new.name,
            category,
            price: new.price,
            stock: new.stock,
            min_stock: new.min_stock,
            description: new.description,
            image_url: None,
            last_updated: chrono::Utc::now(),
        };
        catalog::add_product(&mut state.inventory.products, product.clone());
        info!(id = %product.id, sku = %product.sku, "product added");
        Ok(product)
    }

    /// Replaces the catalog record matching `updated.id`. Returns `false`
    /// (and changes nothing) when the identifier is absent.
    pub async fn update_product(&self, updated: Product) -> bool {
        let mut state = self.state.lock().await;
        let applied = catalog::update_product(&mut state.inventory.products, updated);
        if !applied {
            warn!("update_product: no matching record");
        }
        applied
    }

    /// Deletes a product. Historical ledger entries keep their snapshots.
    pub async fn delete_product(&self, id: &str) -> bool {
        let mut state = self.state.lock().await;
        catalog::delete_product(&mut state.inventory.products, id)
    }

    /// Reduces a product's stock and appends the matching reduction
    /// transaction, as one uninterruptible unit.
    ///
    /// # Errors
    /// Returns an error for a zero amount, an unknown product, or
    /// insufficient stock; nothing is mutated in those cases.
    pub async fn reduce_stock(&self, id: &str, amount: u32) -> Result<Transaction> {
        let mut state = self.state.lock().await;
        let user_name = state
            .auth
            .user
            .as_ref()
            .map_or_else(|| "Unknown".to_string(), |u| u.username.clone());

        // Only the stock count moves here; the price snapshot taken after
        // the decrement is the price at operation time
        let product = catalog::reduce_stock(&mut state.inventory.products, id, amount)?.clone();
        let transaction = ledger::stock_movement(
            &product,
            TransactionKind::Reduction,
            amount,
            &user_name,
            chrono::Utc::now(),
        );
        ledger::record(&mut state.transactions.transactions, transaction.clone());

        info!(product = %product.name, amount, "stock reduced");
        Ok(transaction)
    }

    /// Increments a product's stock and appends the matching addition
    /// transaction.
    ///
    /// # Errors
    /// Returns an error for a zero amount or an unknown product.
    pub async fn restock(&self, id: &str, amount: u32) -> Result<Transaction> {
        let mut state = self.state.lock().await;
        let user_name = state
            .auth
            .user
            .as_ref()
            .map_or_else(|| "Unknown".to_string(), |u| u.username.clone());

        let product = catalog::restock(&mut state.inventory.products, id, amount)?.clone();
        let transaction = ledger::stock_movement(
            &product,
            TransactionKind::Addition,
            amount,
            &user_name,
            chrono::Utc::now(),
        );
        ledger::record(&mut state.transactions.transactions, transaction.clone());

        info!(product = %product.name, amount, "stock added");
        Ok(transaction)
    }

    // --- ledgers ---

    /// Returns a snapshot of the transaction ledger, newest first.
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().await.transactions.transactions.clone()
    }

    /// Returns a snapshot of the order ledger, newest first.
    pub async fn orders(&self) -> Vec<Order> {
        self.state.lock().await.orders.orders.clone()
    }

    /// Submits an order; see [`crate::core::orders::place_order`] for the
    /// outcome rules.
    ///
    /// # Errors
    /// Returns `ProductNotFound` when the product identifier does not
    /// resolve.
    pub async fn place_order(
        &self,
        product_id: &str,
        quantity: u32,
        notes: Option<String>,
    ) -> Result<Order> {
        let mut state = self.state.lock().await;
        orders::place_order(&mut state, product_id, quantity, notes)
    }

    /// Overwrites an order's status. Not used by any submission flow.
    ///
    /// # Errors
    /// Returns `OrderNotFound` when no order matches.
    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<()> {
        let mut state = self.state.lock().await;
        orders::update_order_status(&mut state.orders.orders, id, status)
    }

    // --- POS session ---

    /// Adds a product to the cart (merging duplicate lines). Returns `false`
    /// for unknown or out-of-stock products.
    pub async fn add_to_cart(&self, product_id: &str) -> bool {
        let mut state = self.state.lock().await;
        let Some(product) = catalog::find_product(&state.inventory.products, product_id).cloned()
        else {
            return false;
        };
        checkout::add_to_cart(&mut state.pos, &product)
    }

    /// Sets a cart line's quantity; zero removes the line.
    pub async fn update_cart_quantity(&self, product_id: &str, quantity: u32) {
        let mut state = self.state.lock().await;
        checkout::update_quantity(&mut state.pos, product_id, quantity);
    }

    /// Removes a cart line.
    pub async fn remove_from_cart(&self, product_id: &str) {
        let mut state = self.state.lock().await;
        checkout::remove_from_cart(&mut state.pos, product_id);
    }

    /// Empties the cart and resets the cart discount.
    pub async fn clear_cart(&self) {
        let mut state = self.state.lock().await;
        checkout::clear_cart(&mut state.pos);
    }

    /// Sets the flat whole-cart discount.
    pub async fn set_cart_discount(&self, discount: f64) {
        let mut state = self.state.lock().await;
        checkout::set_cart_discount(&mut state.pos, discount);
    }

    /// Returns subtotal/tax/total for the current cart.
    pub async fn cart_totals(&self) -> checkout::CartTotals {
        let state = self.state.lock().await;
        checkout::cart_totals(&state.pos)
    }

    /// Checks out the cart; see [`crate::core::checkout::checkout`] for the
    /// all-or-nothing rules.
    ///
    /// # Errors
    /// Returns an error for an empty cart or any unfulfillable line; nothing
    /// is mutated in those cases.
    pub async fn checkout(&self) -> Result<checkout::Receipt> {
        let mut state = self.state.lock().await;
        checkout::checkout(&mut state)
    }

    // --- auth / preferences ---

    /// Logs in against the built-in accounts.
    ///
    /// # Errors
    /// Returns `InvalidCredentials` on any mismatch.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let mut state = self.state.lock().await;
        auth::login(&mut state.auth, email, password).cloned()
    }

    /// Clears the session.
    pub async fn logout(&self) {
        let mut state = self.state.lock().await;
        auth::logout(&mut state.auth);
    }

    /// Updates the session user's display name and/or photo.
    pub async fn update_profile(&self, username: Option<String>, photo_url: Option<String>) {
        let mut state = self.state.lock().await;
        auth::update_profile(&mut state.auth, username, photo_url);
    }

    /// Returns the current session user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.state.lock().await.auth.user.clone()
    }

    /// Sets the theme mode.
    pub async fn set_theme(&self, mode: ThemeMode) {
        self.state.lock().await.theme.mode = mode;
    }

    /// Flips the theme mode and returns the new value.
    pub async fn toggle_theme(&self) -> ThemeMode {
        let mut state = self.state.lock().await;
        state.theme.mode = state.theme.mode.toggled();
        state.theme.mode
    }

    /// Enables or disables order-status notifications.
    pub async fn set_order_updates_enabled(&self, enabled: bool) {
        self.state.lock().await.settings.order_updates = enabled;
    }

    /// Enables or disables low-stock notifications.
    pub async fn set_low_stock_alerts_enabled(&self, enabled: bool) {
        self.state.lock().await.settings.low_stock_alerts = enabled;
    }

    // --- reporting / export ---

    /// Builds an inventory summary over the current state.
    pub async fn summary(&self, recent_limit: usize) -> report::InventorySummary {
        let state = self.state.lock().await;
        report::inventory_summary(&state, recent_limit)
    }

    /// Renders the inventory CSV export.
    pub async fn export_inventory_csv(&self) -> String {
        let state = self.state.lock().await;
        export::export_inventory(&state.inventory.products)
    }

    /// Renders the transaction CSV export.
    pub async fn export_transactions_csv(&self) -> String {
        let state = self.state.lock().await;
        export::export_transactions(&state.transactions.transactions)
    }

    /// Renders the orders CSV export.
    pub async fn export_orders_csv(&self) -> String {
        let state = self.state.lock().await;
        export::export_orders(&state.orders.orders)
    }
}
