//! ItemHive bootstrap binary: opens the store, logs an inventory summary,
//! and optionally hands the inventory export to the email function.

use itemhive::{
    config,
    core::report,
    email,
    errors::Result,
    store::Store,
};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load application configuration: {e}"))?;
    info!(data_path = %app_config.data_path.display(), "configuration loaded");

    // 4. Open the store (seeds or migrates as needed)
    let store = Store::open(&app_config)
        .await
        .inspect_err(|e| error!("Failed to open store: {e}"))?;

    // 5. Log an inventory summary
    let summary = store.summary(5).await;
    info!(
        products = summary.product_count,
        units = summary.total_units,
        value = %report::format_currency(summary.total_value),
        "inventory summary"
    );
    for product in &summary.low_stock {
        warn!(
            product = %product.name,
            stock = product.stock,
            min_stock = product.min_stock,
            status = report::stock_status(product).label(),
            "stock below threshold"
        );
    }
    for product in &summary.out_of_stock {
        warn!(
            product = %product.name,
            status = report::stock_status(product).label(),
            "stock exhausted"
        );
    }

    // 6. Optionally mail the inventory export
    if let Some(endpoint) = &app_config.email_endpoint {
        let csv = store.export_inventory_csv().await;
        if let Err(e) = email::send_inventory_csv(endpoint, &csv).await {
            // Export mail is best-effort; the store itself is unaffected
            warn!("Failed to send inventory CSV: {e}");
        }
    }

    // 7. Persist the (possibly freshly seeded or migrated) state
    store.save().await?;
    info!("store saved");

    Ok(())
}
