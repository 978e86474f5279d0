//! Email-export collaborator.
//!
//! A CSV export can be handed to an external HTTP function that mails it out.
//! The endpoint is plain fire-and-forget from the caller's perspective:
//! nothing in the mutation path waits on it, and a failure never touches
//! store state.

use crate::errors::{Error, Result};
use tracing::info;

/// Environment variable naming the email function endpoint.
pub const ENDPOINT_ENV: &str = "EMAIL_FUNCTION_URL";

/// POSTs a CSV export to the email endpoint as a JSON body `{"csv": ...}`.
///
/// # Errors
/// Returns an error on transport failure or a non-success response status.
pub async fn send_inventory_csv(endpoint: &str, csv: &str) -> Result<()> {
    let response = reqwest::Client::new()
        .post(endpoint)
        .json(&serde_json::json!({ "csv": csv }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::EmailRejected {
            status: status.as_u16(),
        });
    }

    info!(endpoint, bytes = csv.len(), "inventory CSV handed to email function");
    Ok(())
}
