//! Versioned-blob persistence for the whole store.
//!
//! The entire state is serialized as one JSON blob wrapped in a version
//! number. Loading a blob written by an older build runs the migration step:
//! the catalog slice is unconditionally rebuilt from the seed CSV while every
//! other persisted slice is carried over verbatim. The POS session slice is
//! never part of the blob.

use crate::{
    errors::{Error, Result},
    state::{CatalogState, Product, RootState},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Version written by this build. Bumping it forces a catalog re-seed on the
/// next load.
pub const STORE_VERSION: u32 = 2;

/// The on-disk shape: one versioned blob.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    /// Store version the blob was written with
    pub version: u32,
    /// The persisted slices
    pub state: RootState,
}

/// Builds a fresh state with the catalog seeded and everything else at
/// defaults.
#[must_use]
pub fn fresh_state(seed: Vec<Product>) -> RootState {
    RootState {
        inventory: CatalogState { products: seed },
        ..RootState::default()
    }
}

/// Applies the version migration to a loaded blob.
///
/// Same version: the state is used as-is. Older version: the catalog slice is
/// replaced by the freshly parsed seed while auth, ledgers, theme, and
/// settings are preserved verbatim.
///
/// # Errors
/// Returns `UnsupportedVersion` if the blob is newer than this build.
pub fn migrate(blob: PersistedState, seed: Vec<Product>) -> Result<RootState> {
    if blob.version > STORE_VERSION {
        return Err(Error::UnsupportedVersion {
            found: blob.version,
            current: STORE_VERSION,
        });
    }

    if blob.version == STORE_VERSION {
        return Ok(blob.state);
    }

    warn!(
        from = blob.version,
        to = STORE_VERSION,
        "migrating persisted store: re-seeding catalog"
    );
    let mut state = blob.state;
    state.inventory.products = seed;
    Ok(state)
}

/// Loads the persisted blob from `path` and runs the migration step.
///
/// A missing file is not an error: it yields a fresh seeded state, the same
/// as a first run.
///
/// # Errors
/// Returns an error on unreadable files, malformed JSON, or a blob newer
/// than this build.
pub async fn load(path: &Path, seed: Vec<Product>) -> Result<RootState> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no persisted store, starting from seed");
            return Ok(fresh_state(seed));
        }
        Err(e) => return Err(e.into()),
    };

    let blob: PersistedState = serde_json::from_slice(&raw)?;
    migrate(blob, seed)
}

/// Writes the state to `path` as one versioned blob, creating parent
/// directories as needed.
///
/// # Errors
/// Returns an error if serialization or the filesystem write fails.
pub async fn save(path: &Path, state: &RootState) -> Result<()> {
    let blob = PersistedState {
        version: STORE_VERSION,
        state: state.clone(),
    };
    let raw = serde_json::to_vec_pretty(&blob)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, raw).await?;
    Ok(())
}
