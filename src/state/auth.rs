//! Auth slice - Session state for the hard-coded credential check.
//!
//! There is no authentication server; login is a local comparison against two
//! fixed accounts. This slice carries no business invariants.

use serde::{Deserialize, Serialize};

/// Access level of a session user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including catalog mutation
    Admin,
    /// Read-mostly staff access
    User,
}

/// A logged-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable account identifier
    pub id: String,
    /// Display name, editable via the profile screen
    pub username: String,
    /// Access level
    pub role: Role,
    /// Optional profile photo reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// The auth slice.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// Current session user, if logged in
    pub user: Option<User>,
    /// Mirrors `user.is_some()`; kept as its own field to match the persisted
    /// state layout
    pub is_authenticated: bool,
}
