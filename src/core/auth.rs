//! Auth business logic - Local credential check against two fixed accounts.
//!
//! There is no authentication server. Login compares against hard-coded
//! credentials and populates the session slice; nothing here gates any ledger
//! or catalog write.

use crate::{
    errors::{Error, Result},
    state::{AuthState, Role, User},
};
use tracing::info;

/// Attempts a login against the two built-in accounts.
///
/// `admin@itemhive.com` / `admin123` maps to the System Admin account,
/// `user@itemhive.com` / `user123` to the Staff User account.
///
/// # Errors
/// Returns `InvalidCredentials` for any other combination; the session slice
/// is left untouched in that case.
pub fn login<'a>(auth: &'a mut AuthState, email: &str, password: &str) -> Result<&'a User> {
    let user = match (email, password) {
        ("admin@itemhive.com", "admin123") => User {
            id: "1".to_string(),
            username: "System Admin".to_string(),
            role: Role::Admin,
            photo_url: None,
        },
        ("user@itemhive.com", "user123") => User {
            id: "2".to_string(),
            username: "Staff User".to_string(),
            role: Role::User,
            photo_url: None,
        },
        _ => return Err(Error::InvalidCredentials),
    };

    info!(username = %user.username, "login");
    auth.is_authenticated = true;
    Ok(auth.user.insert(user))
}

/// Clears the session.
pub fn logout(auth: &mut AuthState) {
    auth.user = None;
    auth.is_authenticated = false;
}

/// Updates the session user's display name and/or photo. No-op when logged
/// out.
pub fn update_profile(auth: &mut AuthState, username: Option<String>, photo_url: Option<String>) {
    let Some(user) = auth.user.as_mut() else {
        return;
    };
    if let Some(username) = username {
        user.username = username;
    }
    if let Some(photo_url) = photo_url {
        user.photo_url = Some(photo_url);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_login_admin_account() {
        let mut auth = AuthState::default();
        let user = login(&mut auth, "admin@itemhive.com", "admin123").unwrap();

        assert_eq!(user.username, "System Admin");
        assert_eq!(user.role, Role::Admin);
        assert!(auth.is_authenticated);
    }

    #[test]
    fn test_login_staff_account() {
        let mut auth = AuthState::default();
        let user = login(&mut auth, "user@itemhive.com", "user123").unwrap();

        assert_eq!(user.username, "Staff User");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_login_bad_credentials() {
        let mut auth = AuthState::default();
        let result = login(&mut auth, "admin@itemhive.com", "wrong");

        assert!(matches!(result, Err(Error::InvalidCredentials)));
        assert!(auth.user.is_none());
        assert!(!auth.is_authenticated);
    }

    #[test]
    fn test_logout_clears_session() {
        let mut auth = AuthState::default();
        login(&mut auth, "admin@itemhive.com", "admin123").unwrap();

        logout(&mut auth);
        assert!(auth.user.is_none());
        assert!(!auth.is_authenticated);
    }

    #[test]
    fn test_update_profile() {
        let mut auth = AuthState::default();
        login(&mut auth, "user@itemhive.com", "user123").unwrap();

        update_profile(&mut auth, Some("Night Shift".to_string()), None);
        let user = auth.user.as_ref().unwrap();
        assert_eq!(user.username, "Night Shift");
        assert!(user.photo_url.is_none());

        update_profile(&mut auth, None, Some("avatar.png".to_string()));
        let user = auth.user.as_ref().unwrap();
        assert_eq!(user.username, "Night Shift");
        assert_eq!(user.photo_url.as_deref(), Some("avatar.png"));
    }

    #[test]
    fn test_update_profile_logged_out_is_noop() {
        let mut auth = AuthState::default();
        update_profile(&mut auth, Some("Ghost".to_string()), None);
        assert!(auth.user.is_none());
    }
}
