//! Authentication for BudgetBuddy
//!
//! The identity provider is an external collaborator behind the
//! [`IdentityProvider`] trait. [`LocalIdentityProvider`] implements it with
//! Argon2id password hashes kept in a JSON file next to the user data.
//!
//! Listeners registered with [`IdentityProvider::on_session_change`] are
//! called once immediately with the current session, then after every
//! successful sign-in, sign-up and sign-out.

mod error;
mod local;

pub use error::{AuthError, AuthErrorKind};
pub use local::{LocalIdentityProvider, MIN_PASSWORD_LEN};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Callback invoked whenever the session changes
pub type SessionListener = Box<dyn FnMut(Option<&Session>)>;

/// Identity provider operations
pub trait IdentityProvider {
    /// Sign in an existing user
    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register a new user and sign them in
    fn sign_up(&mut self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// End the current session (no-op when signed out)
    fn sign_out(&mut self) -> Result<(), AuthError>;

    /// The current session, if any
    fn current_session(&self) -> Option<&Session>;

    /// Register a session-change listener
    fn on_session_change(&mut self, listener: SessionListener);
}

/// Normalize and check an email address
///
/// Returns the trimmed, lowercased address, or `InvalidEmail`.
pub fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    let invalid = || AuthError::new(AuthErrorKind::InvalidEmail);

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }

    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Alice@Example.COM ").unwrap(),
            "alice@example.com"
        );
        assert_eq!(normalize_email("a.b+c@mail.co.uk").unwrap(), "a.b+c@mail.co.uk");
    }

    #[test]
    fn test_invalid_emails() {
        for bad in ["", "alice", "@example.com", "alice@", "alice@example", "a@b@c.com", "al ice@x.io", "a@.com", "a@x."] {
            let err = normalize_email(bad).unwrap_err();
            assert_eq!(err.kind, AuthErrorKind::InvalidEmail, "{bad:?}");
        }
    }
}
