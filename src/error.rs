//! Custom error types for BudgetBuddy
//!
//! This module defines the crate-wide error hierarchy using thiserror.
//! Domain-specific errors (validation, auth, storage) live next to the code
//! that raises them and are wrapped here.

use thiserror::Error;

use crate::auth::AuthError;
use crate::models::ValidationError;
use crate::storage::StoreError;

/// The main error type for BudgetBuddy operations
#[derive(Error, Debug)]
pub enum BuddyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bad user input to record construction
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Identity provider rejected the request
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Document store read or write failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A command needs a signed-in user
    #[error("You are not signed in. Run 'budgetbuddy auth login <email>' first.")]
    NotSignedIn,

    /// Data could not be loaded, so mutations are refused until a reload succeeds
    #[error("Your data has not been loaded. Please try again.")]
    NotLoaded,
}

impl BuddyError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BuddyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BuddyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for BudgetBuddy operations
pub type BuddyResult<T> = Result<T, BuddyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthErrorKind;
    use crate::models::InputField;

    #[test]
    fn test_error_display() {
        let err = BuddyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BuddyError::expense_not_found("exp-1234abcd");
        assert_eq!(err.to_string(), "Expense not found: exp-1234abcd");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_wraps_transparently() {
        let err: BuddyError = ValidationError::new(InputField::Amount, "must be positive").into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Invalid amount: must be positive");
    }

    #[test]
    fn test_auth_error_uses_user_message() {
        let err: BuddyError = AuthError::new(AuthErrorKind::EmailInUse).into();
        assert_eq!(err.to_string(), "Email is already in use.");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let buddy_err: BuddyError = io_err.into();
        assert!(matches!(buddy_err, BuddyError::Io(_)));
    }
}
