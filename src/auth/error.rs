//! Authentication errors
//!
//! Every rejection maps to a fixed, human-readable message. Wrong password
//! and unknown user deliberately share one message.

use std::fmt;

/// Why the identity provider rejected a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidEmail,
    UserNotFound,
    WrongPassword,
    EmailInUse,
    WeakPassword,
    Unknown,
}

impl AuthErrorKind {
    /// The message shown to the user for this kind
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "Invalid email address.",
            Self::UserNotFound | Self::WrongPassword => "Invalid email or password.",
            Self::EmailInUse => "Email is already in use.",
            Self::WeakPassword => "Password should be at least 6 characters.",
            Self::Unknown => "An error occurred. Please try again.",
        }
    }
}

/// An identity provider rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    /// Underlying cause, kept for logs; never shown in place of the message
    pub detail: Option<String>,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind) -> Self {
        Self { kind, detail: None }
    }

    /// An `Unknown` error carrying the underlying cause
    pub fn unknown(detail: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Unknown,
            detail: Some(detail.into()),
        }
    }
}

impl From<AuthErrorKind> for AuthError {
    fn from(kind: AuthErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.user_message())
    }
}

impl std::error::Error for AuthError {}
