//! Local identity provider
//!
//! Accounts live in `users.json` as Argon2id PHC strings; the active session
//! is persisted to `session.json` so it survives between CLI invocations.

use std::path::PathBuf;

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserId;
use crate::storage::{read_json, read_json_optional, remove_if_exists, write_json_atomic};

use super::{normalize_email, AuthError, AuthErrorKind, IdentityProvider, Session, SessionListener};

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserRecord {
    user_id: UserId,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserDirectory {
    #[serde(default)]
    users: Vec<UserRecord>,
}

impl UserDirectory {
    fn find(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }
}

/// Identity provider backed by JSON files
pub struct LocalIdentityProvider {
    users_file: PathBuf,
    session_file: PathBuf,
    session: Option<Session>,
    listeners: Vec<SessionListener>,
}

impl LocalIdentityProvider {
    /// Open the provider, restoring any persisted session
    ///
    /// An unreadable session file is treated as signed out.
    pub fn open(users_file: PathBuf, session_file: PathBuf) -> Self {
        let session = read_json_optional::<Session, _>(&session_file)
            .ok()
            .flatten();
        Self {
            users_file,
            session_file,
            session,
            listeners: Vec::new(),
        }
    }

    fn load_users(&self) -> Result<UserDirectory, AuthError> {
        read_json(&self.users_file).map_err(|e| AuthError::unknown(e.to_string()))
    }

    fn start_session(&mut self, record: &UserRecord) -> Result<Session, AuthError> {
        let session = Session {
            user_id: record.user_id,
            email: record.email.clone(),
            signed_in_at: Utc::now(),
        };
        write_json_atomic(&self.session_file, &session)
            .map_err(|e| AuthError::unknown(e.to_string()))?;
        self.session = Some(session.clone());
        self.notify();
        Ok(session)
    }

    fn notify(&mut self) {
        let current = self.session.as_ref();
        for listener in self.listeners.iter_mut() {
            listener(current);
        }
    }
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::unknown(format!("Failed to hash password: {}", e)))
}

fn verify_password(password: &str, phc: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(phc)
        .map_err(|e| AuthError::unknown(format!("Invalid stored hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

impl IdentityProvider for LocalIdentityProvider {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email)?;
        let users = self.load_users()?;
        let record = users
            .find(&email)
            .ok_or(AuthError::new(AuthErrorKind::UserNotFound))?;

        if !verify_password(password, &record.password_hash)? {
            return Err(AuthError::new(AuthErrorKind::WrongPassword));
        }

        let record = record.clone();
        self.start_session(&record)
    }

    fn sign_up(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::new(AuthErrorKind::WeakPassword));
        }

        let mut users = self.load_users()?;
        if users.find(&email).is_some() {
            return Err(AuthError::new(AuthErrorKind::EmailInUse));
        }

        let record = UserRecord {
            user_id: UserId::new(),
            email,
            password_hash: hash_password(password)?,
            created_at: Utc::now(),
        };
        users.users.push(record.clone());
        write_json_atomic(&self.users_file, &users)
            .map_err(|e| AuthError::unknown(e.to_string()))?;

        self.start_session(&record)
    }

    fn sign_out(&mut self) -> Result<(), AuthError> {
        if self.session.is_none() {
            return Ok(());
        }
        remove_if_exists(&self.session_file).map_err(|e| AuthError::unknown(e.to_string()))?;
        self.session = None;
        self.notify();
        Ok(())
    }

    fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn on_session_change(&mut self, mut listener: SessionListener) {
        listener(self.session.as_ref());
        self.listeners.push(listener);
    }
}
