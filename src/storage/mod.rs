//! Storage layer for BudgetBuddy
//!
//! User data lives in a document store: each user owns a handful of JSON
//! documents addressed by [`DocKey`]. Documents are always written whole
//! (or shallow-merged with `merge: true`), so the store holds snapshots,
//! never deltas.
//!
//! Two stores are provided: [`JsonFileStore`], which keeps one JSON file per
//! document with atomic writes, and [`MemoryStore`] for embedding and tests.

pub mod documents;
pub mod file_io;
pub mod json_store;
pub mod memory;

pub use documents::{ExpensesDocument, SettingsDocument};
pub use file_io::{read_json, read_json_optional, remove_if_exists, write_json_atomic};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use std::fmt;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::models::UserId;

/// Errors raised by a document store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Reading or writing the backing medium failed
    #[error("Storage error at {location}: {message}")]
    Io { location: String, message: String },

    /// A document could not be encoded
    #[error("Failed to serialize document: {0}")]
    Serialization(String),

    /// A stored document could not be decoded
    #[error("Stored data at {location} is corrupt: {message}")]
    Corrupt { location: String, message: String },

    /// The store refused the request
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn io(location: &Path, message: impl Into<String>) -> Self {
        Self::Io {
            location: location.display().to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// The documents each user owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKey {
    /// `{ "list": [expense, ...] }`
    Expenses,
    /// `{ "budgetGoal": number }`
    Settings,
}

impl DocKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::Settings => "settings",
        }
    }

    /// Every key, in the order they are cleared on reset
    pub fn all() -> &'static [Self] {
        &[Self::Expenses, Self::Settings]
    }
}

impl fmt::Display for DocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`DocumentStore::set`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetOptions {
    /// Merge top-level fields into the existing document instead of replacing it
    pub merge: bool,
}

impl SetOptions {
    pub fn replace() -> Self {
        Self { merge: false }
    }

    pub fn merge() -> Self {
        Self { merge: true }
    }
}

/// Per-user document storage
pub trait DocumentStore {
    /// Fetch a document; `Ok(None)` when it does not exist
    fn get(&self, user: &UserId, key: DocKey) -> StoreResult<Option<Value>>;

    /// Write a document, replacing or merging per `options`
    fn set(&self, user: &UserId, key: DocKey, document: &Value, options: SetOptions)
        -> StoreResult<()>;

    /// Delete a document; deleting a missing document succeeds
    fn delete(&self, user: &UserId, key: DocKey) -> StoreResult<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn get(&self, user: &UserId, key: DocKey) -> StoreResult<Option<Value>> {
        (**self).get(user, key)
    }

    fn set(
        &self,
        user: &UserId,
        key: DocKey,
        document: &Value,
        options: SetOptions,
    ) -> StoreResult<()> {
        (**self).set(user, key, document, options)
    }

    fn delete(&self, user: &UserId, key: DocKey) -> StoreResult<()> {
        (**self).delete(user, key)
    }
}

/// Compute the document to store for a `set` call
///
/// With `merge`, top-level fields of an existing object are overwritten by
/// those of `incoming`; otherwise `incoming` replaces the document.
pub fn apply_set(existing: Option<Value>, incoming: &Value, options: SetOptions) -> Value {
    match (existing, incoming) {
        (Some(Value::Object(mut base)), Value::Object(patch)) if options.merge => {
            for (field, value) in patch {
                base.insert(field.clone(), value.clone());
            }
            Value::Object(base)
        }
        _ => incoming.clone(),
    }
}
