//! JSON file document store
//!
//! Lays documents out as `<root>/users/<user-uuid>/data/<key>.json`, one
//! file per document, written atomically.

use std::path::PathBuf;

use serde_json::Value;

use crate::models::UserId;

use super::file_io::{read_json_optional, remove_if_exists, write_json_atomic};
use super::{apply_set, DocKey, DocumentStore, SetOptions, StoreResult};

/// Document store keeping one JSON file per user document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `root` (usually the data directory)
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory holding one user's documents
    pub fn user_dir(&self, user: &UserId) -> PathBuf {
        self.root
            .join("users")
            .join(user.as_uuid().to_string())
            .join("data")
    }

    /// Path of one document file
    pub fn document_path(&self, user: &UserId, key: DocKey) -> PathBuf {
        self.user_dir(user).join(format!("{}.json", key))
    }
}

impl DocumentStore for JsonFileStore {
    fn get(&self, user: &UserId, key: DocKey) -> StoreResult<Option<Value>> {
        read_json_optional(self.document_path(user, key))
    }

    fn set(
        &self,
        user: &UserId,
        key: DocKey,
        document: &Value,
        options: SetOptions,
    ) -> StoreResult<()> {
        let path = self.document_path(user, key);
        let existing = if options.merge {
            read_json_optional(&path)?
        } else {
            None
        };
        write_json_atomic(&path, &apply_set(existing, document, options))
    }

    fn delete(&self, user: &UserId, key: DocKey) -> StoreResult<()> {
        remove_if_exists(self.document_path(user, key))
    }
}
