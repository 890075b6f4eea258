//! In-memory document store
//!
//! Keeps documents in a map guarded by an `RwLock`. Useful for embedding the
//! library without touching disk, and for tests.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::models::UserId;

use super::{apply_set, DocKey, DocumentStore, SetOptions, StoreError, StoreResult};

/// Document store backed by a hash map
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<(UserId, DocKey), Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents across all users
    pub fn len(&self) -> StoreResult<usize> {
        let documents = self.documents.read().map_err(|e| {
            StoreError::Unavailable(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(documents.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, user: &UserId, key: DocKey) -> StoreResult<Option<Value>> {
        let documents = self.documents.read().map_err(|e| {
            StoreError::Unavailable(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(documents.get(&(*user, key)).cloned())
    }

    fn set(
        &self,
        user: &UserId,
        key: DocKey,
        document: &Value,
        options: SetOptions,
    ) -> StoreResult<()> {
        let mut documents = self.documents.write().map_err(|e| {
            StoreError::Unavailable(format!("Failed to acquire write lock: {}", e))
        })?;
        let existing = documents.remove(&(*user, key));
        documents.insert((*user, key), apply_set(existing, document, options));
        Ok(())
    }

    fn delete(&self, user: &UserId, key: DocKey) -> StoreResult<()> {
        let mut documents = self.documents.write().map_err(|e| {
            StoreError::Unavailable(format!("Failed to acquire write lock: {}", e))
        })?;
        documents.remove(&(*user, key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_set_delete() {
        let store = MemoryStore::new();
        let user = UserId::new();

        assert!(store.get(&user, DocKey::Settings).unwrap().is_none());

        store
            .set(&user, DocKey::Settings, &json!({"budgetGoal": 50}), SetOptions::merge())
            .unwrap();
        assert_eq!(
            store.get(&user, DocKey::Settings).unwrap(),
            Some(json!({"budgetGoal": 50}))
        );

        store.delete(&user, DocKey::Settings).unwrap();
        assert!(store.is_empty().unwrap());

        // Deleting again is fine
        store.delete(&user, DocKey::Settings).unwrap();
    }

    #[test]
    fn test_users_are_isolated() {
        let store = MemoryStore::new();
        let alice = UserId::new();
        let bob = UserId::new();

        store
            .set(&alice, DocKey::Expenses, &json!({"list": []}), SetOptions::replace())
            .unwrap();
        assert!(store.get(&bob, DocKey::Expenses).unwrap().is_none());
        assert_eq!(store.len().unwrap(), 1);
    }
}
