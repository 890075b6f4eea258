//! Typed views of the per-user documents
//!
//! The store deals in raw JSON values; these types give the two documents
//! their shape and handle conversion in both directions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{money, Expense, Money, UserId};

use super::{DocKey, DocumentStore, SetOptions, StoreError, StoreResult};

/// The `expenses` document: the whole expense list, in entry order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensesDocument {
    #[serde(default)]
    pub list: Vec<Expense>,
}

/// The `settings` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(
        rename = "budgetGoal",
        with = "money::decimal::option",
        default
    )]
    pub budget_goal: Option<Money>,
}

fn decode<T>(key: DocKey, value: Option<Value>) -> StoreResult<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match value {
        None => Ok(T::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| StoreError::Corrupt {
            location: key.to_string(),
            message: e.to_string(),
        }),
    }
}

fn encode<T: Serialize>(doc: &T) -> StoreResult<Value> {
    serde_json::to_value(doc).map_err(|e| StoreError::Serialization(e.to_string()))
}

impl ExpensesDocument {
    /// Load the user's expense list (empty when the document is missing)
    pub fn load<S: DocumentStore + ?Sized>(store: &S, user: &UserId) -> StoreResult<Self> {
        decode(DocKey::Expenses, store.get(user, DocKey::Expenses)?)
    }

    /// Replace the stored expense list with this snapshot
    pub fn save<S: DocumentStore + ?Sized>(&self, store: &S, user: &UserId) -> StoreResult<()> {
        store.set(user, DocKey::Expenses, &encode(self)?, SetOptions::replace())
    }
}

impl SettingsDocument {
    /// Load the user's settings (defaults when the document is missing)
    pub fn load<S: DocumentStore + ?Sized>(store: &S, user: &UserId) -> StoreResult<Self> {
        decode(DocKey::Settings, store.get(user, DocKey::Settings)?)
    }

    /// Merge these settings into the stored document
    pub fn save<S: DocumentStore + ?Sized>(&self, store: &S, user: &UserId) -> StoreResult<()> {
        store.set(user, DocKey::Settings, &encode(self)?, SetOptions::merge())
    }
}
