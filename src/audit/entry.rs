//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// What an audited operation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// A single expense record
    Expense,
    /// The monthly budget goal
    BudgetGoal,
    /// Everything a user owns (reset)
    UserData,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::BudgetGoal => write!(f, "BudgetGoal"),
            EntityType::UserData => write!(f, "UserData"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// ID of the affected entity (the user id for goal and reset entries)
    pub entity_id: String,

    /// Human-readable description, e.g. the expense title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// User whose data changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// State before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// State after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// One-line change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn base(operation: Operation, entity_type: EntityType, entity_id: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name: None,
            user_id: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            entity_name,
            after: serde_json::to_value(entity).ok(),
            ..Self::base(Operation::Create, entity_type, entity_id.into())
        }
    }

    /// Entry for an update operation
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            entity_name,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::base(Operation::Update, entity_type, entity_id.into())
        }
    }

    /// Entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            entity_name,
            before: serde_json::to_value(entity).ok(),
            ..Self::base(Operation::Delete, entity_type, entity_id.into())
        }
    }

    /// Attribute the entry to a user
    pub fn by(mut self, user: UserId) -> Self {
        self.user_id = Some(user);
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(EntityType::BudgetGoal.to_string(), "BudgetGoal");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"title": "Coffee", "amount": 3.5});
        let entry = AuditEntry::create(
            EntityType::Expense,
            "exp-12345678",
            Some("Coffee".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(data));
        assert!(entry.user_id.is_none());
    }

    #[test]
    fn test_update_entry() {
        let entry = AuditEntry::update(
            EntityType::BudgetGoal,
            "usr-1",
            None,
            &json!(100.0),
            &json!(250.0),
            Some("100.00 -> 250.00".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.before, Some(json!(100.0)));
        assert_eq!(entry.after, Some(json!(250.0)));
    }

    #[test]
    fn test_delete_entry_with_user() {
        let user = UserId::new();
        let entry =
            AuditEntry::delete(EntityType::Expense, "exp-1", None, &json!({"title": "Bus"}))
                .by(user);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.after.is_none());
        assert_eq!(entry.user_id, Some(user));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityType::UserData, "usr-1", None, &json!({}));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"user_data\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.entity_type, EntityType::UserData);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Expense,
            "exp-12345678",
            Some("Coffee".to_string()),
            &json!({}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Expense exp-12345678 (Coffee)"));
    }
}
