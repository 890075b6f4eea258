//! Expense model
//!
//! An expense is immutable once created: it is either kept as-is or removed.
//! New expenses come from an [`ExpenseDraft`], the raw user input, which is
//! validated field by field in a fixed order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::{self, Money, MAX_AMOUNT};

/// Date format used for user input and documents
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
///
/// Field order matches the stored document and JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub title: String,

    /// Amount spent (always positive)
    #[serde(
        serialize_with = "money::decimal::serialize",
        deserialize_with = "money::decimal::deserialize_positive"
    )]
    pub amount: Money,

    /// Spending category
    pub category: ExpenseCategory,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

impl Expense {
    /// Short human-readable description used in logs and confirmations
    pub fn describe(&self) -> String {
        format!("{} ({}, {})", self.title, self.amount, self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id, self.date, self.category, self.amount, self.title
        )
    }
}

/// Raw input for a new expense, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    /// Create a draft from raw field values
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Validate the draft and build an expense with a fresh ID
    ///
    /// Fields are checked in order title, amount, category, date; the first
    /// failure is reported.
    pub fn validate(&self) -> Result<Expense, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::new(InputField::Title, "cannot be empty"));
        }

        let amount = parse_positive_amount(&self.amount, InputField::Amount)?;

        if self.category.trim().is_empty() {
            return Err(ValidationError::new(InputField::Category, "must be selected"));
        }
        let category: ExpenseCategory = self
            .category
            .parse()
            .map_err(|e| ValidationError::new(InputField::Category, e))?;

        let date_input = self.date.trim();
        if date_input.is_empty() {
            return Err(ValidationError::new(InputField::Date, "must be provided"));
        }
        let date = NaiveDate::parse_from_str(date_input, DATE_FORMAT).map_err(|_| {
            ValidationError::new(
                InputField::Date,
                format!("'{}' is not a valid date (use YYYY-MM-DD)", date_input),
            )
        })?;

        Ok(Expense {
            id: ExpenseId::new(),
            title: title.to_string(),
            amount,
            category,
            date,
        })
    }
}

/// Parse a strictly positive amount, at most [`MAX_AMOUNT`], for the given field
pub fn parse_positive_amount(input: &str, field: InputField) -> Result<Money, ValidationError> {
    let amount =
        Money::parse(input).map_err(|e| ValidationError::new(field, e.to_string()))?;
    if !amount.is_positive() {
        return Err(ValidationError::new(field, "must be greater than zero"));
    }
    if !amount.is_within_limit() {
        return Err(ValidationError::new(
            field,
            format!("must not exceed {}", MAX_AMOUNT.format_plain()),
        ));
    }
    Ok(amount)
}

/// User-editable input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Amount,
    Category,
    Date,
    BudgetGoal,
}

impl InputField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Date => "date",
            Self::BudgetGoal => "budget goal",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejected user input, naming the first failing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: InputField,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: InputField, reason: impl fmt::Display) -> Self {
        Self {
            field,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExpenseDraft {
        ExpenseDraft::new("Coffee", "3.50", "Food", "2024-01-05")
    }

    #[test]
    fn test_valid_draft() {
        let expense = draft().validate().unwrap();
        assert_eq!(expense.title, "Coffee");
        assert_eq!(expense.amount, Money::from_cents(350));
        assert_eq!(expense.category, ExpenseCategory::Food);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_title_is_trimmed() {
        let mut d = draft();
        d.title = "  Lunch  ".into();
        assert_eq!(d.validate().unwrap().title, "Lunch");
    }

    #[test]
    fn test_each_draft_gets_a_new_id() {
        let a = draft().validate().unwrap();
        let b = draft().validate().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_zero_amount_names_amount() {
        let mut d = draft();
        d.amount = "0".into();
        let err = d.validate().unwrap_err();
        assert_eq!(err.field, InputField::Amount);
    }

    #[test]
    fn test_non_numeric_and_negative_amounts_rejected() {
        for bad in ["", "abc", "-4", "NaN", "inf", "1.234"] {
            let mut d = draft();
            d.amount = bad.into();
            assert_eq!(d.validate().unwrap_err().field, InputField::Amount, "{bad:?}");
        }
    }

    #[test]
    fn test_amount_limit() {
        let mut d = draft();
        d.amount = "999999999999.99".into();
        assert_eq!(d.validate().unwrap().amount, MAX_AMOUNT);

        d.amount = "50000000000000000".into();
        let err = d.validate().unwrap_err();
        assert_eq!(err.field, InputField::Amount);
        assert_eq!(
            err.to_string(),
            "Invalid amount: must not exceed 999999999999.99"
        );

        let err = parse_positive_amount("1000000000000", InputField::BudgetGoal).unwrap_err();
        assert_eq!(err.field, InputField::BudgetGoal);
    }

    #[test]
    fn test_stored_non_positive_amount_is_rejected() {
        let mut value = serde_json::to_value(draft().validate().unwrap()).unwrap();
        value["amount"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Expense>(value.clone()).is_err());

        value["amount"] = serde_json::json!("-3.50");
        assert!(serde_json::from_value::<Expense>(value).is_err());
    }

    #[test]
    fn test_first_failing_field_wins() {
        let all_bad = ExpenseDraft::new(" ", "0", "Nope", "yesterday");
        assert_eq!(all_bad.validate().unwrap_err().field, InputField::Title);

        let from_amount = ExpenseDraft::new("Tea", "x", "Nope", "yesterday");
        assert_eq!(from_amount.validate().unwrap_err().field, InputField::Amount);

        let from_category = ExpenseDraft::new("Tea", "1", "Nope", "yesterday");
        assert_eq!(
            from_category.validate().unwrap_err().field,
            InputField::Category
        );

        let from_date = ExpenseDraft::new("Tea", "1", "food", "2024-02-30");
        assert_eq!(from_date.validate().unwrap_err().field, InputField::Date);
    }

    #[test]
    fn test_empty_category_rejected() {
        let mut d = draft();
        d.category = String::new();
        let err = d.validate().unwrap_err();
        assert_eq!(err.field, InputField::Category);
        assert_eq!(err.to_string(), "Invalid category: must be selected");
    }

    #[test]
    fn test_serialization_shape() {
        let expense = draft().validate().unwrap();
        let value = serde_json::to_value(&expense).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        assert_eq!(value["title"], "Coffee");
        assert_eq!(value["amount"], 3.5);
        assert_eq!(value["category"], "Food");
        assert_eq!(value["date"], "2024-01-05");

        let back: Expense = serde_json::from_value(value).unwrap();
        assert_eq!(back, expense);
    }
}
