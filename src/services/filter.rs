//! Expense filtering
//!
//! Filters select an order-preserving subsequence of the expense list by
//! category and an inclusive date range. Filtering never copies or alters
//! the records it selects.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::models::{Expense, ExpenseCategory, UnknownCategory};

/// Category part of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category matches
    #[default]
    All,
    /// Only the given category matches
    Only(ExpenseCategory),
}

impl CategoryFilter {
    /// Check whether a category passes this filter
    pub fn matches(&self, category: ExpenseCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    /// Parses "all" (any case) or a category label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Category restriction
    pub category: CategoryFilter,
    /// Earliest date to include (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Latest date to include (inclusive)
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    /// Only expenses on or after `start`
    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only expenses on or before `end`
    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by date range
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from(start).to(end)
    }

    /// True when the filter lets every expense through
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Check whether a single expense passes the filter
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.matches(expense.category)
            && self.start_date.map_or(true, |start| expense.date >= start)
            && self.end_date.map_or(true, |end| expense.date <= end)
    }
}

/// Select the expenses matching `filter`, keeping their original order
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| filter.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};

    fn expense(title: &str, cents: i64, category: ExpenseCategory, date: &str) -> Expense {
        Expense {
            id: ExpenseId::new(),
            title: title.into(),
            amount: Money::from_cents(cents),
            category,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("Coffee", 350, ExpenseCategory::Food, "2024-01-05"),
            expense("Bus", 200, ExpenseCategory::Transport, "2024-01-05"),
            expense("Dinner", 2400, ExpenseCategory::Food, "2024-01-10"),
            expense("Train", 900, ExpenseCategory::Transport, "2024-02-01"),
        ]
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn titles(filtered: &[&Expense]) -> Vec<String> {
        filtered.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_unfiltered_returns_everything_in_order() {
        let expenses = sample();
        let filter = ExpenseFilter::new();
        assert!(filter.is_unfiltered());
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(titles(&filtered), ["Coffee", "Bus", "Dinner", "Train"]);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let expenses = sample();
        let filter = ExpenseFilter::new().category(ExpenseCategory::Food);
        assert_eq!(titles(&filter_expenses(&expenses, &filter)), ["Coffee", "Dinner"]);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let expenses = sample();
        let filter = ExpenseFilter::new().date_range(d("2024-01-05"), d("2024-01-10"));
        assert_eq!(
            titles(&filter_expenses(&expenses, &filter)),
            ["Coffee", "Bus", "Dinner"]
        );

        let only_start = ExpenseFilter::new().from(d("2024-01-10"));
        assert_eq!(titles(&filter_expenses(&expenses, &only_start)), ["Dinner", "Train"]);

        let only_end = ExpenseFilter::new().to(d("2024-01-05"));
        assert_eq!(titles(&filter_expenses(&expenses, &only_end)), ["Coffee", "Bus"]);
    }

    #[test]
    fn test_combined_filter() {
        let expenses = sample();
        let filter = ExpenseFilter::new()
            .category(ExpenseCategory::Transport)
            .from(d("2024-01-06"));
        assert_eq!(titles(&filter_expenses(&expenses, &filter)), ["Train"]);
    }

    #[test]
    fn test_empty_result_is_not_unfiltered() {
        let expenses = sample();
        let filter = ExpenseFilter::new().category(ExpenseCategory::Health);
        assert!(filter_expenses(&expenses, &filter).is_empty());
        assert!(!filter.is_unfiltered());
    }

    #[test]
    fn test_result_is_subset_without_duplicates() {
        let expenses = sample();
        let filter = ExpenseFilter::new().from(d("2024-01-01"));
        let filtered = filter_expenses(&expenses, &filter);
        for (i, e) in filtered.iter().enumerate() {
            assert!(expenses.iter().any(|orig| std::ptr::eq(orig, *e)));
            assert!(filtered[i + 1..].iter().all(|other| other.id != e.id));
        }
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let expenses = sample();
        let filter = ExpenseFilter::new().date_range(d("2024-02-01"), d("2024-01-01"));
        assert!(filter_expenses(&expenses, &filter).is_empty());
    }

    #[test]
    fn test_parse_category_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "bills".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ExpenseCategory::Bills)
        );
        assert!("misc".parse::<CategoryFilter>().is_err());
    }
}
