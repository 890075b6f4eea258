//! Budget goal evaluation
//!
//! Compares this month's spending against the user's monthly budget goal.
//! The month window is the same one the summary uses.

use chrono::NaiveDate;

use crate::models::{Expense, Money};
use crate::reports::SummaryWindow;

/// Where this month's spending stands against the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No goal, or a goal that is zero or negative
    NoGoalSet,
    /// Spending is at or below the goal
    UnderBudget { goal: Money, remaining: Money },
    /// Spending exceeds the goal
    OverBudget { goal: Money, excess: Money },
}

impl BudgetStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::OverBudget { .. })
    }

    /// User-facing message, `None` when no goal is active
    pub fn message(&self, currency_symbol: &str) -> Option<String> {
        let fmt = |m: Money| m.format_with_symbol(currency_symbol);
        match self {
            Self::NoGoalSet => None,
            Self::UnderBudget { remaining, .. } => Some(format!(
                "You have {} remaining in your monthly budget.",
                fmt(*remaining)
            )),
            Self::OverBudget { goal, excess } => Some(format!(
                "Warning: You are {} over your monthly budget goal of {}!",
                fmt(*excess),
                fmt(*goal)
            )),
        }
    }
}

/// Sum of expenses dated on or after the first of `today`'s month
pub fn monthly_spending(expenses: &[Expense], today: NaiveDate) -> Money {
    let window = SummaryWindow::at(today);
    expenses
        .iter()
        .filter(|e| window.in_month(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Evaluate this month's spending against an optional goal
pub fn evaluate_budget(expenses: &[Expense], goal: Option<Money>, today: NaiveDate) -> BudgetStatus {
    let goal = match goal {
        Some(goal) if goal.is_positive() => goal,
        _ => return BudgetStatus::NoGoalSet,
    };

    let spent = monthly_spending(expenses, today);
    if spent > goal {
        BudgetStatus::OverBudget {
            goal,
            excess: spent - goal,
        }
    } else {
        BudgetStatus::UnderBudget {
            goal,
            remaining: goal - spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expense(cents: i64, date: &str) -> Expense {
        Expense {
            id: ExpenseId::new(),
            title: "x".into(),
            amount: Money::from_cents(cents),
            category: ExpenseCategory::Other,
            date: d(date),
        }
    }

    #[test]
    fn test_no_goal() {
        let expenses = vec![expense(100, "2024-01-05")];
        let today = d("2024-01-10");
        assert_eq!(evaluate_budget(&expenses, None, today), BudgetStatus::NoGoalSet);
        assert_eq!(
            evaluate_budget(&expenses, Some(Money::zero()), today),
            BudgetStatus::NoGoalSet
        );
        assert_eq!(
            evaluate_budget(&expenses, Some(Money::from_cents(-500)), today),
            BudgetStatus::NoGoalSet
        );
        assert_eq!(BudgetStatus::NoGoalSet.message("₹"), None);
    }

    #[test]
    fn test_over_budget() {
        let expenses = vec![expense(7000, "2024-01-02"), expense(5000, "2024-01-09")];
        let status = evaluate_budget(&expenses, Some(Money::from_cents(10000)), d("2024-01-10"));
        assert_eq!(
            status,
            BudgetStatus::OverBudget {
                goal: Money::from_cents(10000),
                excess: Money::from_cents(2000)
            }
        );
        assert!(status.is_over());
        assert_eq!(
            status.message("₹").unwrap(),
            "Warning: You are ₹20.00 over your monthly budget goal of ₹100.00!"
        );
    }

    #[test]
    fn test_spending_equal_to_goal_is_under_budget() {
        let expenses = vec![expense(10000, "2024-01-02")];
        let status = evaluate_budget(&expenses, Some(Money::from_cents(10000)), d("2024-01-10"));
        assert_eq!(
            status,
            BudgetStatus::UnderBudget {
                goal: Money::from_cents(10000),
                remaining: Money::zero()
            }
        );
        assert!(!status.is_over());
    }

    #[test]
    fn test_previous_months_are_ignored() {
        let expenses = vec![expense(50000, "2023-12-31"), expense(2500, "2024-01-01")];
        let status = evaluate_budget(&expenses, Some(Money::from_cents(10000)), d("2024-01-10"));
        assert_eq!(
            status,
            BudgetStatus::UnderBudget {
                goal: Money::from_cents(10000),
                remaining: Money::from_cents(7500)
            }
        );
        assert_eq!(
            status.message("₹").unwrap(),
            "You have ₹75.00 remaining in your monthly budget."
        );
    }

    #[test]
    fn test_monthly_spending_matches_summary() {
        let expenses = vec![expense(1200, "2024-01-03"), expense(800, "2023-11-30")];
        let today = d("2024-01-15");
        let summary = crate::reports::ExpenseSummary::compute(&expenses, today);
        assert_eq!(monthly_spending(&expenses, today), summary.monthly);
    }
}
