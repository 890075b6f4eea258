//! Report formatting utilities for terminal output

use crate::services::BudgetStatus;

/// Format the budget status line with color hints
///
/// Over budget is red, under budget green; `None` when no goal is set.
pub fn format_budget_status(status: &BudgetStatus, currency_symbol: &str) -> Option<String> {
    let message = status.message(currency_symbol)?;
    Some(if status.is_over() {
        format!("\x1b[31m{}\x1b[0m", message)
    } else {
        format!("\x1b[32m{}\x1b[0m", message)
    })
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_no_goal() {
        assert!(format_budget_status(&BudgetStatus::NoGoalSet, "₹").is_none());
    }

    #[test]
    fn test_colors() {
        let over = BudgetStatus::OverBudget {
            goal: Money::from_cents(10000),
            excess: Money::from_cents(2500),
        };
        let line = format_budget_status(&over, "₹").unwrap();
        assert!(line.starts_with("\x1b[31m"));
        assert!(line.contains("Warning: You are ₹25.00 over your monthly budget goal of ₹100.00!"));

        let under = BudgetStatus::UnderBudget {
            goal: Money::from_cents(10000),
            remaining: Money::from_cents(0),
        };
        let line = format_budget_status(&under, "₹").unwrap();
        assert!(line.starts_with("\x1b[32m"));
        assert!(line.contains("You have ₹0.00 remaining"));
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "───");
    }
}
