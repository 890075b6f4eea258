//! Expense Summary
//!
//! Totals the expense list over fixed aggregation windows (today, this
//! week, this month, all time) and breaks spending down by category.
//!
//! Window boundaries come from a caller-supplied reference date and are
//! computed once per call, so a summary is a consistent snapshot even if the
//! wall clock crosses midnight while it is being built.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{Expense, ExpenseCategory, Money};

/// Date boundaries of the daily, weekly and monthly windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryWindow {
    /// The reference day
    pub today: NaiveDate,
    /// Most recent Sunday on or before `today`
    pub week_start: NaiveDate,
    /// First day of `today`'s month
    pub month_start: NaiveDate,
}

impl SummaryWindow {
    /// Compute the windows for a reference date
    pub fn at(today: NaiveDate) -> Self {
        let since_sunday = u64::from(today.weekday().num_days_from_sunday());
        let week_start = today
            .checked_sub_days(Days::new(since_sunday))
            .unwrap_or(NaiveDate::MIN);
        let month_start = today.with_day(1).unwrap_or(today);

        Self {
            today,
            week_start,
            month_start,
        }
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == self.today
    }

    /// On or after the start of the week (later dates count too)
    pub fn in_week(&self, date: NaiveDate) -> bool {
        date >= self.week_start
    }

    /// On or after the first of the month (later dates count too)
    pub fn in_month(&self, date: NaiveDate) -> bool {
        date >= self.month_start
    }
}

/// Total spending in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: Money,
}

/// Summary of spending across the aggregation windows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    /// Windows the sums were computed for
    pub window: SummaryWindow,
    /// All-time total
    pub total: Money,
    /// Spent on the reference day
    pub daily: Money,
    /// Spent since the start of the week
    pub weekly: Money,
    /// Spent since the start of the month
    pub monthly: Money,
    /// Per-category totals, largest first
    pub category_totals: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    /// Compute the summary of `expenses` as of `today`
    pub fn compute(expenses: &[Expense], today: NaiveDate) -> Self {
        let window = SummaryWindow::at(today);

        let mut total = Money::zero();
        let mut daily = Money::zero();
        let mut weekly = Money::zero();
        let mut monthly = Money::zero();

        for expense in expenses {
            total += expense.amount;
            if window.is_today(expense.date) {
                daily += expense.amount;
            }
            if window.in_week(expense.date) {
                weekly += expense.amount;
            }
            if window.in_month(expense.date) {
                monthly += expense.amount;
            }
        }

        let mut category_totals = category_totals(expenses);
        // Stable: equal amounts keep first-encounter order
        category_totals.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self {
            window,
            total,
            daily,
            weekly,
            monthly,
            category_totals,
        }
    }

    /// Whether there is any category breakdown to show
    pub fn has_breakdown(&self) -> bool {
        !self.category_totals.is_empty()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format!("Spending Summary as of {}\n", self.window.today));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<12} {:>16}\n", "Total", fmt(self.total)));
        output.push_str(&format!("{:<12} {:>16}\n", "Today", fmt(self.daily)));
        output.push_str(&format!("{:<12} {:>16}\n", "This week", fmt(self.weekly)));
        output.push_str(&format!("{:<12} {:>16}\n", "This month", fmt(self.monthly)));
        output.push('\n');
        output.push_str("By Category\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');

        if !self.has_breakdown() {
            output.push_str("No expenses yet. Add some to see your breakdown!\n");
            return output;
        }

        for total in &self.category_totals {
            output.push_str(&format!(
                "{:<24} {:>15}\n",
                format!("{}:", total.category),
                fmt(total.amount)
            ));
        }

        output
    }
}

/// Group amounts by category in first-encounter order
pub(crate) fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(existing) => existing.amount += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category,
                amount: expense.amount,
            }),
        }
    }
    totals
}
