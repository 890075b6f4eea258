//! CSV export of the expense list
//!
//! Columns are `Title,Category,Amount,Date`, one row per expense in entry
//! order. Fields containing a comma, quote or newline are quoted.

use crate::error::{BuddyError, BuddyResult};
use crate::models::{Expense, DATE_FORMAT};

/// Header row, in column order
pub const CSV_HEADER: [&str; 4] = ["Title", "Category", "Amount", "Date"];

/// Render expenses as CSV text
///
/// Returns `Ok(None)` when there is nothing to export.
pub fn export_csv(expenses: &[Expense]) -> BuddyResult<Option<String>> {
    if expenses.is_empty() {
        return Ok(None);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| BuddyError::Export(e.to_string()))?;

    for expense in expenses {
        let date = expense.date.format(DATE_FORMAT).to_string();
        writer
            .write_record([
                expense.title.as_str(),
                expense.category.label(),
                expense.amount.format_plain().as_str(),
                date.as_str(),
            ])
            .map_err(|e| BuddyError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BuddyError::Export(e.to_string()))?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| BuddyError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;

    fn expense(title: &str, amount: &str, category: &str, date: &str) -> Expense {
        ExpenseDraft::new(title, amount, category, date)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(export_csv(&[]).unwrap(), None);
    }

    #[test]
    fn test_rows_in_entry_order() {
        let expenses = vec![
            expense("Lunch", "12.5", "Food", "2024-03-02"),
            expense("Train", "40", "Transport", "2024-03-01"),
        ];

        let csv = export_csv(&expenses).unwrap().unwrap();
        assert_eq!(
            csv,
            "Title,Category,Amount,Date\n\
             Lunch,Food,12.50,2024-03-02\n\
             Train,Transport,40.00,2024-03-01\n"
        );
    }

    #[test]
    fn test_delimiters_are_quoted() {
        let expenses = vec![expense("Pens, paper", "3", "Education", "2024-03-02")];

        let csv = export_csv(&expenses).unwrap().unwrap();
        assert!(csv.contains("\"Pens, paper\",Education,3.00,2024-03-02"));
    }
}
