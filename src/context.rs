//! Per-user application state
//!
//! [`AppContext`] owns the signed-in user's expense list and budget goal,
//! keeps them in step with the document store, and answers the read-only
//! questions (summary, budget status, filtered listing, chart) through the
//! pure functions in `reports` and `services`.
//!
//! Every mutation updates memory first and then writes the whole document
//! back. A failed write is not rolled back: the result carries
//! [`SaveStatus::Unsaved`], the context is marked dirty and [`AppContext::sync`]
//! retries later. The audit entry is written last; if that fails the change
//! still stands and the report carries the audit error.

use chrono::NaiveDate;
use serde_json::json;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{BuddyError, BuddyResult};
use crate::models::{parse_positive_amount, Expense, ExpenseDraft, InputField, Money, UserId};
use crate::reports::{ChartData, ExpenseSummary};
use crate::services::{evaluate_budget, filter_expenses, BudgetStatus, ExpenseFilter};
use crate::storage::{
    DocKey, DocumentStore, ExpensesDocument, SettingsDocument, StoreError, StoreResult,
};

/// Outcome of the write that follows a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// The store accepted the new snapshot
    Saved,
    /// The change is kept in memory only; call `sync` to retry
    Unsaved(StoreError),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// The write error, if the save failed
    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Saved => None,
            Self::Unsaved(e) => Some(e),
        }
    }
}

/// Result of a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationReport<T> {
    /// What the mutation produced or removed
    pub value: T,
    pub save: SaveStatus,
    /// Why the audit entry could not be written, if it wasn't
    pub audit_error: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Pending {
    expenses: bool,
    settings: bool,
}

/// The signed-in user's data and its link to the store
pub struct AppContext<S: DocumentStore> {
    store: S,
    user: UserId,
    expenses: Vec<Expense>,
    budget_goal: Option<Money>,
    loaded: bool,
    pending: Pending,
    audit: Option<AuditLogger>,
}

impl<S: DocumentStore> AppContext<S> {
    /// Create an empty, not yet loaded context for `user`
    pub fn new(store: S, user: UserId) -> Self {
        Self {
            store,
            user,
            expenses: Vec::new(),
            budget_goal: None,
            loaded: false,
            pending: Pending::default(),
            audit: None,
        }
    }

    /// Record mutations in this audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Read both documents from the store
    ///
    /// On failure the context is left empty and unloaded, and mutations are
    /// refused until a later `load` succeeds.
    pub fn load(&mut self) -> StoreResult<()> {
        let loaded = ExpensesDocument::load(&self.store, &self.user).and_then(|expenses| {
            SettingsDocument::load(&self.store, &self.user).map(|settings| (expenses, settings))
        });

        match loaded {
            Ok((expenses, settings)) => {
                self.expenses = expenses.list;
                self.budget_goal = settings.budget_goal;
                self.loaded = true;
                self.pending = Pending::default();
                Ok(())
            }
            Err(e) => {
                self.expenses.clear();
                self.budget_goal = None;
                self.loaded = false;
                self.pending = Pending::default();
                Err(e)
            }
        }
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether some change has not reached the store yet
    pub fn is_dirty(&self) -> bool {
        self.pending.expenses || self.pending.settings
    }

    /// All expenses in entry order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budget_goal(&self) -> Option<Money> {
        self.budget_goal
    }

    /// Find an expense by full id or short display form
    pub fn find_expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id.matches(id))
    }

    /// Aggregates over the full expense list
    pub fn summary(&self, today: NaiveDate) -> ExpenseSummary {
        ExpenseSummary::compute(&self.expenses, today)
    }

    pub fn budget_status(&self, today: NaiveDate) -> BudgetStatus {
        evaluate_budget(&self.expenses, self.budget_goal, today)
    }

    pub fn filtered(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        filter_expenses(&self.expenses, filter)
    }

    pub fn chart(&self) -> ChartData {
        ChartData::from_expenses(&self.expenses)
    }

    /// Validate a draft and append the new expense
    ///
    /// A validation failure leaves the list untouched.
    pub fn add_expense(&mut self, draft: &ExpenseDraft) -> BuddyResult<MutationReport<Expense>> {
        self.ensure_loaded()?;
        let expense = draft.validate()?;

        self.expenses.push(expense.clone());
        let save = self.persist_expenses();

        let audit_error = self.record(AuditEntry::create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.title.clone()),
            &expense,
        ));

        Ok(MutationReport {
            value: expense,
            save,
            audit_error,
        })
    }

    /// Remove the expense with the given id (full or short form)
    pub fn delete_expense(&mut self, id: &str) -> BuddyResult<MutationReport<Expense>> {
        self.ensure_loaded()?;
        let index = self
            .expenses
            .iter()
            .position(|e| e.id.matches(id))
            .ok_or_else(|| BuddyError::expense_not_found(id.trim()))?;

        let removed = self.expenses.remove(index);
        let save = self.persist_expenses();

        let audit_error = self.record(AuditEntry::delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.title.clone()),
            &removed,
        ));

        Ok(MutationReport {
            value: removed,
            save,
            audit_error,
        })
    }

    /// Set the monthly budget goal from user input
    ///
    /// The goal must be strictly positive.
    pub fn set_budget_goal(&mut self, input: &str) -> BuddyResult<MutationReport<Money>> {
        self.ensure_loaded()?;
        let goal = parse_positive_amount(input, InputField::BudgetGoal)?;

        let previous = self.budget_goal.replace(goal);
        let save = self.persist_settings();

        let audit_error = self.record(AuditEntry::update(
            EntityType::BudgetGoal,
            self.user.to_string(),
            None,
            &previous.map(|m| m.as_f64()),
            &Some(goal.as_f64()),
            Some(format!(
                "budgetGoal: {} -> {}",
                previous.map_or_else(|| "none".to_string(), |m| m.format_plain()),
                goal.format_plain()
            )),
        ));

        Ok(MutationReport {
            value: goal,
            save,
            audit_error,
        })
    }

    /// Remove the budget goal, returning the previous one
    pub fn clear_budget_goal(&mut self) -> BuddyResult<MutationReport<Option<Money>>> {
        self.ensure_loaded()?;
        let previous = self.budget_goal.take();
        let save = self.persist_settings();

        let audit_error = previous.and_then(|goal| {
            self.record(AuditEntry::delete(
                EntityType::BudgetGoal,
                self.user.to_string(),
                None,
                &goal.as_f64(),
            ))
        });

        Ok(MutationReport {
            value: previous,
            save,
            audit_error,
        })
    }

    /// Delete every document the user owns
    ///
    /// Works on an unloaded context too, so unreadable data can be cleared.
    /// If the store refuses, memory is left as it was.
    pub fn reset_all(&mut self) -> BuddyResult<MutationReport<()>> {
        let before = json!({
            "expenses": self.expenses.len(),
            "budgetGoal": self.budget_goal.map(|m| m.as_f64()),
        });

        for key in DocKey::all() {
            self.store.delete(&self.user, *key)?;
        }

        self.expenses.clear();
        self.budget_goal = None;
        self.loaded = true;
        self.pending = Pending::default();

        let audit_error = self.record(AuditEntry::delete(
            EntityType::UserData,
            self.user.to_string(),
            None,
            &before,
        ));

        Ok(MutationReport {
            value: (),
            save: SaveStatus::Saved,
            audit_error,
        })
    }

    /// Retry any writes that failed earlier
    pub fn sync(&mut self) -> StoreResult<()> {
        if self.pending.expenses {
            self.persist_expenses().into_result()?;
        }
        if self.pending.settings {
            self.persist_settings().into_result()?;
        }
        Ok(())
    }

    fn ensure_loaded(&self) -> BuddyResult<()> {
        if self.loaded {
            Ok(())
        } else {
            Err(BuddyError::NotLoaded)
        }
    }

    fn persist_expenses(&mut self) -> SaveStatus {
        let doc = ExpensesDocument {
            list: self.expenses.clone(),
        };
        let status = SaveStatus::from(doc.save(&self.store, &self.user));
        self.pending.expenses = !status.is_saved();
        status
    }

    fn persist_settings(&mut self) -> SaveStatus {
        let doc = SettingsDocument {
            budget_goal: self.budget_goal,
        };
        let status = SaveStatus::from(doc.save(&self.store, &self.user));
        self.pending.settings = !status.is_saved();
        status
    }

    /// Append to the audit log; a failure is reported, never propagated
    fn record(&self, entry: AuditEntry) -> Option<String> {
        let logger = self.audit.as_ref()?;
        logger.log(&entry.by(self.user)).err().map(|e| e.to_string())
    }
}

impl From<StoreResult<()>> for SaveStatus {
    fn from(result: StoreResult<()>) -> Self {
        match result {
            Ok(()) => Self::Saved,
            Err(e) => Self::Unsaved(e),
        }
    }
}

impl SaveStatus {
    fn into_result(self) -> StoreResult<()> {
        match self {
            Self::Saved => Ok(()),
            Self::Unsaved(e) => Err(e),
        }
    }
}
