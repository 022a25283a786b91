//! The portfolio document
//!
//! Everything the tracker knows about one user: expenses, debts, budgets,
//! and the optional expected monthly income. This is the unit the storage
//! layer loads and saves as a whole; records reference each other only by
//! id, and budgets embed their own line items.

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::debt::Debt;
use super::expense::Expense;
use super::money::Money;

/// Current portfolio schema version
pub const PORTFOLIO_SCHEMA_VERSION: u32 = 1;

/// The complete tracked state for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub debts: Vec<Debt>,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    /// Expected monthly income; `None` means "not set", which is distinct
    /// from a configured income of zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<Money>,
}

fn default_schema_version() -> u32 {
    PORTFOLIO_SCHEMA_VERSION
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            schema_version: PORTFOLIO_SCHEMA_VERSION,
            expenses: Vec::new(),
            debts: Vec::new(),
            budgets: Vec::new(),
            monthly_income: None,
        }
    }
}

impl Portfolio {
    /// Find an expense by exact id display form, full UUID, or
    /// case-insensitive name
    pub fn find_expense(&self, key: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| matches_key(key, &e.name, &e.id.to_string(), e.id.as_uuid()))
    }

    /// Mutable variant of [`find_expense`](Self::find_expense)
    pub fn find_expense_mut(&mut self, key: &str) -> Option<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|e| matches_key(key, &e.name, &e.id.to_string(), e.id.as_uuid()))
    }

    /// Find a debt by id display form, full UUID, or case-insensitive name
    pub fn find_debt(&self, key: &str) -> Option<&Debt> {
        self.debts.iter().find(|d| matches_key(key, &d.name, &d.id.to_string(), d.id.as_uuid()))
    }

    /// Mutable variant of [`find_debt`](Self::find_debt)
    pub fn find_debt_mut(&mut self, key: &str) -> Option<&mut Debt> {
        self.debts
            .iter_mut()
            .find(|d| matches_key(key, &d.name, &d.id.to_string(), d.id.as_uuid()))
    }

    /// Find a budget by id display form, full UUID, or case-insensitive name
    pub fn find_budget(&self, key: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| matches_key(key, &b.name, &b.id.to_string(), b.id.as_uuid()))
    }

    /// Mutable variant of [`find_budget`](Self::find_budget)
    pub fn find_budget_mut(&mut self, key: &str) -> Option<&mut Budget> {
        self.budgets
            .iter_mut()
            .find(|b| matches_key(key, &b.name, &b.id.to_string(), b.id.as_uuid()))
    }

    /// Remove an expense by key, returning it if present
    pub fn remove_expense(&mut self, key: &str) -> Option<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| matches_key(key, &e.name, &e.id.to_string(), e.id.as_uuid()))?;
        Some(self.expenses.remove(index))
    }

    /// Remove a debt by key, returning it if present
    pub fn remove_debt(&mut self, key: &str) -> Option<Debt> {
        let index = self
            .debts
            .iter()
            .position(|d| matches_key(key, &d.name, &d.id.to_string(), d.id.as_uuid()))?;
        Some(self.debts.remove(index))
    }

    /// Remove a budget by key, returning it if present
    pub fn remove_budget(&mut self, key: &str) -> Option<Budget> {
        let index = self
            .budgets
            .iter()
            .position(|b| matches_key(key, &b.name, &b.id.to_string(), b.id.as_uuid()))?;
        Some(self.budgets.remove(index))
    }

    /// Active expenses only
    pub fn active_expenses(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().filter(|e| e.active)
    }

    /// Active debts only
    pub fn active_debts(&self) -> impl Iterator<Item = &Debt> {
        self.debts.iter().filter(|d| d.active)
    }
}

/// Match a user-supplied key against a record's name and id forms
fn matches_key(key: &str, name: &str, id_display: &str, id_uuid: &uuid::Uuid) -> bool {
    key.eq_ignore_ascii_case(name) || key == id_display || key == id_uuid.to_string()
}
