//! Recurring expense model
//!
//! An expense is a recurring amount at some frequency, optionally tagged
//! with a category label. Records are soft-deactivated via the `active`
//! flag so they drop out of aggregation without losing history; hard
//! deletion is a separate explicit action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::frequency::Frequency;
use super::ids::ExpenseId;
use super::money::Money;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NegativeAmount,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recurring expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub frequency: Frequency,
    /// Opaque grouping label; normalization and aggregation ignore it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inactive expenses contribute nothing to totals but are kept on file
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Expense {
    /// Create a new active expense
    pub fn new(name: impl Into<String>, amount: Money, frequency: Frequency) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            frequency,
            category: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new expense with a category label
    pub fn with_category(
        name: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        category: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(name, amount, frequency);
        expense.category = Some(category.into());
        expense
    }

    /// Set the amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Set the frequency
    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
        self.updated_at = Utc::now();
    }

    /// Rename the expense
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Set or clear the category label
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.updated_at = Utc::now();
    }

    /// Toggle the soft-disable flag
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        Ok(())
    }
}
