//! Budget model
//!
//! A budget is a named total with an ordered list of line items. The spent
//! figure is always recomputed as the sum of the current line items; it is
//! a projection, never independently stored state, so it cannot drift from
//! the lines that back it. Remaining may go negative: overspend is a state
//! the user needs to see, not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BudgetId, LineItemId};
use super::money::Money;

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    NegativeTotal,
}

impl std::fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget name cannot be empty"),
            Self::NegativeTotal => write!(f, "Budget total cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

/// A single line item inside a budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub name: String,
    pub amount: Money,
}

impl LineItem {
    /// Create a new line item
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: LineItemId::new(),
            name: name.into(),
            amount,
        }
    }
}

/// A budget with embedded line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub name: String,
    /// The planned total for this budget
    pub total: Money,
    /// Ordered line items; owned by and embedded in the budget
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new empty budget
    pub fn new(name: impl Into<String>, total: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            name: name.into(),
            total,
            line_items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sum of the current line items
    ///
    /// Always derived on read; there is no cached spent field to invalidate.
    pub fn spent(&self) -> Money {
        self.line_items.iter().map(|item| item.amount).sum()
    }

    /// Amount left in the budget; negative when overspent
    pub fn remaining(&self) -> Money {
        self.total - self.spent()
    }

    /// Whether the line items exceed the planned total
    pub fn is_overspent(&self) -> bool {
        self.remaining().is_negative()
    }

    /// Append a line item
    pub fn add_line_item(&mut self, item: LineItem) {
        self.line_items.push(item);
        self.updated_at = Utc::now();
    }

    /// Remove a line item by id, returning it if present
    pub fn remove_line_item(&mut self, id: LineItemId) -> Option<LineItem> {
        let index = self.line_items.iter().position(|item| item.id == id)?;
        self.updated_at = Utc::now();
        Some(self.line_items.remove(index))
    }

    /// Set the planned total
    pub fn set_total(&mut self, total: Money) {
        self.total = total;
        self.updated_at = Utc::now();
    }

    /// Rename the budget
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }
        if self.total.is_negative() {
            return Err(BudgetValidationError::NegativeTotal);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spent_is_sum_of_line_items() {
        let mut budget = Budget::new("Groceries", Money::from_cents(50000));
        budget.add_line_item(LineItem::new("Week 1", Money::from_cents(12000)));
        budget.add_line_item(LineItem::new("Week 2", Money::from_cents(13500)));

        assert_eq!(budget.spent().cents(), 25500);
        assert_eq!(budget.remaining().cents(), 24500);
        assert!(!budget.is_overspent());
    }

    #[test]
    fn test_empty_budget_spends_nothing() {
        let budget = Budget::new("Vacation", Money::from_cents(100000));
        assert_eq!(budget.spent(), Money::zero());
        assert_eq!(budget.remaining(), budget.total);
    }

    #[test]
    fn test_overspend_is_representable() {
        let mut budget = Budget::new("Dining", Money::from_cents(10000));
        budget.add_line_item(LineItem::new("Birthday dinner", Money::from_cents(15000)));

        assert!(budget.is_overspent());
        assert_eq!(budget.remaining().cents(), -5000);
    }

    #[test]
    fn test_spent_tracks_removal() {
        let mut budget = Budget::new("Hobby", Money::from_cents(20000));
        let item = LineItem::new("Paint", Money::from_cents(4000));
        let item_id = item.id;
        budget.add_line_item(item);
        budget.add_line_item(LineItem::new("Brushes", Money::from_cents(2500)));

        assert_eq!(budget.spent().cents(), 6500);

        let removed = budget.remove_line_item(item_id).unwrap();
        assert_eq!(removed.amount.cents(), 4000);
        assert_eq!(budget.spent().cents(), 2500);
    }

    #[test]
    fn test_remove_missing_line_item() {
        let mut budget = Budget::new("Hobby", Money::from_cents(20000));
        assert!(budget.remove_line_item(LineItemId::new()).is_none());
    }

    #[test]
    fn test_validation() {
        let budget = Budget::new("", Money::from_cents(1000));
        assert!(matches!(
            budget.validate(),
            Err(BudgetValidationError::EmptyName)
        ));

        let budget = Budget::new("Travel", Money::from_cents(-1));
        assert!(matches!(
            budget.validate(),
            Err(BudgetValidationError::NegativeTotal)
        ));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut budget = Budget::new("Groceries", Money::from_cents(50000));
        budget.add_line_item(LineItem::new("Week 1", Money::from_cents(12000)));

        let json = serde_json::to_string(&budget).unwrap();
        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget.id, deserialized.id);
        assert_eq!(deserialized.line_items.len(), 1);
        assert_eq!(deserialized.spent().cents(), 12000);
    }
}
