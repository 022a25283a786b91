//! Budget service
//!
//! Create and remove budgets and their line items. Spent and remaining are
//! never stored; they are recomputed from line items on every read.

use tracing::info;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{Budget, LineItem, Money};
use crate::storage::Store;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a mut Store,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Add a new empty budget
    pub fn add(&mut self, name: &str, total: Money) -> OutlayResult<Budget> {
        if self.store.portfolio().find_budget(name).is_some() {
            return Err(OutlayError::Duplicate {
                entity_type: "Budget",
                identifier: name.to_string(),
            });
        }

        let budget = Budget::new(name, total);
        budget
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        info!(name = %budget.name, total = %budget.total, "adding budget");
        self.store.portfolio_mut().budgets.push(budget.clone());
        self.store.save()?;
        Ok(budget)
    }

    /// Change a budget's planned total
    pub fn set_total(&mut self, key: &str, total: Money) -> OutlayResult<Budget> {
        let budget = self
            .store
            .portfolio_mut()
            .find_budget_mut(key)
            .ok_or_else(|| OutlayError::budget_not_found(key))?;

        budget.set_total(total);
        budget
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        let updated = budget.clone();
        self.store.save()?;
        Ok(updated)
    }

    /// Append a line item to a budget
    pub fn add_line_item(
        &mut self,
        key: &str,
        name: &str,
        amount: Money,
    ) -> OutlayResult<Budget> {
        if name.trim().is_empty() {
            return Err(OutlayError::Validation(
                "Line item name cannot be empty".into(),
            ));
        }
        if amount.is_negative() {
            return Err(OutlayError::Validation(
                "Line item amount cannot be negative".into(),
            ));
        }

        let budget = self
            .store
            .portfolio_mut()
            .find_budget_mut(key)
            .ok_or_else(|| OutlayError::budget_not_found(key))?;

        budget.add_line_item(LineItem::new(name, amount));
        let updated = budget.clone();
        info!(budget = %updated.name, line = name, amount = %amount, "added line item");
        self.store.save()?;
        Ok(updated)
    }

    /// Remove a line item by name (case-insensitive) or id display form
    pub fn remove_line_item(&mut self, key: &str, line_key: &str) -> OutlayResult<Budget> {
        let budget = self
            .store
            .portfolio_mut()
            .find_budget_mut(key)
            .ok_or_else(|| OutlayError::budget_not_found(key))?;

        let line_id = budget
            .line_items
            .iter()
            .find(|item| {
                line_key.eq_ignore_ascii_case(&item.name) || line_key == item.id.to_string()
            })
            .map(|item| item.id)
            .ok_or_else(|| OutlayError::NotFound {
                entity_type: "Line item",
                identifier: line_key.to_string(),
            })?;

        budget.remove_line_item(line_id);
        let updated = budget.clone();
        self.store.save()?;
        Ok(updated)
    }

    /// Hard-delete a budget and its embedded line items
    pub fn remove(&mut self, key: &str) -> OutlayResult<Budget> {
        let removed = self
            .store
            .portfolio_mut()
            .remove_budget(key)
            .ok_or_else(|| OutlayError::budget_not_found(key))?;

        info!(name = %removed.name, "removed budget");
        self.store.save()?;
        Ok(removed)
    }

    /// Look up one budget
    pub fn get(&self, key: &str) -> OutlayResult<&Budget> {
        self.store
            .portfolio()
            .find_budget(key)
            .ok_or_else(|| OutlayError::budget_not_found(key))
    }

    /// All budgets
    pub fn list(&self) -> &[Budget] {
        &self.store.portfolio().budgets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutlayPaths;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::open(paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_add_budget_with_lines() {
        let (_temp_dir, mut store) = test_store();
        let mut service = BudgetService::new(&mut store);

        service.add("Groceries", Money::from_cents(50000)).unwrap();
        service
            .add_line_item("Groceries", "Week 1", Money::from_cents(12000))
            .unwrap();
        let budget = service
            .add_line_item("Groceries", "Week 2", Money::from_cents(13500))
            .unwrap();

        assert_eq!(budget.spent().cents(), 25500);
        assert_eq!(budget.remaining().cents(), 24500);
    }

    #[test]
    fn test_remove_line_item_by_name() {
        let (_temp_dir, mut store) = test_store();
        let mut service = BudgetService::new(&mut store);

        service.add("Groceries", Money::from_cents(50000)).unwrap();
        service
            .add_line_item("Groceries", "Week 1", Money::from_cents(12000))
            .unwrap();
        let budget = service.remove_line_item("Groceries", "week 1").unwrap();

        assert!(budget.line_items.is_empty());
        assert_eq!(budget.spent(), Money::zero());
    }

    #[test]
    fn test_line_item_validation() {
        let (_temp_dir, mut store) = test_store();
        let mut service = BudgetService::new(&mut store);

        service.add("Groceries", Money::from_cents(50000)).unwrap();
        assert!(service
            .add_line_item("Groceries", "  ", Money::from_cents(100))
            .is_err());
        assert!(service
            .add_line_item("Groceries", "Week 1", Money::from_cents(-100))
            .is_err());
    }

    #[test]
    fn test_missing_budget_and_line() {
        let (_temp_dir, mut store) = test_store();
        let mut service = BudgetService::new(&mut store);

        assert!(service.get("nope").is_err());
        service.add("Groceries", Money::from_cents(50000)).unwrap();
        assert!(service.remove_line_item("Groceries", "nope").is_err());
    }

    #[test]
    fn test_remove_budget() {
        let (_temp_dir, mut store) = test_store();
        let mut service = BudgetService::new(&mut store);

        service.add("Groceries", Money::from_cents(50000)).unwrap();
        service.remove("Groceries").unwrap();
        assert!(service.list().is_empty());
    }
}
