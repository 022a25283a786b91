//! Income service
//!
//! Manages the expected monthly income the aggregator subtracts expenses
//! and debt service from. "Not set" and "set to zero" are different states:
//! with no income configured the summary shows no disposable figure at all.

use tracing::info;

use crate::error::{OutlayError, OutlayResult};
use crate::models::Money;
use crate::storage::Store;

/// Service for expected-income management
pub struct IncomeService<'a> {
    store: &'a mut Store,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Set the expected monthly income
    pub fn set(&mut self, amount: Money) -> OutlayResult<Money> {
        if amount.is_negative() {
            return Err(OutlayError::Validation(
                "Monthly income cannot be negative".into(),
            ));
        }

        self.store.portfolio_mut().monthly_income = Some(amount);
        info!(income = %amount, "set monthly income");
        self.store.save()?;
        Ok(amount)
    }

    /// Clear the expected monthly income, returning the previous value
    pub fn clear(&mut self) -> OutlayResult<Option<Money>> {
        let previous = self.store.portfolio_mut().monthly_income.take();
        if previous.is_some() {
            info!("cleared monthly income");
            self.store.save()?;
        }
        Ok(previous)
    }

    /// The configured monthly income, if any
    pub fn get(&self) -> Option<Money> {
        self.store.portfolio().monthly_income
    }
}
