//! Debt service
//!
//! Create, edit, and remove debts, and record payments against them. All
//! payoff arithmetic comes from the engine; the service only persists its
//! results.

use tracing::{debug, info};

use crate::engine::{amortize, PayoffPlan};
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Debt, Money};
use crate::storage::Store;

/// Outcome of recording a payment against a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub previous_balance: Money,
    pub new_balance: Money,
}

impl PaymentReceipt {
    /// Amount the balance actually dropped by; less than the payment when
    /// the payment overshot the balance
    pub fn applied(&self) -> Money {
        self.previous_balance - self.new_balance
    }
}

/// Service for debt management
pub struct DebtService<'a> {
    store: &'a mut Store,
}

impl<'a> DebtService<'a> {
    /// Create a new debt service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Add a new debt
    pub fn add(
        &mut self,
        name: &str,
        balance: Money,
        monthly_payment: Option<Money>,
    ) -> OutlayResult<Debt> {
        if self.store.portfolio().find_debt(name).is_some() {
            return Err(OutlayError::Duplicate {
                entity_type: "Debt",
                identifier: name.to_string(),
            });
        }

        let mut debt = Debt::new(name, balance);
        debt.monthly_payment = monthly_payment;
        debt.validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        info!(name = %debt.name, balance = %debt.balance, "adding debt");
        self.store.portfolio_mut().debts.push(debt.clone());
        self.store.save()?;
        Ok(debt)
    }

    /// Edit an existing debt; `None` fields are left unchanged
    ///
    /// Pass `Some(None)` as `monthly_payment` to clear a configured payment.
    pub fn edit(
        &mut self,
        key: &str,
        balance: Option<Money>,
        monthly_payment: Option<Option<Money>>,
    ) -> OutlayResult<Debt> {
        let debt = self
            .store
            .portfolio_mut()
            .find_debt_mut(key)
            .ok_or_else(|| OutlayError::debt_not_found(key))?;

        if let Some(balance) = balance {
            debt.set_balance(balance);
        }
        if let Some(payment) = monthly_payment {
            debt.set_monthly_payment(payment);
        }

        debt.validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        let updated = debt.clone();
        debug!(name = %updated.name, "edited debt");
        self.store.save()?;
        Ok(updated)
    }

    /// Soft-deactivate or reactivate a debt
    pub fn set_active(&mut self, key: &str, active: bool) -> OutlayResult<Debt> {
        let debt = self
            .store
            .portfolio_mut()
            .find_debt_mut(key)
            .ok_or_else(|| OutlayError::debt_not_found(key))?;

        debt.set_active(active);
        let updated = debt.clone();
        info!(name = %updated.name, active, "toggled debt");
        self.store.save()?;
        Ok(updated)
    }

    /// Hard-delete a debt
    pub fn remove(&mut self, key: &str) -> OutlayResult<Debt> {
        let removed = self
            .store
            .portfolio_mut()
            .remove_debt(key)
            .ok_or_else(|| OutlayError::debt_not_found(key))?;

        info!(name = %removed.name, "removed debt");
        self.store.save()?;
        Ok(removed)
    }

    /// Record a payment, clamping the balance at zero
    pub fn record_payment(&mut self, key: &str, payment: Money) -> OutlayResult<PaymentReceipt> {
        let debt = self
            .store
            .portfolio_mut()
            .find_debt_mut(key)
            .ok_or_else(|| OutlayError::debt_not_found(key))?;

        let previous_balance = debt.balance;
        let new_balance = amortize::apply_payment(previous_balance, payment)?;
        debt.set_balance(new_balance);

        info!(
            name = %debt.name,
            payment = %payment,
            balance = %new_balance,
            "recorded debt payment"
        );
        self.store.save()?;
        Ok(PaymentReceipt {
            previous_balance,
            new_balance,
        })
    }

    /// Payoff plan for one debt
    pub fn payoff_plan(&self, key: &str) -> OutlayResult<(Debt, PayoffPlan)> {
        let debt = self
            .store
            .portfolio()
            .find_debt(key)
            .ok_or_else(|| OutlayError::debt_not_found(key))?;

        let plan = PayoffPlan::new(debt.balance, debt.monthly_payment);
        Ok((debt.clone(), plan))
    }

    /// All debts, active and paused
    pub fn list(&self) -> &[Debt] {
        &self.store.portfolio().debts
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
    fn test_add_and_plan() {
        let (_temp_dir, mut store) = test_store();
        let mut service = DebtService::new(&mut store);

        service
            .add(
                "Car Loan",
                Money::from_cents(100000),
                Some(Money::from_cents(30000)),
            )
            .unwrap();

        let (debt, plan) = service.payoff_plan("Car Loan").unwrap();
        assert_eq!(debt.balance.cents(), 100000);
        assert_eq!(plan.term_count(), Some(4));
    }

    #[test]
    fn test_plan_without_payment_is_unknown() {
        let (_temp_dir, mut store) = test_store();
        let mut service = DebtService::new(&mut store);

        service.add("Family", Money::from_cents(50000), None).unwrap();
        let (_, plan) = service.payoff_plan("Family").unwrap();
        assert_eq!(plan, PayoffPlan::NoSchedule);
    }

    #[test]
    fn test_record_payment() {
        let (_temp_dir, mut store) = test_store();
        let mut service = DebtService::new(&mut store);

        service
            .add("Car Loan", Money::from_cents(100000), None)
            .unwrap();
        let receipt = service
            .record_payment("Car Loan", Money::from_cents(30000))
            .unwrap();

        assert_eq!(receipt.previous_balance.cents(), 100000);
        assert_eq!(receipt.new_balance.cents(), 70000);
        assert_eq!(receipt.applied().cents(), 30000);
    }

    #[test]
    fn test_overpayment_clamps_and_reports_applied() {
        let (_temp_dir, mut store) = test_store();
        let mut service = DebtService::new(&mut store);

        service.add("Tail", Money::from_cents(2000), None).unwrap();
        let receipt = service
            .record_payment("Tail", Money::from_cents(5000))
            .unwrap();

        assert_eq!(receipt.new_balance, Money::zero());
        assert_eq!(receipt.applied().cents(), 2000);

        let (debt, _) = service.payoff_plan("Tail").unwrap();
        assert!(debt.is_settled());
    }

    #[test]
    fn test_zero_payment_rejected() {
        let (_temp_dir, mut store) = test_store();
        let mut service = DebtService::new(&mut store);

        service.add("Tail", Money::from_cents(2000), None).unwrap();
        let err = service.record_payment("Tail", Money::zero()).unwrap_err();
        assert!(matches!(err, OutlayError::InvalidPayment(_)));

        // balance untouched
        let (debt, _) = service.payoff_plan("Tail").unwrap();
        assert_eq!(debt.balance.cents(), 2000);
    }

    #[test]
    fn test_edit_clears_payment() {
        let (_temp_dir, mut store) = test_store();
        let mut service = DebtService::new(&mut store);

        service
            .add(
                "Car Loan",
                Money::from_cents(100000),
                Some(Money::from_cents(30000)),
            )
            .unwrap();
        let updated = service.edit("Car Loan", None, Some(None)).unwrap();
        assert!(updated.monthly_payment.is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let (_temp_dir, mut store) = test_store();
        let mut service = DebtService::new(&mut store);

        service.add("Car Loan", Money::from_cents(1), None).unwrap();
        assert!(service
            .add("car loan", Money::from_cents(2), None)
            .is_err());
    }
}
