//! Portfolio-level rollups
//!
//! Folds active expenses and debts, plus the optional expected monthly
//! income, into a single summary. The fold is exact integer arithmetic over
//! cents, so it is associative and commutative: the result does not depend
//! on the order of the input collections.

use serde::Serialize;

use super::normalize::annualize;
use crate::models::{Debt, Expense, Money};

const MONTHS_PER_YEAR: i64 = 12;

/// Portfolio summary computed from the current records
///
/// Computed on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Sum of annualized active expenses
    pub yearly_expenses: Money,
    /// `yearly_expenses / 12`
    pub monthly_expenses: Money,
    /// Sum of configured monthly payments across active debts
    pub monthly_debt_service: Money,
    /// Income minus expenses and debt service; `None` when no income is set
    ///
    /// `None` is not zero: with no configured income there is no disposable
    /// figure to show, while a configured income of zero legitimately
    /// yields a (negative) number.
    pub disposable_income: Option<Money>,
}

/// Fold expenses, debts, and optional income into a [`Summary`]
///
/// Inactive records contribute nothing. Debts without a positive configured
/// monthly payment contribute nothing to debt service.
pub fn summarize(expenses: &[Expense], debts: &[Debt], monthly_income: Option<Money>) -> Summary {
    let yearly_expenses: Money = expenses
        .iter()
        .filter(|e| e.active)
        .map(|e| annualize(e.amount, e.frequency))
        .sum();

    let monthly_expenses = yearly_expenses.divide_rounded(MONTHS_PER_YEAR);

    let monthly_debt_service: Money = debts
        .iter()
        .filter(|d| d.active)
        .filter_map(|d| d.effective_monthly_payment())
        .sum();

    let disposable_income =
        monthly_income.map(|income| income - monthly_expenses - monthly_debt_service);

    Summary {
        yearly_expenses,
        monthly_expenses,
        monthly_debt_service,
        disposable_income,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;

    fn expense(name: &str, cents: i64, frequency: Frequency) -> Expense {
        Expense::new(name, Money::from_cents(cents), frequency)
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = summarize(&[], &[], None);
        assert_eq!(summary.yearly_expenses, Money::zero());
        assert_eq!(summary.monthly_expenses, Money::zero());
        assert_eq!(summary.monthly_debt_service, Money::zero());
        assert_eq!(summary.disposable_income, None);
    }

    #[test]
    fn test_mixed_frequencies() {
        let expenses = vec![
            expense("Coffee", 350, Frequency::Daily),     // 1277.50 / yr
            expense("Netflix", 1599, Frequency::Monthly), // 191.88 / yr
            expense("Insurance", 48000, Frequency::Yearly), // 480.00 / yr
        ];

        let summary = summarize(&expenses, &[], None);
        assert_eq!(summary.yearly_expenses.cents(), 350 * 365 + 1599 * 12 + 48000);
        assert_eq!(
            summary.monthly_expenses,
            summary.yearly_expenses.divide_rounded(12)
        );
    }

    #[test]
    fn test_permutation_invariance() {
        let e1 = expense("A", 1234, Frequency::Daily);
        let e2 = expense("B", 5678, Frequency::Monthly);
        let e3 = expense("C", 910, Frequency::Yearly);

        let forward = summarize(&[e1.clone(), e2.clone(), e3.clone()], &[], None);
        let backward = summarize(&[e3, e2, e1], &[], None);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_inactive_records_contribute_nothing() {
        let mut big = expense("Lavish", 9_999_999, Frequency::Daily);
        big.set_active(false);
        let small = expense("Modest", 1000, Frequency::Monthly);

        let mut idle_debt = Debt::with_monthly_payment(
            "Old Loan",
            Money::from_cents(500000),
            Money::from_cents(40000),
        );
        idle_debt.set_active(false);

        let summary = summarize(&[big, small], &[idle_debt], None);
        assert_eq!(summary.yearly_expenses.cents(), 12000);
        assert_eq!(summary.monthly_debt_service, Money::zero());
    }

    #[test]
    fn test_debt_service_sums_configured_payments() {
        let debts = vec![
            Debt::with_monthly_payment("Car", Money::from_cents(850000), Money::from_cents(30000)),
            Debt::with_monthly_payment(
                "Student",
                Money::from_cents(1_200_000),
                Money::from_cents(25000),
            ),
            // no payment configured: contributes nothing
            Debt::new("Family", Money::from_cents(100000)),
        ];

        let summary = summarize(&[], &debts, None);
        assert_eq!(summary.monthly_debt_service.cents(), 55000);
    }

    #[test]
    fn test_disposable_income() {
        let expenses = vec![expense("Rent", 120000, Frequency::Monthly)];
        let debts = vec![Debt::with_monthly_payment(
            "Car",
            Money::from_cents(850000),
            Money::from_cents(30000),
        )];

        let summary = summarize(&expenses, &debts, Some(Money::from_cents(400000)));
        // 4000.00 - 1200.00 - 300.00
        assert_eq!(summary.disposable_income, Some(Money::from_cents(250000)));
    }

    #[test]
    fn test_disposable_income_may_be_negative() {
        let expenses = vec![expense("Rent", 120000, Frequency::Monthly)];
        let summary = summarize(&expenses, &[], Some(Money::from_cents(100000)));
        assert_eq!(summary.disposable_income, Some(Money::from_cents(-20000)));
    }

    #[test]
    fn test_zero_income_is_not_missing_income() {
        let expenses = vec![expense("Rent", 120000, Frequency::Monthly)];

        let unset = summarize(&expenses, &[], None);
        assert_eq!(unset.disposable_income, None);

        let zero = summarize(&expenses, &[], Some(Money::zero()));
        assert_eq!(zero.disposable_income, Some(Money::from_cents(-120000)));

        assert_ne!(unset.disposable_income, zero.disposable_income);
    }

    #[test]
    fn test_per_item_division_rule_matches_aggregate() {
        // a single-item portfolio: the aggregate monthly figure equals the
        // item's own monthly equivalent
        let only = expense("Insurance", 48000, Frequency::Yearly);
        let summary = summarize(&[only.clone()], &[], None);
        assert_eq!(
            summary.monthly_expenses,
            crate::engine::normalize::monthly_equivalent(only.amount, only.frequency)
        );
    }
}
