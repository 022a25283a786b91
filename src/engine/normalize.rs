//! Recurring-amount normalization
//!
//! Converts an amount at any recurrence frequency into its yearly and
//! monthly equivalents so heterogeneous records can be compared and summed.
//! The year is a fixed 365 days and the monthly figure is always derived by
//! dividing the yearly figure by twelve; there is no direct daily-to-monthly
//! shortcut, so every monthly number in the application traces back to the
//! same conversion.

use crate::models::{Frequency, Money};

const MONTHS_PER_YEAR: i64 = 12;

/// Total-per-year equivalent of a recurring amount
///
/// Exact integer arithmetic over cents; annualizing an already-yearly
/// amount is the identity.
pub fn annualize(amount: Money, frequency: Frequency) -> Money {
    amount.scale(frequency.occurrences_per_year())
}

/// Monthly equivalent of a recurring amount
///
/// Defined as `annualize(amount, frequency) / 12`, rounded to the nearest
/// cent. The same division rule produces per-item figures and aggregate
/// totals.
pub fn monthly_equivalent(amount: Money, frequency: Frequency) -> Money {
    annualize(amount, frequency).divide_rounded(MONTHS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annualize_daily() {
        // daily amounts scale by a fixed 365-day year
        let yearly = annualize(Money::from_cents(350), Frequency::Daily);
        assert_eq!(yearly.cents(), 350 * 365);
    }

    #[test]
    fn test_annualize_monthly() {
        let yearly = annualize(Money::from_cents(1599), Frequency::Monthly);
        assert_eq!(yearly.cents(), 1599 * 12);
    }

    #[test]
    fn test_annualize_yearly_is_identity() {
        let amount = Money::from_cents(99_99);
        assert_eq!(annualize(amount, Frequency::Yearly), amount);
    }

    #[test]
    fn test_annualize_other_frequencies() {
        assert_eq!(
            annualize(Money::from_cents(100), Frequency::Weekly).cents(),
            5200
        );
        assert_eq!(
            annualize(Money::from_cents(100), Frequency::Quarterly).cents(),
            400
        );
        assert_eq!(
            annualize(Money::from_cents(100), Frequency::HalfYearly).cents(),
            200
        );
    }

    #[test]
    fn test_annualize_zero() {
        for freq in Frequency::ALL {
            assert_eq!(annualize(Money::zero(), freq), Money::zero());
        }
    }

    #[test]
    fn test_monthly_equivalent_is_annualized_over_twelve() {
        for freq in Frequency::ALL {
            let amount = Money::from_cents(12345);
            assert_eq!(
                monthly_equivalent(amount, freq),
                annualize(amount, freq).divide_rounded(12)
            );
        }
    }

    #[test]
    fn test_monthly_equivalent_of_monthly_is_identity() {
        let amount = Money::from_cents(1599);
        assert_eq!(monthly_equivalent(amount, Frequency::Monthly), amount);
    }

    #[test]
    fn test_monthly_equivalent_of_yearly() {
        // 120.00 yearly -> 10.00 monthly
        let monthly = monthly_equivalent(Money::from_cents(12000), Frequency::Yearly);
        assert_eq!(monthly.cents(), 1000);
    }

    #[test]
    fn test_monthly_equivalent_rounds_to_nearest_cent() {
        // 100.00 yearly -> 8.3333.. monthly -> 8.33
        let monthly = monthly_equivalent(Money::from_cents(10000), Frequency::Yearly);
        assert_eq!(monthly.cents(), 833);

        // 102 cents yearly -> 8.5 cents monthly -> 9 cents
        let monthly = monthly_equivalent(Money::from_cents(102), Frequency::Yearly);
        assert_eq!(monthly.cents(), 9);
    }
}
