//! Debt payoff arithmetic
//!
//! Describes how an outstanding balance is retired by a fixed monthly
//! payment: how many payments remain, what the closing payment is, and how
//! a recorded payment changes the balance. "No schedule" (no positive
//! payment configured) is a sentinel, distinct from "paid off" — callers
//! must render the two differently.

use crate::error::{OutlayError, OutlayResult};
use crate::models::Money;

/// How a debt's balance will be retired
///
/// Classifies the renderable payoff cases so display code can match instead
/// of re-deriving them from raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoffPlan {
    /// No positive monthly payment is configured; nothing can be scheduled
    NoSchedule,
    /// The balance is already zero
    Settled,
    /// One payment, equal to the balance exactly, clears the debt
    Single { payment: Money },
    /// `full_payments` payments of `payment`, then one `final_payment`
    ///
    /// When the balance divides evenly the final payment equals the regular
    /// payment; otherwise it is the smaller remainder that closes the debt.
    Installments {
        full_payments: u64,
        payment: Money,
        final_payment: Money,
    },
}

impl PayoffPlan {
    /// Build the payoff plan for a balance and optional monthly payment
    pub fn new(balance: Money, monthly_payment: Option<Money>) -> Self {
        let payment = match monthly_payment.filter(|p| p.is_positive()) {
            Some(p) => p,
            None => return PayoffPlan::NoSchedule,
        };

        if balance.is_zero() {
            return PayoffPlan::Settled;
        }

        let terms = ceil_div(balance, payment);
        if terms == 1 {
            return PayoffPlan::Single { payment: balance };
        }

        PayoffPlan::Installments {
            full_payments: terms - 1,
            payment,
            final_payment: final_payment(balance, payment),
        }
    }

    /// Number of remaining payments, or `None` when no schedule exists
    pub fn term_count(&self) -> Option<u64> {
        match self {
            PayoffPlan::NoSchedule => None,
            PayoffPlan::Settled => Some(0),
            PayoffPlan::Single { .. } => Some(1),
            PayoffPlan::Installments { full_payments, .. } => Some(full_payments + 1),
        }
    }

    /// Total of all scheduled payments
    ///
    /// Always equals the balance the plan was built from: the schedule
    /// neither overstates nor understates the debt.
    pub fn total_scheduled(&self) -> Money {
        match self {
            PayoffPlan::NoSchedule | PayoffPlan::Settled => Money::zero(),
            PayoffPlan::Single { payment } => *payment,
            PayoffPlan::Installments {
                full_payments,
                payment,
                final_payment,
            } => payment.scale(*full_payments as i64) + *final_payment,
        }
    }
}

/// Number of payments needed to retire `balance` at `monthly_payment`
///
/// `None` ("unknown") when the payment is absent, zero, or negative —
/// distinct from `Some(0)`, which means the balance is already retired.
pub fn term_count(balance: Money, monthly_payment: Option<Money>) -> Option<u64> {
    let payment = monthly_payment.filter(|p| p.is_positive())?;
    if balance.is_zero() {
        return Some(0);
    }
    Some(ceil_div(balance, payment))
}

/// The closing payment of the schedule
///
/// Equal to the regular payment when the balance divides evenly, otherwise
/// the remainder that finishes the debt.
///
/// # Panics
///
/// Panics if `monthly_payment` is zero. Callers check for a positive
/// payment first; [`PayoffPlan::new`] does this for them.
pub fn final_payment(balance: Money, monthly_payment: Money) -> Money {
    let remainder = balance.remainder(monthly_payment);
    if remainder.is_zero() {
        monthly_payment
    } else {
        remainder
    }
}

/// Apply a payment to a balance, clamping at zero
///
/// Overpayment is absorbed: the result is never negative and no credit is
/// produced. A zero or negative payment is rejected.
pub fn apply_payment(balance: Money, payment: Money) -> OutlayResult<Money> {
    if !payment.is_positive() {
        return Err(OutlayError::InvalidPayment(payment.to_string()));
    }
    Ok(std::cmp::max(balance - payment, Money::zero()))
}

fn ceil_div(balance: Money, payment: Money) -> u64 {
    let b = balance.cents();
    let p = payment.cents();
    ((b + p - 1) / p) as u64
}
