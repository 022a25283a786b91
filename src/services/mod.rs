//! Business logic layer
//!
//! Services sit between the CLI and the store: they validate input, apply
//! mutations, persist the portfolio, and emit trace events. All derived
//! numbers come from the engine; services never do their own arithmetic on
//! amounts.

pub mod budget;
pub mod debt;
pub mod expense;
pub mod income;

pub use budget::BudgetService;
pub use debt::DebtService;
pub use expense::ExpenseService;
pub use income::IncomeService;

use tracing::warn;

use crate::config::{InvalidInputPolicy, Settings};
use crate::error::{OutlayError, OutlayResult};
use crate::models::Money;

/// Parse an amount from raw input, honoring the configured policy
///
/// Under [`InvalidInputPolicy::Reject`] a malformed amount is a typed
/// error. Under [`InvalidInputPolicy::Zero`] it coerces to zero with a
/// logged warning — the compatibility behavior for data sets that relied
/// on forgiving input handling.
pub fn parse_amount(raw: &str, settings: &Settings) -> OutlayResult<Money> {
    match raw.parse::<Money>() {
        Ok(amount) => Ok(amount),
        Err(parse_err) => match settings.invalid_input {
            InvalidInputPolicy::Reject => {
                Err(OutlayError::invalid_amount(raw, parse_err.to_string()))
            }
            InvalidInputPolicy::Zero => {
                warn!(input = raw, "coercing malformed amount to zero");
                Ok(Money::zero())
            }
        },
    }
}

/// Parse a non-negative amount from raw input
///
/// Same policy handling as [`parse_amount`], plus a validation error for
/// negative values (expense amounts, debt balances, and payments are all
/// non-negative by construction).
pub fn parse_non_negative_amount(raw: &str, settings: &Settings) -> OutlayResult<Money> {
    let amount = parse_amount(raw, settings)?;
    if amount.is_negative() {
        return Err(OutlayError::Validation(format!(
            "Amount cannot be negative: {}",
            raw
        )));
    }
    Ok(amount)
}
