//! Debt model
//!
//! A debt is an outstanding balance that may have a fixed monthly payment
//! configured. The balance never goes negative: recording a payment clamps
//! at zero and overpayment is absorbed. A debt without a positive monthly
//! payment has no computable payoff schedule, which is an expected state,
//! not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::DebtId;
use super::money::Money;

/// Validation errors for debts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    EmptyName,
    NegativeBalance,
}

impl std::fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Debt name cannot be empty"),
            Self::NegativeBalance => write!(f, "Debt balance cannot be negative"),
        }
    }
}

impl std::error::Error for DebtValidationError {}

/// An outstanding debt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    pub name: String,
    /// Outstanding principal; invariant: never negative
    pub balance: Money,
    /// Fixed monthly payment, if one is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<Money>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Debt {
    /// Create a new active debt without a payment schedule
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        let now = Utc::now();
        Self {
            id: DebtId::new(),
            name: name.into(),
            balance,
            monthly_payment: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new debt with a fixed monthly payment
    pub fn with_monthly_payment(
        name: impl Into<String>,
        balance: Money,
        monthly_payment: Money,
    ) -> Self {
        let mut debt = Self::new(name, balance);
        debt.monthly_payment = Some(monthly_payment);
        debt
    }

    /// The monthly payment, if configured and positive
    ///
    /// A zero or negative configured payment is treated the same as no
    /// payment at all: no schedule can be computed from it.
    pub fn effective_monthly_payment(&self) -> Option<Money> {
        self.monthly_payment.filter(|p| p.is_positive())
    }

    /// Whether the balance has been fully paid down
    pub fn is_settled(&self) -> bool {
        self.balance.is_zero()
    }

    /// Set the outstanding balance
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
        self.updated_at = Utc::now();
    }

    /// Set or clear the monthly payment
    pub fn set_monthly_payment(&mut self, payment: Option<Money>) {
        self.monthly_payment = payment;
        self.updated_at = Utc::now();
    }

    /// Rename the debt
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Toggle the soft-disable flag
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.updated_at = Utc::now();
    }

    /// Validate the debt
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.name.trim().is_empty() {
            return Err(DebtValidationError::EmptyName);
        }
        if self.balance.is_negative() {
            return Err(DebtValidationError::NegativeBalance);
        }
        Ok(())
    }
}
