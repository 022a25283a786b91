//! Core data models for outlay
//!
//! This module contains the data structures that represent the tracking
//! domain: recurring expenses, debts, budgets with line items, and the
//! portfolio document that holds them all.

pub mod budget;
pub mod debt;
pub mod expense;
pub mod frequency;
pub mod ids;
pub mod money;
pub mod portfolio;

pub use budget::{Budget, LineItem};
pub use debt::Debt;
pub use expense::Expense;
pub use frequency::Frequency;
pub use ids::{BudgetId, DebtId, ExpenseId, LineItemId};
pub use money::Money;
pub use portfolio::{Portfolio, PORTFOLIO_SCHEMA_VERSION};
