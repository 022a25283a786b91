//! Reports over the portfolio
//!
//! Each report is generated from current records, formatted for the
//! terminal, and exportable where that makes sense. Reports never mutate
//! anything.

pub mod budgets;
pub mod overview;
pub mod payoff;

pub use budgets::BudgetReport;
pub use overview::OverviewReport;
pub use payoff::PayoffReport;
