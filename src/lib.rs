//! outlay - Command-line personal finance tracker
//!
//! This library provides the core functionality for the outlay finance
//! tracker: recurring expenses, debts with payoff schedules, budgets, and
//! portfolio-level summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `engine`: Pure normalization, amortization, and aggregation functions
//! - `models`: Core data models (expenses, debts, budgets, the portfolio)
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `storage`: JSON document storage with atomic writes
//! - `services`: Business logic layer
//! - `reports`: Terminal and CSV reports
//! - `export`: Portfolio snapshot export (JSON/YAML/CSV)
//! - `cli`: Command definitions and handlers
//!
//! The engine is deliberately free of I/O and shared state: every function
//! is a plain computation over its arguments, so anything derived from
//! records (monthly equivalents, payoff terms, disposable income) has
//! exactly one source of truth.
//!
//! # Example
//!
//! ```rust
//! use outlay::engine;
//! use outlay::models::{Frequency, Money};
//!
//! let monthly = engine::monthly_equivalent(Money::from_cents(350), Frequency::Daily);
//! assert_eq!(monthly.cents(), 10646); // $3.50/day is about $106.46/month
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{OutlayError, OutlayResult};
