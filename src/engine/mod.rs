//! The financial normalization and amortization engine
//!
//! Pure, synchronous functions over immutable inputs: no I/O, no shared
//! state, safe to call from anywhere. Normalization converts recurring
//! amounts to yearly/monthly equivalents, amortization describes debt
//! payoff schedules, and aggregation folds collections into portfolio
//! summaries.

pub mod aggregate;
pub mod amortize;
pub mod normalize;

pub use aggregate::{summarize, Summary};
pub use amortize::{apply_payment, final_payment, term_count, PayoffPlan};
pub use normalize::{annualize, monthly_equivalent};
