//! Debt payoff report
//!
//! Renders the payoff plan for one debt. The four plan cases read
//! differently on purpose: "no schedule" must never look like "paid off".

use crate::engine::PayoffPlan;
use crate::models::Debt;

/// Payoff report for a single debt
#[derive(Debug, Clone)]
pub struct PayoffReport {
    pub debt: Debt,
    pub plan: PayoffPlan,
}

impl PayoffReport {
    /// Build the report for a debt
    pub fn generate(debt: Debt) -> Self {
        let plan = PayoffPlan::new(debt.balance, debt.monthly_payment);
        Self { debt, plan }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Payoff plan for {}\n", self.debt.name));
        output.push_str(&"-".repeat(48));
        output.push('\n');
        output.push_str(&format!(
            "Outstanding balance: {}\n",
            self.debt.balance.format_with_symbol(symbol)
        ));

        match self.plan {
            PayoffPlan::NoSchedule => {
                output.push_str("No monthly payment configured; payoff unknown.\n");
                output.push_str("Set one with 'outlay debt edit --payment <amount>'.\n");
            }
            PayoffPlan::Settled => {
                output.push_str("This debt is fully paid off.\n");
            }
            PayoffPlan::Single { payment } => {
                output.push_str(&format!(
                    "One final payment of {} clears this debt.\n",
                    payment.format_with_symbol(symbol)
                ));
            }
            PayoffPlan::Installments {
                full_payments,
                payment,
                final_payment,
            } => {
                output.push_str(&format!(
                    "{} payments of {}, then 1 payment of {}\n",
                    full_payments,
                    payment.format_with_symbol(symbol),
                    final_payment.format_with_symbol(symbol),
                ));
                output.push_str(&format!(
                    "Total payments remaining: {}\n",
                    full_payments + 1
                ));
            }
        }

        output
    }
}
