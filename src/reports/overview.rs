//! Portfolio overview report
//!
//! The main rollup: the aggregate summary plus per-record derived rows for
//! display. Per-item monthly figures come from the same engine conversion
//! as the aggregate totals.

use std::io::Write;

use crate::engine::{self, PayoffPlan, Summary};
use crate::error::OutlayResult;
use crate::models::{Frequency, Money, Portfolio};

/// A display row for a single expense
#[derive(Debug, Clone)]
pub struct ExpenseRow {
    pub name: String,
    pub category: Option<String>,
    pub amount: Money,
    pub frequency: Frequency,
    pub active: bool,
    /// Engine-derived monthly equivalent
    pub monthly: Money,
    /// Engine-derived yearly equivalent
    pub yearly: Money,
}

/// A display row for a single debt
#[derive(Debug, Clone)]
pub struct DebtRow {
    pub name: String,
    pub balance: Money,
    pub monthly_payment: Option<Money>,
    pub active: bool,
    /// Remaining payments; `None` renders as "unknown", not as zero
    pub term_count: Option<u64>,
}

/// Portfolio overview: summary plus per-record rows
#[derive(Debug, Clone)]
pub struct OverviewReport {
    pub expenses: Vec<ExpenseRow>,
    pub debts: Vec<DebtRow>,
    pub summary: Summary,
}

impl OverviewReport {
    /// Build the report from the current portfolio
    pub fn generate(portfolio: &Portfolio) -> Self {
        let expenses = portfolio
            .expenses
            .iter()
            .map(|e| ExpenseRow {
                name: e.name.clone(),
                category: e.category.clone(),
                amount: e.amount,
                frequency: e.frequency,
                active: e.active,
                monthly: engine::monthly_equivalent(e.amount, e.frequency),
                yearly: engine::annualize(e.amount, e.frequency),
            })
            .collect();

        let debts = portfolio
            .debts
            .iter()
            .map(|d| DebtRow {
                name: d.name.clone(),
                balance: d.balance,
                monthly_payment: d.monthly_payment,
                active: d.active,
                term_count: PayoffPlan::new(d.balance, d.monthly_payment).term_count(),
            })
            .collect();

        let summary = engine::summarize(
            &portfolio.expenses,
            &portfolio.debts,
            portfolio.monthly_income,
        );

        Self {
            expenses,
            debts,
            summary,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Portfolio Overview\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if !self.expenses.is_empty() {
            output.push_str(&format!(
                "\n{:<24} {:>12} {:<12} {:>10} {:>10}\n",
                "Expense", "Amount", "Frequency", "Monthly", "Yearly"
            ));
            output.push_str(&"-".repeat(72));
            output.push('\n');

            for row in &self.expenses {
                let marker = if row.active { "" } else { " (paused)" };
                output.push_str(&format!(
                    "{:<24} {:>12} {:<12} {:>10} {:>10}\n",
                    format!("{}{}", row.name, marker),
                    row.amount.format_with_symbol(symbol),
                    row.frequency.to_string(),
                    row.monthly.format_with_symbol(symbol),
                    row.yearly.format_with_symbol(symbol),
                ));
            }
        }

        if !self.debts.is_empty() {
            output.push_str(&format!(
                "\n{:<24} {:>12} {:>12} {:>12}\n",
                "Debt", "Balance", "Monthly", "Terms left"
            ));
            output.push_str(&"-".repeat(72));
            output.push('\n');

            for row in &self.debts {
                let marker = if row.active { "" } else { " (paused)" };
                let payment = row
                    .monthly_payment
                    .map(|p| p.format_with_symbol(symbol))
                    .unwrap_or_else(|| "-".to_string());
                let terms = row
                    .term_count
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                output.push_str(&format!(
                    "{:<24} {:>12} {:>12} {:>12}\n",
                    format!("{}{}", row.name, marker),
                    row.balance.format_with_symbol(symbol),
                    payment,
                    terms,
                ));
            }
        }

        output.push('\n');
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12}\n",
            "Monthly expenses:",
            self.summary.monthly_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>12}\n",
            "Yearly expenses:",
            self.summary.yearly_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>12}\n",
            "Monthly debt service:",
            self.summary.monthly_debt_service.format_with_symbol(symbol)
        ));
        match self.summary.disposable_income {
            Some(disposable) => {
                output.push_str(&format!(
                    "{:<28} {:>12}\n",
                    "Disposable income:",
                    disposable.format_with_symbol(symbol)
                ));
            }
            None => {
                output.push_str("Disposable income:           (no income set)\n");
            }
        }

        output
    }

    /// Export the per-expense rows to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> OutlayResult<()> {
        writeln!(writer, "Name,Category,Amount,Frequency,Active,Monthly,Yearly")
            .map_err(|e| crate::error::OutlayError::Export(e.to_string()))?;

        for row in &self.expenses {
            writeln!(
                writer,
                "{},{},{:.2},{},{},{:.2},{:.2}",
                row.name,
                row.category.as_deref().unwrap_or(""),
                row.amount.cents() as f64 / 100.0,
                row.frequency,
                row.active,
                row.monthly.cents() as f64 / 100.0,
                row.yearly.cents() as f64 / 100.0,
            )
            .map_err(|e| crate::error::OutlayError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
