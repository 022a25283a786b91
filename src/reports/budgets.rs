//! Budget overview report

use std::io::Write;

use crate::error::OutlayResult;
use crate::models::{Budget, Money, Portfolio};

/// A row per budget with derived spent/remaining figures
#[derive(Debug, Clone)]
pub struct BudgetRow {
    pub name: String,
    pub total: Money,
    pub spent: Money,
    pub remaining: Money,
    pub line_count: usize,
}

impl BudgetRow {
    fn from_budget(budget: &Budget) -> Self {
        Self {
            name: budget.name.clone(),
            total: budget.total,
            spent: budget.spent(),
            remaining: budget.remaining(),
            line_count: budget.line_items.len(),
        }
    }

    /// Check if this budget is overspent
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget overview across the portfolio
#[derive(Debug, Clone)]
pub struct BudgetReport {
    pub rows: Vec<BudgetRow>,
    pub total_planned: Money,
    pub total_spent: Money,
}

impl BudgetReport {
    /// Build the report from the current portfolio
    pub fn generate(portfolio: &Portfolio) -> Self {
        let rows: Vec<BudgetRow> = portfolio.budgets.iter().map(BudgetRow::from_budget).collect();
        let total_planned = rows.iter().map(|r| r.total).sum();
        let total_spent = rows.iter().map(|r| r.spent).sum();

        Self {
            rows,
            total_planned,
            total_spent,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Budgets\n");
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12}\n",
            "Name", "Planned", "Spent", "Remaining"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            let remaining_display = if row.is_overspent() {
                format!("{} *", row.remaining.format_with_symbol(symbol))
            } else {
                row.remaining.format_with_symbol(symbol)
            };
            output.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>12}\n",
                row.name,
                row.total.format_with_symbol(symbol),
                row.spent.format_with_symbol(symbol),
                remaining_display,
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>12}\n",
            "TOTAL",
            self.total_planned.format_with_symbol(symbol),
            self.total_spent.format_with_symbol(symbol),
        ));

        if self.rows.iter().any(|r| r.is_overspent()) {
            output.push_str("\n* = Overspent\n");
        }

        output
    }

    /// Export the rows to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> OutlayResult<()> {
        writeln!(writer, "Name,Planned,Spent,Remaining,LineItems")
            .map_err(|e| crate::error::OutlayError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2},{}",
                row.name,
                row.total.cents() as f64 / 100.0,
                row.spent.cents() as f64 / 100.0,
                row.remaining.cents() as f64 / 100.0,
                row.line_count,
            )
            .map_err(|e| crate::error::OutlayError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
