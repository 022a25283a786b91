//! CSV snapshot export
//!
//! A flat record-per-row form for spreadsheets: expenses, debts, and
//! budgets share one sheet with a record-type column. Monetary values are
//! written with two decimal places.

use std::io::Write;

use super::Snapshot;
use crate::error::{OutlayError, OutlayResult};
use crate::models::Money;

fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.cents() as f64 / 100.0)
}

/// Write a snapshot as CSV
pub fn write_snapshot<W: Write>(snapshot: &Snapshot, writer: &mut W) -> OutlayResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "record_type",
            "name",
            "amount",
            "frequency",
            "active",
            "detail",
        ])
        .map_err(|e| OutlayError::Export(e.to_string()))?;

    for expense in &snapshot.portfolio.expenses {
        csv_writer
            .write_record([
                "expense",
                &expense.name,
                &decimal(expense.amount),
                expense.frequency.as_str(),
                &expense.active.to_string(),
                expense.category.as_deref().unwrap_or(""),
            ])
            .map_err(|e| OutlayError::Export(e.to_string()))?;
    }

    for debt in &snapshot.portfolio.debts {
        let payment = debt
            .monthly_payment
            .map(decimal)
            .unwrap_or_default();
        csv_writer
            .write_record([
                "debt",
                &debt.name,
                &decimal(debt.balance),
                "",
                &debt.active.to_string(),
                &payment,
            ])
            .map_err(|e| OutlayError::Export(e.to_string()))?;
    }

    for budget in &snapshot.portfolio.budgets {
        csv_writer
            .write_record([
                "budget",
                &budget.name,
                &decimal(budget.total),
                "",
                "",
                &decimal(budget.spent()),
            ])
            .map_err(|e| OutlayError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| OutlayError::Export(e.to_string()))?;
    Ok(())
}
