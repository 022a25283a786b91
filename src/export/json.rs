//! JSON snapshot export

use std::io::Write;

use super::Snapshot;
use crate::error::{OutlayError, OutlayResult};

/// Write a snapshot as pretty-printed JSON
pub fn write_snapshot<W: Write>(snapshot: &Snapshot, writer: &mut W) -> OutlayResult<()> {
    serde_json::to_writer_pretty(writer, snapshot)
        .map_err(|e| OutlayError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Frequency, Money, Portfolio};

    #[test]
    fn test_json_snapshot_contains_summary() {
        let mut portfolio = Portfolio::default();
        portfolio.expenses.push(Expense::new(
            "Netflix",
            Money::from_cents(1599),
            Frequency::Monthly,
        ));

        let snapshot = Snapshot::from_portfolio(&portfolio);
        let mut out = Vec::new();
        write_snapshot(&snapshot, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["schema_version"], "1.0.0");
        assert_eq!(value["summary"]["yearly_expenses"], 19188);
        assert_eq!(value["portfolio"]["expenses"][0]["name"], "Netflix");
        // unset income is omitted, not zero
        assert!(value["summary"]["disposable_income"].is_null());
    }
}
