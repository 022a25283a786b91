//! Snapshot export
//!
//! Exports the full portfolio plus its computed summary with schema
//! versioning, so an export can be inspected, archived, or diffed without
//! the application. The summary is recomputed at export time; it is never
//! read back as authoritative data.

pub mod csv;
pub mod json;
pub mod yaml;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::{self, Summary};
use crate::error::OutlayResult;
use crate::models::Portfolio;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Output format for a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = crate::error::OutlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(crate::error::OutlayError::Export(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

/// Counts included for quick inspection of an export
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotMetadata {
    pub expense_count: usize,
    pub debt_count: usize,
    pub budget_count: usize,
}

/// A full portfolio snapshot
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The portfolio as stored
    pub portfolio: Portfolio,

    /// Summary computed from the portfolio at export time
    pub summary: Summary,

    /// Export metadata
    pub metadata: SnapshotMetadata,
}

impl Snapshot {
    /// Build a snapshot from the current portfolio
    pub fn from_portfolio(portfolio: &Portfolio) -> Self {
        let summary = engine::summarize(
            &portfolio.expenses,
            &portfolio.debts,
            portfolio.monthly_income,
        );

        let metadata = SnapshotMetadata {
            expense_count: portfolio.expenses.len(),
            debt_count: portfolio.debts.len(),
            budget_count: portfolio.budgets.len(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            portfolio: portfolio.clone(),
            summary,
            metadata,
        }
    }

    /// Write the snapshot in the requested format
    pub fn write<W: std::io::Write>(&self, format: ExportFormat, writer: &mut W) -> OutlayResult<()> {
        match format {
            ExportFormat::Json => json::write_snapshot(self, writer),
            ExportFormat::Yaml => yaml::write_snapshot(self, writer),
            ExportFormat::Csv => csv::write_snapshot(self, writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Frequency, Money};

    #[test]
    fn test_snapshot_metadata_and_summary() {
        let mut portfolio = Portfolio::default();
        portfolio.expenses.push(Expense::new(
            "Rent",
            Money::from_cents(120000),
            Frequency::Monthly,
        ));
        portfolio.monthly_income = Some(Money::from_cents(400000));

        let snapshot = Snapshot::from_portfolio(&portfolio);
        assert_eq!(snapshot.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(snapshot.metadata.expense_count, 1);
        assert_eq!(snapshot.metadata.debt_count, 0);
        assert_eq!(
            snapshot.summary.disposable_income,
            Some(Money::from_cents(280000))
        );
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("YAML".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
