//! Portfolio storage
//!
//! A local JSON document store: the whole portfolio loads at startup and is
//! written back atomically after each mutation. Saves succeed or fail as a
//! unit; concurrent writers get last-write-wins at file granularity, with
//! no cross-save coordination.

pub mod file_io;

use crate::config::OutlayPaths;
use crate::error::OutlayResult;
use crate::models::Portfolio;

/// Owns the portfolio document and its on-disk location
#[derive(Debug)]
pub struct Store {
    paths: OutlayPaths,
    portfolio: Portfolio,
}

impl Store {
    /// Open the store, loading the portfolio (or an empty one if no file
    /// exists yet)
    pub fn open(paths: OutlayPaths) -> OutlayResult<Self> {
        let portfolio = file_io::load_json(paths.portfolio_file())?;
        Ok(Self { paths, portfolio })
    }

    /// Create a store over an already-built portfolio (useful for testing)
    pub fn with_portfolio(paths: OutlayPaths, portfolio: Portfolio) -> Self {
        Self { paths, portfolio }
    }

    /// Shared access to the portfolio
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Mutable access to the portfolio; call [`save`](Self::save) after
    /// mutating
    pub fn portfolio_mut(&mut self) -> &mut Portfolio {
        &mut self.portfolio
    }

    /// Persist the portfolio atomically
    pub fn save(&self) -> OutlayResult<()> {
        file_io::store_json(self.paths.portfolio_file(), &self.portfolio)
    }

    /// The paths this store reads and writes
    pub fn paths(&self) -> &OutlayPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Frequency, Money};
    use tempfile::TempDir;

    #[test]
    fn test_open_without_file_yields_empty_portfolio() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = Store::open(paths).unwrap();
        assert!(store.portfolio().expenses.is_empty());
        assert!(store.portfolio().monthly_income.is_none());
    }

    #[test]
    fn test_save_then_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut store = Store::open(paths.clone()).unwrap();
        store.portfolio_mut().expenses.push(Expense::new(
            "Rent",
            Money::from_cents(120000),
            Frequency::Monthly,
        ));
        store.portfolio_mut().monthly_income = Some(Money::from_cents(400000));
        store.save().unwrap();

        let reopened = Store::open(paths).unwrap();
        assert_eq!(reopened.portfolio().expenses.len(), 1);
        assert_eq!(reopened.portfolio().expenses[0].name, "Rent");
        assert_eq!(
            reopened.portfolio().monthly_income,
            Some(Money::from_cents(400000))
        );
    }

    #[test]
    fn test_last_write_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut first = Store::open(paths.clone()).unwrap();
        let mut second = Store::open(paths.clone()).unwrap();

        first.portfolio_mut().monthly_income = Some(Money::from_cents(100));
        first.save().unwrap();

        second.portfolio_mut().monthly_income = Some(Money::from_cents(200));
        second.save().unwrap();

        let reopened = Store::open(paths).unwrap();
        assert_eq!(
            reopened.portfolio().monthly_income,
            Some(Money::from_cents(200))
        );
    }
}
