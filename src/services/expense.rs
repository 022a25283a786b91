//! Expense service
//!
//! Create, edit, pause, and remove recurring expenses, plus CSV import.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{InvalidInputPolicy, Settings};
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Expense, Frequency, Money};
use crate::storage::Store;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut Store,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Add a new expense
    ///
    /// Names must be unique (case-insensitive) so records can be addressed
    /// by name from the command line.
    pub fn add(
        &mut self,
        name: &str,
        amount: Money,
        frequency: Frequency,
        category: Option<String>,
    ) -> OutlayResult<Expense> {
        if self.store.portfolio().find_expense(name).is_some() {
            return Err(OutlayError::Duplicate {
                entity_type: "Expense",
                identifier: name.to_string(),
            });
        }

        let mut expense = Expense::new(name, amount, frequency);
        expense.category = category;
        expense
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        info!(name = %expense.name, amount = %expense.amount, frequency = %expense.frequency, "adding expense");
        self.store.portfolio_mut().expenses.push(expense.clone());
        self.store.save()?;
        Ok(expense)
    }

    /// Edit an existing expense; `None` fields are left unchanged
    pub fn edit(
        &mut self,
        key: &str,
        amount: Option<Money>,
        frequency: Option<Frequency>,
        category: Option<String>,
    ) -> OutlayResult<Expense> {
        let expense = self
            .store
            .portfolio_mut()
            .find_expense_mut(key)
            .ok_or_else(|| OutlayError::expense_not_found(key))?;

        if let Some(amount) = amount {
            expense.set_amount(amount);
        }
        if let Some(frequency) = frequency {
            expense.set_frequency(frequency);
        }
        if let Some(category) = category {
            expense.set_category(Some(category));
        }

        expense
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        let updated = expense.clone();
        debug!(name = %updated.name, "edited expense");
        self.store.save()?;
        Ok(updated)
    }

    /// Soft-deactivate or reactivate an expense
    ///
    /// Paused expenses stay on file but contribute nothing to totals.
    pub fn set_active(&mut self, key: &str, active: bool) -> OutlayResult<Expense> {
        let expense = self
            .store
            .portfolio_mut()
            .find_expense_mut(key)
            .ok_or_else(|| OutlayError::expense_not_found(key))?;

        expense.set_active(active);
        let updated = expense.clone();
        info!(name = %updated.name, active, "toggled expense");
        self.store.save()?;
        Ok(updated)
    }

    /// Hard-delete an expense
    pub fn remove(&mut self, key: &str) -> OutlayResult<Expense> {
        let removed = self
            .store
            .portfolio_mut()
            .remove_expense(key)
            .ok_or_else(|| OutlayError::expense_not_found(key))?;

        info!(name = %removed.name, "removed expense");
        self.store.save()?;
        Ok(removed)
    }

    /// All expenses, active and paused
    pub fn list(&self) -> &[Expense] {
        &self.store.portfolio().expenses
    }

    /// Import expenses from a CSV file with `name,amount,frequency,category`
    /// columns (category optional)
    ///
    /// Under the strict input policy a malformed row aborts the import.
    /// Under the zero-coercion policy malformed amounts coerce to zero and
    /// rows that are unusable for other reasons (bad frequency, missing
    /// name) are skipped with a warning. Returns the number of imported
    /// records.
    pub fn import_csv(&mut self, path: &Path, settings: &Settings) -> OutlayResult<usize> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| OutlayError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

        let mut imported = 0;
        for (line, record) in reader.records().enumerate() {
            let record =
                record.map_err(|e| OutlayError::Import(format!("Row {}: {}", line + 2, e)))?;

            match self.parse_row(&record, settings) {
                Ok((name, amount, frequency, category)) => {
                    self.add(&name, amount, frequency, category)?;
                    imported += 1;
                }
                Err(err) if settings.invalid_input == InvalidInputPolicy::Zero => {
                    warn!(row = line + 2, error = %err, "skipping malformed import row");
                }
                Err(err) => {
                    return Err(OutlayError::Import(format!("Row {}: {}", line + 2, err)));
                }
            }
        }

        info!(count = imported, file = %path.display(), "imported expenses");
        Ok(imported)
    }

    fn parse_row(
        &self,
        record: &csv::StringRecord,
        settings: &Settings,
    ) -> OutlayResult<(String, Money, Frequency, Option<String>)> {
        let name = record
            .get(0)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| OutlayError::Import("missing name column".into()))?;
        let raw_amount = record
            .get(1)
            .ok_or_else(|| OutlayError::Import("missing amount column".into()))?;
        let raw_frequency = record
            .get(2)
            .ok_or_else(|| OutlayError::Import("missing frequency column".into()))?;

        let amount = super::parse_non_negative_amount(raw_amount, settings)?;
        let frequency: Frequency = raw_frequency.parse()?;
        let category = record.get(3).filter(|c| !c.is_empty()).map(String::from);

        Ok((name.to_string(), amount, frequency, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutlayPaths;
    use std::io::Write as _;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::open(paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, mut store) = test_store();
        let mut service = ExpenseService::new(&mut store);

        service
            .add("Rent", Money::from_cents(120000), Frequency::Monthly, None)
            .unwrap();
        service
            .add(
                "Netflix",
                Money::from_cents(1599),
                Frequency::Monthly,
                Some("Entertainment".into()),
            )
            .unwrap();

        assert_eq!(service.list().len(), 2);
    }

    #[test]
    fn test_add_duplicate_name_rejected() {
        let (_temp_dir, mut store) = test_store();
        let mut service = ExpenseService::new(&mut store);

        service
            .add("Rent", Money::from_cents(120000), Frequency::Monthly, None)
            .unwrap();
        let err = service
            .add("rent", Money::from_cents(500), Frequency::Monthly, None)
            .unwrap_err();
        assert!(matches!(err, OutlayError::Duplicate { .. }));
    }

    #[test]
    fn test_edit_partial() {
        let (_temp_dir, mut store) = test_store();
        let mut service = ExpenseService::new(&mut store);

        service
            .add("Gym", Money::from_cents(4500), Frequency::Monthly, None)
            .unwrap();
        let updated = service
            .edit("Gym", Some(Money::from_cents(5000)), None, None)
            .unwrap();

        assert_eq!(updated.amount.cents(), 5000);
        assert_eq!(updated.frequency, Frequency::Monthly);
    }

    #[test]
    fn test_pause_and_remove() {
        let (_temp_dir, mut store) = test_store();
        let mut service = ExpenseService::new(&mut store);

        service
            .add("Gym", Money::from_cents(4500), Frequency::Monthly, None)
            .unwrap();

        let paused = service.set_active("Gym", false).unwrap();
        assert!(!paused.active);
        assert_eq!(service.list().len(), 1);

        service.remove("Gym").unwrap();
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_missing_expense_errors() {
        let (_temp_dir, mut store) = test_store();
        let mut service = ExpenseService::new(&mut store);

        assert!(service.edit("nope", None, None, None).is_err());
        assert!(service.remove("nope").is_err());
    }

    #[test]
    fn test_import_csv() {
        let (temp_dir, mut store) = test_store();
        let csv_path = temp_dir.path().join("expenses.csv");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(file, "name,amount,frequency,category").unwrap();
        writeln!(file, "Rent,1200.00,monthly,Housing").unwrap();
        writeln!(file, "Coffee,3.50,daily,").unwrap();
        drop(file);

        let mut service = ExpenseService::new(&mut store);
        let imported = service.import_csv(&csv_path, &Settings::default()).unwrap();
        assert_eq!(imported, 2);

        let coffee = store.portfolio().find_expense("Coffee").unwrap();
        assert_eq!(coffee.frequency, Frequency::Daily);
        assert!(coffee.category.is_none());
    }

    #[test]
    fn test_import_csv_strict_fails_on_bad_row() {
        let (temp_dir, mut store) = test_store();
        let csv_path = temp_dir.path().join("expenses.csv");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(file, "name,amount,frequency,category").unwrap();
        writeln!(file, "Rent,not-a-number,monthly,").unwrap();
        drop(file);

        let mut service = ExpenseService::new(&mut store);
        let err = service
            .import_csv(&csv_path, &Settings::default())
            .unwrap_err();
        assert!(matches!(err, OutlayError::Import(_)));
        assert!(store.portfolio().expenses.is_empty());
    }

    #[test]
    fn test_import_csv_lenient_skips_bad_rows() {
        let (temp_dir, mut store) = test_store();
        let csv_path = temp_dir.path().join("expenses.csv");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(file, "name,amount,frequency,category").unwrap();
        writeln!(file, "Rent,1200.00,fortnightly,").unwrap();
        writeln!(file, "Coffee,3.50,daily,").unwrap();
        drop(file);

        let settings = Settings {
            invalid_input: crate::config::InvalidInputPolicy::Zero,
            ..Settings::default()
        };

        let mut service = ExpenseService::new(&mut store);
        let imported = service.import_csv(&csv_path, &settings).unwrap();
        assert_eq!(imported, 1);
        assert!(store.portfolio().find_expense("Coffee").is_some());
        assert!(store.portfolio().find_expense("Rent").is_none());
    }
}
