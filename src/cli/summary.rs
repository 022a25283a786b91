//! Summary CLI command

use crate::config::Settings;
use crate::error::OutlayResult;
use crate::reports::OverviewReport;
use crate::storage::Store;

/// Print the portfolio overview
pub fn handle_summary_command(store: &Store, settings: &Settings) -> OutlayResult<()> {
    let portfolio = store.portfolio();

    if portfolio.expenses.is_empty() && portfolio.debts.is_empty() {
        println!("Nothing tracked yet.");
        println!("Add an expense with 'outlay expense add <name> <amount>'.");
        return Ok(());
    }

    let report = OverviewReport::generate(portfolio);
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}
