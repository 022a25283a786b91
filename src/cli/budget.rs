//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::OutlayResult;
use crate::reports::BudgetReport;
use crate::services::{self, BudgetService};
use crate::storage::Store;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Add a budget
    Add {
        /// Budget name
        name: String,

        /// Planned total (e.g. "500")
        total: String,
    },

    /// List budgets with spent and remaining amounts
    List,

    /// Show one budget with its line items
    Show {
        /// Budget name or ID
        budget: String,
    },

    /// Change a budget's planned total
    SetTotal {
        /// Budget name or ID
        budget: String,

        /// New planned total
        total: String,
    },

    /// Add a line item to a budget
    LineAdd {
        /// Budget name or ID
        budget: String,

        /// Line item name
        name: String,

        /// Line item amount
        amount: String,
    },

    /// Remove a line item from a budget
    LineRemove {
        /// Budget name or ID
        budget: String,

        /// Line item name or ID
        line: String,
    },

    /// Delete a budget permanently
    Remove {
        /// Budget name or ID
        budget: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &mut Store,
    settings: &Settings,
    cmd: BudgetCommands,
) -> OutlayResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Add { name, total } => {
            let total = services::parse_non_negative_amount(&total, settings)?;

            let mut service = BudgetService::new(store);
            let budget = service.add(&name, total)?;

            println!(
                "Added budget '{}' with planned total {}.",
                budget.name,
                budget.total.format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            let report = BudgetReport::generate(store.portfolio());
            if report.rows.is_empty() {
                println!("No budgets yet.");
                println!("Add one with 'outlay budget add <name> <total>'.");
                return Ok(());
            }
            print!("{}", report.format_terminal(symbol));
        }

        BudgetCommands::Show { budget } => {
            let service = BudgetService::new(store);
            let budget = service.get(&budget)?;

            println!("Budget: {}", budget.name);
            println!("{}", "-".repeat(48));
            println!("Planned:   {}", budget.total.format_with_symbol(symbol));
            println!("Spent:     {}", budget.spent().format_with_symbol(symbol));
            let remaining = budget.remaining();
            if remaining.is_negative() {
                println!(
                    "Overspent: {}",
                    remaining.abs().format_with_symbol(symbol)
                );
            } else {
                println!("Remaining: {}", remaining.format_with_symbol(symbol));
            }

            if !budget.line_items.is_empty() {
                println!();
                for item in &budget.line_items {
                    println!(
                        "  {:<28} {:>12}",
                        item.name,
                        item.amount.format_with_symbol(symbol)
                    );
                }
            }
        }

        BudgetCommands::SetTotal { budget, total } => {
            let total = services::parse_non_negative_amount(&total, settings)?;

            let mut service = BudgetService::new(store);
            let updated = service.set_total(&budget, total)?;

            println!(
                "Budget '{}' planned total is now {}.",
                updated.name,
                updated.total.format_with_symbol(symbol)
            );
        }

        BudgetCommands::LineAdd {
            budget,
            name,
            amount,
        } => {
            let amount = services::parse_non_negative_amount(&amount, settings)?;

            let mut service = BudgetService::new(store);
            let updated = service.add_line_item(&budget, &name, amount)?;

            println!(
                "Added '{}' to budget '{}'. Remaining: {}",
                name,
                updated.name,
                updated.remaining().format_with_symbol(symbol)
            );
        }

        BudgetCommands::LineRemove { budget, line } => {
            let mut service = BudgetService::new(store);
            let updated = service.remove_line_item(&budget, &line)?;

            println!(
                "Removed '{}' from budget '{}'. Remaining: {}",
                line,
                updated.name,
                updated.remaining().format_with_symbol(symbol)
            );
        }

        BudgetCommands::Remove { budget } => {
            let mut service = BudgetService::new(store);
            let removed = service.remove(&budget)?;
            println!("Removed budget '{}'.", removed.name);
        }
    }

    Ok(())
}
