//! Income CLI commands
//!
//! The expected monthly income is one optional figure, not a collection.
//! Clearing it is different from setting it to zero: with no income set the
//! summary suppresses the disposable-income line entirely.

use clap::Subcommand;

use crate::config::Settings;
use crate::engine;
use crate::error::OutlayResult;
use crate::services::{self, IncomeService};
use crate::storage::Store;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the expected monthly income
    Set {
        /// Income amount (e.g. "4000" or "4000.00")
        amount: String,
    },

    /// Show the expected monthly income and what it leaves over
    Show,

    /// Clear the expected monthly income
    Clear,
}

/// Handle an income command
pub fn handle_income_command(
    store: &mut Store,
    settings: &Settings,
    cmd: IncomeCommands,
) -> OutlayResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = services::parse_non_negative_amount(&amount, settings)?;

            let mut service = IncomeService::new(store);
            service.set(amount)?;

            println!(
                "Set expected monthly income to {}.",
                amount.format_with_symbol(symbol)
            );

            let summary = engine::summarize(
                &store.portfolio().expenses,
                &store.portfolio().debts,
                store.portfolio().monthly_income,
            );
            if let Some(disposable) = summary.disposable_income {
                if disposable.is_negative() {
                    println!(
                        "Warning: expenses and debt service exceed income by {}.",
                        disposable.abs().format_with_symbol(symbol)
                    );
                } else {
                    println!(
                        "Disposable income after expenses and debt service: {}",
                        disposable.format_with_symbol(symbol)
                    );
                }
            }
        }

        IncomeCommands::Show => {
            let portfolio = store.portfolio();
            match portfolio.monthly_income {
                Some(income) => {
                    let summary = engine::summarize(
                        &portfolio.expenses,
                        &portfolio.debts,
                        portfolio.monthly_income,
                    );
                    println!(
                        "Expected monthly income: {}",
                        income.format_with_symbol(symbol)
                    );
                    println!(
                        "Monthly expenses:        {}",
                        summary.monthly_expenses.format_with_symbol(symbol)
                    );
                    println!(
                        "Monthly debt service:    {}",
                        summary.monthly_debt_service.format_with_symbol(symbol)
                    );
                    if let Some(disposable) = summary.disposable_income {
                        println!(
                            "Disposable income:       {}",
                            disposable.format_with_symbol(symbol)
                        );
                    }
                }
                None => {
                    println!("No expected income set.");
                    println!("Use 'outlay income set <amount>' to set one.");
                }
            }
        }

        IncomeCommands::Clear => {
            let mut service = IncomeService::new(store);
            match service.clear()? {
                Some(previous) => println!(
                    "Cleared expected monthly income (was {}).",
                    previous.format_with_symbol(symbol)
                ),
                None => println!("No expected income was set."),
            }
        }
    }

    Ok(())
}
