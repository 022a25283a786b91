//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::engine;
use crate::error::OutlayResult;
use crate::models::Frequency;
use crate::services::{self, ExpenseService};
use crate::storage::Store;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a recurring expense
    Add {
        /// Expense name
        name: String,

        /// Amount per occurrence (e.g. "15.99")
        amount: String,

        /// How often the expense recurs
        #[arg(short, long, default_value = "monthly")]
        frequency: String,

        /// Optional category label
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List expenses with monthly and yearly equivalents
    List,

    /// Edit an expense
    Edit {
        /// Expense name or ID
        expense: String,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New frequency
        #[arg(short, long)]
        frequency: Option<String>,

        /// New category label
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Pause an expense so it stops counting toward totals
    Pause {
        /// Expense name or ID
        expense: String,
    },

    /// Resume a paused expense
    Resume {
        /// Expense name or ID
        expense: String,
    },

    /// Delete an expense permanently
    Remove {
        /// Expense name or ID
        expense: String,
    },

    /// Import expenses from a CSV file (name,amount,frequency,category)
    Import {
        /// Path to CSV file
        file: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut Store,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> OutlayResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            frequency,
            category,
        } => {
            let amount = services::parse_non_negative_amount(&amount, settings)?;
            let frequency: Frequency = frequency.parse()?;

            let mut service = ExpenseService::new(store);
            let expense = service.add(&name, amount, frequency, category)?;

            println!(
                "Added expense '{}': {} {} ({} monthly)",
                expense.name,
                expense.amount.format_with_symbol(symbol),
                expense.frequency,
                engine::monthly_equivalent(expense.amount, expense.frequency)
                    .format_with_symbol(symbol),
            );
        }

        ExpenseCommands::List => {
            let service = ExpenseService::new(store);
            let expenses = service.list();

            if expenses.is_empty() {
                println!("No expenses tracked yet.");
                println!("Add one with 'outlay expense add <name> <amount>'.");
                return Ok(());
            }

            println!(
                "{:<24} {:>12} {:<12} {:>12} {:>12}",
                "Name", "Amount", "Frequency", "Monthly", "Yearly"
            );
            println!("{}", "-".repeat(76));
            for expense in expenses {
                let marker = if expense.active { "" } else { " (paused)" };
                println!(
                    "{:<24} {:>12} {:<12} {:>12} {:>12}",
                    format!("{}{}", expense.name, marker),
                    expense.amount.format_with_symbol(symbol),
                    expense.frequency.to_string(),
                    engine::monthly_equivalent(expense.amount, expense.frequency)
                        .format_with_symbol(symbol),
                    engine::annualize(expense.amount, expense.frequency)
                        .format_with_symbol(symbol),
                );
            }
        }

        ExpenseCommands::Edit {
            expense,
            amount,
            frequency,
            category,
        } => {
            let amount = amount
                .map(|raw| services::parse_non_negative_amount(&raw, settings))
                .transpose()?;
            let frequency = frequency.map(|raw| raw.parse::<Frequency>()).transpose()?;

            let mut service = ExpenseService::new(store);
            let updated = service.edit(&expense, amount, frequency, category)?;

            println!(
                "Updated expense '{}': {} {}",
                updated.name,
                updated.amount.format_with_symbol(symbol),
                updated.frequency,
            );
        }

        ExpenseCommands::Pause { expense } => {
            let mut service = ExpenseService::new(store);
            let updated = service.set_active(&expense, false)?;
            println!("Paused expense '{}'.", updated.name);
        }

        ExpenseCommands::Resume { expense } => {
            let mut service = ExpenseService::new(store);
            let updated = service.set_active(&expense, true)?;
            println!("Resumed expense '{}'.", updated.name);
        }

        ExpenseCommands::Remove { expense } => {
            let mut service = ExpenseService::new(store);
            let removed = service.remove(&expense)?;
            println!("Removed expense '{}'.", removed.name);
        }

        ExpenseCommands::Import { file } => {
            let mut service = ExpenseService::new(store);
            let imported = service.import_csv(std::path::Path::new(&file), settings)?;
            println!("Imported {} expense(s) from {}.", imported, file);
        }
    }

    Ok(())
}
