//! Debt CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::OutlayResult;
use crate::reports::PayoffReport;
use crate::services::{self, DebtService};
use crate::storage::Store;

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Add a debt
    Add {
        /// Debt name
        name: String,

        /// Outstanding balance (e.g. "8500")
        balance: String,

        /// Fixed monthly payment
        #[arg(short, long)]
        payment: Option<String>,
    },

    /// List debts with remaining term counts
    List,

    /// Edit a debt
    Edit {
        /// Debt name or ID
        debt: String,

        /// New outstanding balance
        #[arg(short, long)]
        balance: Option<String>,

        /// New monthly payment
        #[arg(short, long, conflicts_with = "clear_payment")]
        payment: Option<String>,

        /// Remove the configured monthly payment
        #[arg(long)]
        clear_payment: bool,
    },

    /// Record a payment against a debt (balance clamps at zero)
    Pay {
        /// Debt name or ID
        debt: String,

        /// Payment amount
        amount: String,
    },

    /// Show the payoff plan for a debt
    Payoff {
        /// Debt name or ID
        debt: String,
    },

    /// Pause a debt so it stops counting toward totals
    Pause {
        /// Debt name or ID
        debt: String,
    },

    /// Resume a paused debt
    Resume {
        /// Debt name or ID
        debt: String,
    },

    /// Delete a debt permanently
    Remove {
        /// Debt name or ID
        debt: String,
    },
}

/// Handle a debt command
pub fn handle_debt_command(
    store: &mut Store,
    settings: &Settings,
    cmd: DebtCommands,
) -> OutlayResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        DebtCommands::Add {
            name,
            balance,
            payment,
        } => {
            let balance = services::parse_non_negative_amount(&balance, settings)?;
            let payment = payment
                .map(|raw| services::parse_non_negative_amount(&raw, settings))
                .transpose()?;

            let mut service = DebtService::new(store);
            let debt = service.add(&name, balance, payment)?;

            println!(
                "Added debt '{}' with balance {}.",
                debt.name,
                debt.balance.format_with_symbol(symbol)
            );
            if debt.effective_monthly_payment().is_none() {
                println!("No monthly payment configured; payoff terms are unknown.");
            }
        }

        DebtCommands::List => {
            let service = DebtService::new(store);
            let debts = service.list();

            if debts.is_empty() {
                println!("No debts tracked. Long may it last.");
                return Ok(());
            }

            println!(
                "{:<24} {:>12} {:>12} {:>12}",
                "Name", "Balance", "Monthly", "Terms left"
            );
            println!("{}", "-".repeat(64));
            for debt in debts {
                let marker = if debt.active { "" } else { " (paused)" };
                let payment = debt
                    .monthly_payment
                    .map(|p| p.format_with_symbol(symbol))
                    .unwrap_or_else(|| "-".to_string());
                let terms = crate::engine::term_count(debt.balance, debt.monthly_payment)
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                println!(
                    "{:<24} {:>12} {:>12} {:>12}",
                    format!("{}{}", debt.name, marker),
                    debt.balance.format_with_symbol(symbol),
                    payment,
                    terms,
                );
            }
        }

        DebtCommands::Edit {
            debt,
            balance,
            payment,
            clear_payment,
        } => {
            let balance = balance
                .map(|raw| services::parse_non_negative_amount(&raw, settings))
                .transpose()?;
            let payment = if clear_payment {
                Some(None)
            } else {
                payment
                    .map(|raw| services::parse_non_negative_amount(&raw, settings))
                    .transpose()?
                    .map(Some)
            };

            let mut service = DebtService::new(store);
            let updated = service.edit(&debt, balance, payment)?;

            println!(
                "Updated debt '{}': balance {}.",
                updated.name,
                updated.balance.format_with_symbol(symbol)
            );
        }

        DebtCommands::Pay { debt, amount } => {
            let amount = services::parse_amount(&amount, settings)?;

            let mut service = DebtService::new(store);
            let receipt = service.record_payment(&debt, amount)?;

            println!(
                "Payment of {} applied: {} -> {}",
                amount.format_with_symbol(symbol),
                receipt.previous_balance.format_with_symbol(symbol),
                receipt.new_balance.format_with_symbol(symbol),
            );
            if receipt.applied() < amount {
                println!(
                    "Overpayment of {} was absorbed; the balance is settled.",
                    (amount - receipt.applied()).format_with_symbol(symbol)
                );
            }
        }

        DebtCommands::Payoff { debt } => {
            let service = DebtService::new(store);
            let (debt, _) = service.payoff_plan(&debt)?;
            let report = PayoffReport::generate(debt);
            print!("{}", report.format_terminal(symbol));
        }

        DebtCommands::Pause { debt } => {
            let mut service = DebtService::new(store);
            let updated = service.set_active(&debt, false)?;
            println!("Paused debt '{}'.", updated.name);
        }

        DebtCommands::Resume { debt } => {
            let mut service = DebtService::new(store);
            let updated = service.set_active(&debt, true)?;
            println!("Resumed debt '{}'.", updated.name);
        }

        DebtCommands::Remove { debt } => {
            let mut service = DebtService::new(store);
            let removed = service.remove(&debt)?;
            println!("Removed debt '{}'.", removed.name);
        }
    }

    Ok(())
}
