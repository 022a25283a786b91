use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use outlay::cli::{
    handle_budget_command, handle_debt_command, handle_expense_command, handle_export_command,
    handle_income_command, handle_summary_command,
};
use outlay::config::{OutlayPaths, Settings};
use outlay::storage::Store;

#[derive(Parser)]
#[command(
    name = "outlay",
    author = "Marta Kovalenko",
    version,
    about = "Command-line personal finance tracker",
    long_about = "outlay tracks recurring expenses, debts, budgets, and income, \
                  and rolls them up into comparable monthly and yearly figures \
                  so you can see where the money actually goes."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(outlay::cli::ExpenseCommands),

    /// Debt management commands
    #[command(subcommand)]
    Debt(outlay::cli::DebtCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(outlay::cli::BudgetCommands),

    /// Expected monthly income commands
    #[command(subcommand)]
    Income(outlay::cli::IncomeCommands),

    /// Show the portfolio overview
    Summary,

    /// Export the portfolio snapshot
    Export {
        /// Output format: json, yaml, or csv
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = OutlayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Load the portfolio
    let mut store = Store::open(paths.clone())?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Debt(cmd)) => {
            handle_debt_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&store, &settings)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&store, &format, output)?;
        }
        Some(Commands::Init) => {
            println!("Initializing outlay at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            store.save()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  outlay expense add Rent 1200        track a monthly expense");
            println!("  outlay debt add \"Car Loan\" 8500     track a debt");
            println!("  outlay income set 4000              set expected income");
            println!("  outlay summary                      see the rollup");
        }
        Some(Commands::Config) => {
            println!("outlay Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Invalid input policy: {:?}", settings.invalid_input);
        }
        None => {
            println!("outlay - Command-line personal finance tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
            println!("Run 'outlay summary' to see your portfolio overview.");
        }
    }

    Ok(())
}
