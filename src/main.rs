use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use expense_tracker::cli::Menu;
use expense_tracker::config::ExpensePaths;
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records dated expenses in a CSV file and shows totals per \
                  category through an interactive menu."
)]
struct Cli {
    /// CSV file holding the expenses
    #[arg(short, long, env = "EXPENSES_FILE", value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let paths = ExpensePaths::new(cli.file)?;
    let store = ExpenseStore::new(paths);
    store
        .ensure_initialized()
        .with_context(|| format!("Failed to initialize {}", store.path().display()))?;

    let mut menu = Menu::new(store, io::stdin().lock(), io::stdout().lock());
    menu.run()?;

    Ok(())
}
