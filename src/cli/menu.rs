//! Main menu loop
//!
//! Shows the menu, reads one choice, runs it to completion and comes back.
//! Only `4` or the end of input leaves the loop.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::reports::{CategorySummary, ExpenseListing};
use crate::storage::ExpenseStore;

use super::add::{prompt_for_expense, AddOutcome};
use super::console::Console;

const MENU: &str = "\n========== Expense Tracker ==========\n\
                    1. Add a new expense\n\
                    2. List all expenses\n\
                    3. Show summary by category\n\
                    4. Exit\n\
                    =====================================\n";

/// A recognised menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ListExpenses,
    ShowSummary,
    Exit,
}

impl MenuChoice {
    /// Map a trimmed menu token to its choice
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::ListExpenses),
            "3" => Some(Self::ShowSummary),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive session over one store
pub struct Menu<R, W> {
    store: ExpenseStore,
    console: Console<R, W>,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: ExpenseStore, input: R, output: W) -> Self {
        Self {
            store,
            console: Console::new(input, output),
            today: local_today,
        }
    }

    /// Replace the clock used for the default entry date
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run until the user exits or input runs out
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.console.print(MENU)?;
            let Some(token) = self.console.prompt("Enter your choice (1-4): ")? else {
                log::debug!("Input closed at main menu");
                return Ok(());
            };

            match MenuChoice::from_token(&token) {
                Some(MenuChoice::AddExpense) => {
                    let outcome = prompt_for_expense(&mut self.console, &self.store, (self.today)())?;
                    if outcome == AddOutcome::EndOfInput {
                        log::debug!("Input closed during expense entry");
                        return Ok(());
                    }
                }
                Some(MenuChoice::ListExpenses) => self.list_expenses()?,
                Some(MenuChoice::ShowSummary) => self.show_summary()?,
                Some(MenuChoice::Exit) => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                None => self
                    .console
                    .say("Invalid choice. Please enter a number from 1 to 4.")?,
            }
        }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn list_expenses(&mut self) -> ExpenseResult<()> {
        self.console.say("")?;
        self.console.say("=== All Expenses ===")?;
        let listing = ExpenseListing::generate(&self.store)?;
        self.console.print(&listing.format_terminal())
    }

    fn show_summary(&mut self) -> ExpenseResult<()> {
        self.console.say("")?;
        self.console.say("=== Summary by Category ===")?;
        let summary = CategorySummary::generate(&self.store)?;
        if summary.skipped_rows > 0 {
            log::debug!("{} row(s) left out of the summary", summary.skipped_rows);
        }
        self.console.print(&summary.format_terminal())
    }
}

/// Today's date on the local clock
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn session(script: &str, store: &ExpenseStore) -> String {
        let mut menu = Menu::new(store.clone(), script.as_bytes(), Vec::new()).with_clock(fixed_today);
        menu.run().unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    fn store_in(dir: &TempDir) -> ExpenseStore {
        ExpenseStore::from(dir.path().join("expenses.csv"))
    }

    #[test]
    fn test_menu_tokens() {
        assert_eq!(MenuChoice::from_token("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::from_token("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_token("5"), None);
        assert_eq!(MenuChoice::from_token("exit"), None);
        assert_eq!(MenuChoice::from_token(""), None);
    }

    #[test]
    fn test_exit_says_goodbye() {
        let temp_dir = TempDir::new().unwrap();
        let output = session("4\n", &store_in(&temp_dir));

        assert!(output.starts_with(MENU));
        assert!(output.ends_with("Enter your choice (1-4): Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let temp_dir = TempDir::new().unwrap();
        let output = session("9\n4\n", &store_in(&temp_dir));

        assert!(output.contains("Invalid choice. Please enter a number from 1 to 4."));
        assert_eq!(output.matches("Expense Tracker").count(), 2);
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let output = session("", &store_in(&temp_dir));

        assert!(!output.contains("Goodbye!"));
        assert_eq!(output.matches("Expense Tracker").count(), 1);
    }

    #[test]
    fn test_empty_store_reports() {
        let temp_dir = TempDir::new().unwrap();
        let output = session("2\n3\n4\n", &store_in(&temp_dir));

        assert!(output.contains("=== All Expenses ===\nNo expenses recorded yet.\n"));
        assert!(output.contains("=== Summary by Category ===\nNo expenses recorded yet.\n"));
    }

    #[test]
    fn test_add_then_list_and_summarize() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let script = "1\n2024-01-15\nCoffee\nfood\n3.5\n\
                      1\n\nBus ticket\nTransport\n2.25\n\
                      1\n2024-01-16\nGroceries\nfood\n12\n\
                      2\n3\n4\n";

        let output = session(script, &store);

        assert_eq!(output.matches("Expense saved successfully!").count(), 3);
        assert!(output.contains(&format!(
            "{:<12} {:<25} {:<15} {:>10}",
            "2024-01-15", "Coffee", "food", "3.50"
        )));
        assert!(output.contains(&format!(
            "{:<12} {:<25} {:<15} {:>10}",
            "2024-03-09", "Bus ticket", "Transport", "2.25"
        )));

        let food = format!("{:<20} {:>12}", "food", "15.50");
        let transport = format!("{:<20} {:>12}", "Transport", "2.25");
        let food_at = output.find(&food).unwrap();
        let transport_at = output.find(&transport).unwrap();
        assert!(food_at < transport_at);
    }

    #[test]
    fn test_rejected_entry_returns_to_menu() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let output = session("1\n\nLunch\nfood\n0\n4\n", &store);

        assert!(output.contains("Amount must be positive.\n\n========== Expense Tracker"));
        assert!(output.ends_with("Goodbye!\n"));
        assert!(store.load_all().unwrap().is_empty());
    }
}
