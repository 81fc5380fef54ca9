//! Interactive command-line front end
//!
//! A numbered main menu over the expense store, reading answers line by line.

pub mod add;
pub mod console;
pub mod menu;

pub use add::{prompt_for_expense, AddOutcome};
pub use console::Console;
pub use menu::{local_today, Menu, MenuChoice};
