//! Interactive menu
//!
//! Draws the main menu, reads a selection, runs the matching ledger
//! operation and waits for Enter before drawing the menu again. Errors from
//! an operation are printed and the loop carries on; only Exit (or the end
//! of input) leaves it.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::transaction::{format_ledger, format_transaction_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, TransactionKind};
use crate::reports::FinancialSummary;
use crate::services::search::{search, SearchCriteria, SearchMode};
use crate::services::transaction::{
    CreateTransactionInput, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

use super::prompt::Console;

const KIND_PROMPT: &str = "Enter type (I for Income, E for Expense): ";

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Summary,
    Search,
    Delete,
    Edit,
    Exit,
}

impl MenuChoice {
    /// Entries in the order they are listed
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Summary,
        MenuChoice::Search,
        MenuChoice::Delete,
        MenuChoice::Edit,
        MenuChoice::Exit,
    ];

    /// Parse a numeric menu selection
    pub fn parse(input: &str) -> LedgerResult<Self> {
        let input = input.trim();
        let number: u8 = input
            .parse()
            .map_err(|_| LedgerError::InvalidChoice(input.to_string()))?;

        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| LedgerError::InvalidChoice(input.to_string()))
    }

    /// Number the user types to pick this entry
    pub const fn number(&self) -> u8 {
        match self {
            Self::Add => 1,
            Self::View => 2,
            Self::Summary => 3,
            Self::Search => 4,
            Self::Delete => 5,
            Self::Edit => 6,
            Self::Exit => 0,
        }
    }

    /// Menu label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add Transaction",
            Self::View => "View All Transactions",
            Self::Summary => "Financial Summary",
            Self::Search => "Search Transactions",
            Self::Delete => "Delete Transaction",
            Self::Edit => "Edit Transaction",
            Self::Exit => "Exit",
        }
    }
}

/// The interactive menu controller
pub struct Menu<'a, R, W> {
    console: Console<R, W>,
    storage: &'a Storage,
    settings: &'a Settings,
    ledger: Ledger,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu over a loaded ledger
    pub fn new(
        storage: &'a Storage,
        settings: &'a Settings,
        ledger: Ledger,
        input: R,
        output: W,
    ) -> Self {
        Self {
            console: Console::new(input, output),
            storage,
            settings,
            ledger,
        }
    }

    /// Hand back the ledger and the output writer
    pub fn into_parts(self) -> (Ledger, W) {
        let (_, output) = self.console.into_inner();
        (self.ledger, output)
    }

    /// Run the menu loop until Exit or end of input
    ///
    /// Only console I/O failures end the loop with an error.
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            self.show_menu()?;

            let Some(line) = self.console.read_line()? else {
                self.console.println("")?;
                return self.farewell();
            };

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::Exit) => return self.farewell(),
                Ok(choice) => match self.dispatch(choice) {
                    Err(e @ LedgerError::Io(_)) => return Err(e),
                    Err(e) => self.console.println(&e.to_string())?,
                    Ok(()) => {}
                },
                Err(e) => self.console.println(&e.to_string())?,
            }

            self.console.print("\nPress Enter to continue...")?;
            if self.console.read_line()?.is_none() {
                self.console.println("")?;
                return self.farewell();
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> LedgerResult<()> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::View => self.view(),
            MenuChoice::Summary => self.summary(),
            MenuChoice::Search => self.search(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> LedgerResult<()> {
        self.console.println("")?;
        self.console
            .println("*********************************************")?;
        self.console
            .println("* E-Commerce Financial Management System    *")?;
        self.console
            .println("*********************************************")?;
        self.console.println("\nMain Menu")?;
        for choice in MenuChoice::ALL {
            self.console
                .println(&format!("{}. {}", choice.number(), choice.label()))?;
        }
        self.console.print("Enter your choice: ")
    }

    fn farewell(&mut self) -> LedgerResult<()> {
        self.console.println("Exiting system. Goodbye!")
    }

    fn add(&mut self) -> LedgerResult<()> {
        TransactionService::new(self.storage, &mut self.ledger).ensure_can_add()?;

        let description = self.console.prompt_line("Enter description: ")?;
        let amount = self.console.prompt_amount("Enter amount: ")?;
        let kind_input = self.console.prompt_line(KIND_PROMPT)?;
        let kind = TransactionKind::parse(&kind_input)?;

        TransactionService::new(self.storage, &mut self.ledger).create(
            CreateTransactionInput {
                date: None,
                description,
                amount,
                kind,
            },
        )?;

        self.console.println("Transaction added successfully!")
    }

    fn view(&mut self) -> LedgerResult<()> {
        let listing = format_ledger(&self.ledger, self.settings);
        self.console.print(&listing)
    }

    fn summary(&mut self) -> LedgerResult<()> {
        let summary = FinancialSummary::generate(&self.ledger);
        self.console
            .print(&summary.format_terminal(&self.settings.currency_symbol))
    }

    fn search(&mut self) -> LedgerResult<()> {
        if self.ledger.is_empty() {
            return self.console.println("No transactions to search.");
        }

        self.console.println("\nSearch by:")?;
        for (number, mode) in (1..).zip(SearchMode::ALL) {
            self.console
                .println(&format!("{}. {}", number, mode.label()))?;
        }
        let choice = self.console.prompt_line("Enter your choice: ")?;
        let mode = SearchMode::from_choice(&choice)?;

        let criteria = match mode {
            SearchMode::Description => SearchCriteria::Description(
                self.console.prompt_line("Enter description to search: ")?,
            ),
            SearchMode::Date => SearchCriteria::Date(
                self.console
                    .prompt_string("Enter date (YYYY-MM-DD) to search: ")?,
            ),
            SearchMode::AmountRange => SearchCriteria::AmountRange {
                min: self.console.prompt_amount("Enter minimum amount: ")?,
                max: self.console.prompt_amount("Enter maximum amount: ")?,
            },
            SearchMode::Kind => {
                let input = self.console.prompt_line(KIND_PROMPT)?;
                SearchCriteria::Kind(TransactionKind::parse(&input)?)
            }
        };

        let matches = search(&self.ledger, &criteria);
        if matches.is_empty() {
            return self
                .console
                .println("No transactions found matching your criteria.");
        }

        let table = format_transaction_table(matches, self.settings);
        self.console.print(&table)
    }

    fn delete(&mut self) -> LedgerResult<()> {
        if self.ledger.is_empty() {
            return self.console.println("No transactions to delete.");
        }

        self.view()?;
        let id = self.prompt_id("Enter ID of transaction to delete: ")?;

        TransactionService::new(self.storage, &mut self.ledger).delete(id)?;
        self.console.println("Transaction deleted successfully.")
    }

    fn edit(&mut self) -> LedgerResult<()> {
        if self.ledger.is_empty() {
            return self.console.println("No transactions to edit.");
        }

        self.view()?;
        let id = self.prompt_id("Enter ID of transaction to edit: ")?;
        let current = self
            .ledger
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::not_found(id))?;

        let description = self.console.prompt_line(&format!(
            "Edit description (current: {}): ",
            current.description
        ))?;
        let amount = self
            .console
            .prompt_amount(&format!("Edit amount (current: {:.2}): ", current.amount))?;
        let kind_input = self
            .console
            .prompt_line(&format!("Edit type (current: {}): ", current.kind.code()))?;

        let kind = match TransactionKind::parse(&kind_input) {
            Ok(kind) => Some(kind),
            Err(_) => {
                self.console
                    .println("Invalid transaction type. Keeping previous value.")?;
                None
            }
        };

        TransactionService::new(self.storage, &mut self.ledger).update(
            id,
            UpdateTransactionInput {
                description,
                amount,
                kind,
            },
        )?;

        self.console.println("Transaction updated successfully.")
    }

    fn prompt_id(&mut self, prompt: &str) -> LedgerResult<u32> {
        let input = self.console.prompt_string(prompt)?;
        input
            .parse()
            .map_err(|_| LedgerError::InvalidChoice(input.clone()))
    }
}
