//! Menu choices offered by the shell

use std::fmt;

/// One entry of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCustomer,
    CreateAccount,
    Deposit,
    Withdraw,
    DisplayAccounts,
    DisplayTransactions,
    UpdateCustomerName,
    UpdateAccountNumber,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddCustomer,
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::DisplayAccounts,
        MenuChoice::DisplayTransactions,
        MenuChoice::UpdateCustomerName,
        MenuChoice::UpdateAccountNumber,
        MenuChoice::Exit,
    ];

    /// Number the user types to select this choice
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::AddCustomer => 1,
            MenuChoice::CreateAccount => 2,
            MenuChoice::Deposit => 3,
            MenuChoice::Withdraw => 4,
            MenuChoice::DisplayAccounts => 5,
            MenuChoice::DisplayTransactions => 6,
            MenuChoice::UpdateCustomerName => 7,
            MenuChoice::UpdateAccountNumber => 8,
            MenuChoice::Exit => 9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddCustomer => "Add Customer",
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::DisplayAccounts => "Display Accounts",
            MenuChoice::DisplayTransactions => "Display Transactions",
            MenuChoice::UpdateCustomerName => "Update Customer Name",
            MenuChoice::UpdateAccountNumber => "Update Account Number",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a typed menu selection
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything that
    /// is not one of the listed numbers.
    pub fn from_input(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
    }
}

/// The main menu banner
#[derive(Debug, Clone, Copy, Default)]
pub struct Menu;

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- Banking System Menu ---")?;
        for choice in MenuChoice::ALL {
            writeln!(f, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }
}
