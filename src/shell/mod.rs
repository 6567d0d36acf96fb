//! Interactive shell over the banking service
//!
//! The shell reads a menu choice, then one line per field the choice needs,
//! calls the matching `BankingService` operation and prints the outcome.
//!
//! # Error Handling
//!
//! - Ledger failures and unparsable amounts are printed as `Error: ...`
//!   and the loop resumes with the next menu choice
//! - End of input ends the session as if Exit had been chosen
//! - Read or write failures on the underlying streams are returned
//!
//! # Prompts
//!
//! With prompts enabled the menu banner and each field prompt are written
//! before input is read. Scripted sessions turn them off so the output
//! contains only results.

pub mod menu;

pub use menu::{Menu, MenuChoice};

use crate::core::BankingService;
use crate::io::LineReader;
use crate::types::ShellError;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Menu-driven session bound to a service, an input and an output
pub struct Shell<'a, R, W> {
    service: &'a mut BankingService,
    input: LineReader<R>,
    output: W,
    prompts: bool,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over the given service and streams
    ///
    /// # Arguments
    ///
    /// * `service` - The service every operation is applied to
    /// * `input` - Source of menu choices and field values
    /// * `output` - Destination for prompts and results
    /// * `prompts` - Whether to write the menu banner and field prompts
    pub fn new(
        service: &'a mut BankingService,
        input: LineReader<R>,
        output: W,
        prompts: bool,
    ) -> Self {
        Shell {
            service,
            input,
            output,
            prompts,
        }
    }

    /// Run the input loop until Exit is chosen or input runs out
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!(prompts = self.prompts, "session started");

        loop {
            if self.prompts {
                write!(self.output, "{}", Menu)?;
            }

            let line = match self.read_field("Enter your choice: ") {
                Ok(line) => line,
                Err(ShellError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::from_input(&line) else {
                debug!(input = %line, "unrecognised menu choice");
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting system. Goodbye!")?;
                break;
            }

            match self.execute(choice) {
                Ok(()) => {}
                Err(ShellError::EndOfInput) => break,
                Err(e) if e.is_recoverable() => {
                    warn!(?choice, error = %e, "operation rejected");
                    writeln!(self.output, "Error: {}", e)?;
                }
                Err(e) => return Err(e),
            }
            self.output.flush()?;
        }

        self.output.flush()?;
        info!(lines = self.input.line_number(), "session ended");
        Ok(())
    }

    /// Collect the fields for `choice`, apply it and report the outcome
    fn execute(&mut self, choice: MenuChoice) -> Result<(), ShellError> {
        match choice {
            MenuChoice::AddCustomer => {
                let name = self.read_field("Enter customer name: ")?;
                let customer_id = self.read_field("Enter customer ID: ")?;
                self.service.add_customer(name.as_str(), customer_id);
                writeln!(self.output, "Customer {} added successfully!", name)?;
            }
            MenuChoice::CreateAccount => {
                let customer_id = self.read_field("Enter customer ID: ")?;
                let account = self.read_field("Enter account number: ")?;
                let initial_balance =
                    self.read_amount("Enter initial balance: ", "initial balance")?;
                self.service
                    .create_account(&customer_id, account.as_str(), initial_balance)?;
                writeln!(self.output, "Account {} created successfully!", account)?;
            }
            MenuChoice::Deposit => {
                let customer_id = self.read_field("Enter customer ID: ")?;
                let account = self.read_field("Enter account number: ")?;
                let amount = self.read_amount("Enter deposit amount: ", "deposit amount")?;
                self.service
                    .perform_deposit(&customer_id, &account, amount)?;
                writeln!(self.output, "Deposit successful!")?;
            }
            MenuChoice::Withdraw => {
                let customer_id = self.read_field("Enter customer ID: ")?;
                let account = self.read_field("Enter account number: ")?;
                let amount =
                    self.read_amount("Enter withdrawal amount: ", "withdrawal amount")?;
                self.service
                    .perform_withdrawal(&customer_id, &account, amount)?;
                writeln!(self.output, "Withdrawal successful!")?;
            }
            MenuChoice::DisplayAccounts => {
                let customer_id = self.read_field("Enter customer ID: ")?;
                let listing = self.service.display_customer_accounts(&customer_id)?;
                write!(self.output, "{}", listing)?;
            }
            MenuChoice::DisplayTransactions => {
                let customer_id = self.read_field("Enter customer ID: ")?;
                let account = self.read_field("Enter account number: ")?;
                let history = self
                    .service
                    .display_account_transactions(&customer_id, &account)?;
                write!(self.output, "{}", history)?;
            }
            MenuChoice::UpdateCustomerName => {
                let customer_id = self.read_field("Enter customer ID: ")?;
                let new_name = self.read_field("Enter new customer name: ")?;
                self.service.update_customer_name(&customer_id, new_name)?;
                writeln!(self.output, "Customer name updated successfully!")?;
            }
            MenuChoice::UpdateAccountNumber => {
                let customer_id = self.read_field("Enter customer ID: ")?;
                let old_number = self.read_field("Enter old account number: ")?;
                let new_number = self.read_field("Enter new account number: ")?;
                self.service
                    .update_account_number(&customer_id, &old_number, new_number)?;
                writeln!(self.output, "Account number updated successfully!")?;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    /// Prompt for and read one line
    fn read_field(&mut self, prompt: &str) -> Result<String, ShellError> {
        if self.prompts {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        self.input.next().unwrap_or(Err(ShellError::EndOfInput))
    }

    /// Prompt for and parse a decimal amount
    ///
    /// Only the format is checked here; sign checks belong to the account.
    fn read_amount(&mut self, prompt: &str, field: &str) -> Result<Decimal, ShellError> {
        let line = self.read_field(prompt)?;
        let trimmed = line.trim();
        Decimal::from_str(trimmed).map_err(|_| ShellError::invalid_number(field, trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    /// Run a script without prompts and return the service and output
    fn run_script(script: &str) -> (BankingService, String) {
        let mut service = BankingService::new();
        let mut output = Vec::new();
        {
            let input = LineReader::new(Cursor::new(script.to_string()));
            let mut shell = Shell::new(&mut service, input, &mut output, false);
            shell.run().unwrap();
        }
        (service, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_customer_and_create_account() {
        let (service, output) = run_script("1\nAlice\nC1\n2\nC1\nA1\n100\n9\n");

        assert_eq!(
            output,
            "Customer Alice added successfully!\n\
             Account A1 created successfully!\n\
             Exiting system. Goodbye!\n"
        );
        let customer = service.customer("C1").unwrap();
        assert_eq!(customer.name(), "Alice");
        assert_eq!(customer.account("A1").unwrap().balance(), Decimal::new(100, 0));
    }

    #[test]
    fn test_failures_are_reported_and_loop_resumes() {
        let (service, output) =
            run_script("1\nAlice\nC1\n2\nC1\nA1\n100\n4\nC1\nA1\n200\n3\nC1\nA1\n-5\n3\nC1\nA1\n1\n");

        assert_eq!(
            output,
            "Customer Alice added successfully!\n\
             Account A1 created successfully!\n\
             Error: Insufficient balance in account A1: available 100, requested 200\n\
             Error: Deposit amount must be greater than zero (got -5)\n\
             Deposit successful!\n"
        );
        let account = service.customer("C1").unwrap().account("A1").unwrap();
        assert_eq!(account.balance(), Decimal::new(101, 0));
        assert_eq!(account.transactions().len(), 1);
    }

    #[rstest]
    #[case::unknown_customer("5\nC9\n", "Error: Customer 'C9' not found\n")]
    #[case::create_for_unknown_customer("2\nC9\nA1\n10\n", "Error: Customer 'C9' not found\n")]
    #[case::invalid_amount("3\nC1\nA1\nabc\n", "Error: Invalid deposit amount 'abc'\n")]
    #[case::invalid_choice("42\n", "Invalid choice. Please try again.\n")]
    #[case::non_numeric_choice("exit\n", "Invalid choice. Please try again.\n")]
    fn test_single_command_output(#[case] script: &str, #[case] expected: &str) {
        let (_, output) = run_script(script);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_end_of_input_mid_command_ends_session() {
        let (service, output) = run_script("1\nAlice\n");

        assert_eq!(output, "");
        assert!(service.customers().is_empty());
    }

    #[test]
    fn test_exit_stops_reading() {
        let (service, output) = run_script("9\n1\nAlice\nC1\n");

        assert_eq!(output, "Exiting system. Goodbye!\n");
        assert!(service.customers().is_empty());
    }

    #[test]
    fn test_prompts_and_menu_are_written_when_enabled() {
        let mut service = BankingService::new();
        let mut output = Vec::new();
        {
            let input = LineReader::new(Cursor::new("5\nC1\n9\n"));
            let mut shell = Shell::new(&mut service, input, &mut output, true);
            shell.run().unwrap();
        }
        let output = String::from_utf8(output).unwrap();

        let menu = Menu.to_string();
        assert_eq!(
            output,
            format!(
                "{menu}Enter your choice: Enter customer ID: Error: Customer 'C1' not found\n\
                 {menu}Enter your choice: Exiting system. Goodbye!\n"
            )
        );
    }
}
