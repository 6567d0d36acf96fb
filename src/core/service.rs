//! Banking service facade
//!
//! This module provides the `BankingService` that owns every customer and
//! exposes all ledger operations by identifier.
//!
//! Each operation first resolves the customer, then (where needed) the
//! account within it, then delegates. Lookup failures and account
//! failures propagate unchanged to the caller.

use crate::core::account::TransactionHistory;
use crate::core::customer::{AccountListing, Customer};
use crate::types::{AccountNumber, BankingError, CustomerId};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Root object holding all customers in insertion order
///
/// Constructed explicitly by the caller and passed by reference; there is
/// no process-wide instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankingService {
    customers: Vec<Customer>,
}

impl BankingService {
    /// Create an empty service
    pub fn new() -> Self {
        BankingService {
            customers: Vec::new(),
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Register a new customer
    ///
    /// Identifier uniqueness is not enforced; lookups return the first
    /// customer registered under an ID.
    pub fn add_customer(&mut self, name: impl Into<String>, customer_id: impl Into<CustomerId>) {
        let customer = Customer::new(name, customer_id);
        info!(customer = customer.customer_id(), name = customer.name(), "customer added");
        self.customers.push(customer);
    }

    /// Look up a customer for mutation
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no customer has the given ID.
    pub fn get_customer(&mut self, customer_id: &str) -> Result<&mut Customer, BankingError> {
        debug!(customer = customer_id, "customer lookup");
        self.customers
            .iter_mut()
            .find(|customer| customer.customer_id() == customer_id)
            .ok_or_else(|| BankingError::customer_not_found(customer_id))
    }

    /// Look up a customer for reading
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no customer has the given ID.
    pub fn customer(&self, customer_id: &str) -> Result<&Customer, BankingError> {
        self.customers
            .iter()
            .find(|customer| customer.customer_id() == customer_id)
            .ok_or_else(|| BankingError::customer_not_found(customer_id))
    }

    /// Open an account for an existing customer
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the customer does not exist.
    pub fn create_account(
        &mut self,
        customer_id: &str,
        account_number: impl Into<AccountNumber>,
        initial_balance: Decimal,
    ) -> Result<(), BankingError> {
        self.get_customer(customer_id)?
            .create_account(account_number, initial_balance);
        Ok(())
    }

    /// Deposit into a customer's account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer or account does not exist (`NotFound`)
    /// - The amount is not positive (`InvalidArgument`)
    /// - The balance would overflow or round (`ArithmeticOverflow`, `PrecisionLoss`)
    pub fn perform_deposit(
        &mut self,
        customer_id: &str,
        account_number: &str,
        amount: Decimal,
    ) -> Result<(), BankingError> {
        self.get_customer(customer_id)?
            .get_account(account_number)?
            .deposit(amount)
    }

    /// Withdraw from a customer's account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer or account does not exist (`NotFound`)
    /// - The amount is not positive (`InvalidArgument`)
    /// - The amount exceeds the balance (`InsufficientFunds`)
    pub fn perform_withdrawal(
        &mut self,
        customer_id: &str,
        account_number: &str,
        amount: Decimal,
    ) -> Result<(), BankingError> {
        self.get_customer(customer_id)?
            .get_account(account_number)?
            .withdraw(amount)
    }

    /// Render a customer's account listing
    pub fn display_customer_accounts(
        &self,
        customer_id: &str,
    ) -> Result<AccountListing<'_>, BankingError> {
        Ok(self.customer(customer_id)?.display_accounts())
    }

    /// Render an account's transaction history
    pub fn display_account_transactions(
        &self,
        customer_id: &str,
        account_number: &str,
    ) -> Result<TransactionHistory<'_>, BankingError> {
        Ok(self
            .customer(customer_id)?
            .account(account_number)?
            .display_transactions())
    }

    pub fn update_customer_name(
        &mut self,
        customer_id: &str,
        new_name: impl Into<String>,
    ) -> Result<(), BankingError> {
        let new_name = new_name.into();
        let customer = self.get_customer(customer_id)?;
        info!(customer = customer_id, old = customer.name(), new = %new_name, "customer renamed");
        customer.set_name(new_name);
        Ok(())
    }

    pub fn update_account_number(
        &mut self,
        customer_id: &str,
        old_number: &str,
        new_number: impl Into<AccountNumber>,
    ) -> Result<(), BankingError> {
        self.get_customer(customer_id)?
            .update_account_number(old_number, new_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Transaction, TransactionType};
    use rstest::{fixture, rstest};

    /// Customer C1/Alice with account A1 opened at 100
    #[fixture]
    fn service() -> BankingService {
        let mut service = BankingService::new();
        service.add_customer("Alice", "C1");
        service
            .create_account("C1", "A1", Decimal::new(100, 0))
            .unwrap();
        service
    }

    fn balance(service: &BankingService, customer_id: &str, account: &str) -> Decimal {
        service
            .customer(customer_id)
            .unwrap()
            .account(account)
            .unwrap()
            .balance()
    }

    fn history_len(service: &BankingService, customer_id: &str, account: &str) -> usize {
        service
            .customer(customer_id)
            .unwrap()
            .account(account)
            .unwrap()
            .transactions()
            .len()
    }

    #[test]
    fn test_new_service_is_empty() {
        let service = BankingService::new();
        assert!(service.customers().is_empty());
        assert_eq!(service, BankingService::default());
    }

    #[test]
    fn test_add_customer_keeps_insertion_order() {
        let mut service = BankingService::new();
        service.add_customer("Alice", "C1");
        service.add_customer("Bob", "C2");

        let ids: Vec<_> = service.customers().iter().map(Customer::customer_id).collect();
        assert_eq!(ids, vec!["C1", "C2"]);
    }

    #[test]
    fn test_duplicate_customer_ids_resolve_to_first() {
        let mut service = BankingService::new();
        service.add_customer("Alice", "C1");
        service.add_customer("Impostor", "C1");

        assert_eq!(service.customers().len(), 2);
        assert_eq!(service.customer("C1").unwrap().name(), "Alice");
    }

    #[rstest]
    fn test_get_customer_not_found(mut service: BankingService) {
        assert_eq!(
            service.get_customer("C9").unwrap_err(),
            BankingError::customer_not_found("C9")
        );
    }

    #[rstest]
    fn test_create_account_for_missing_customer(mut service: BankingService) {
        let result = service.create_account("C9", "A1", Decimal::ZERO);
        assert_eq!(result, Err(BankingError::customer_not_found("C9")));
    }

    #[rstest]
    fn test_scenario_deposit_withdraw_and_failures(mut service: BankingService) {
        service
            .perform_deposit("C1", "A1", Decimal::new(50, 0))
            .unwrap();
        assert_eq!(balance(&service, "C1", "A1"), Decimal::new(150, 0));
        assert_eq!(history_len(&service, "C1", "A1"), 1);

        service
            .perform_withdrawal("C1", "A1", Decimal::new(30, 0))
            .unwrap();
        assert_eq!(balance(&service, "C1", "A1"), Decimal::new(120, 0));
        assert_eq!(history_len(&service, "C1", "A1"), 2);

        let result = service.perform_withdrawal("C1", "A1", Decimal::new(200, 0));
        assert!(matches!(result, Err(BankingError::InsufficientFunds { .. })));
        assert_eq!(balance(&service, "C1", "A1"), Decimal::new(120, 0));

        let result = service.perform_deposit("C1", "A1", Decimal::new(-5, 0));
        assert!(matches!(result, Err(BankingError::InvalidArgument { .. })));
        assert_eq!(balance(&service, "C1", "A1"), Decimal::new(120, 0));
        assert_eq!(history_len(&service, "C1", "A1"), 2);

        let history = service
            .customer("C1")
            .unwrap()
            .account("A1")
            .unwrap()
            .transactions();
        assert_eq!(
            history,
            &[
                Transaction::new(TransactionType::Deposit, Decimal::new(50, 0)),
                Transaction::new(TransactionType::Withdrawal, Decimal::new(30, 0)),
            ]
        );
    }

    #[rstest]
    #[case::unknown_customer("C9", "A1", BankingError::customer_not_found("C9"))]
    #[case::unknown_account("C1", "A9", BankingError::account_not_found("A9"))]
    fn test_lookups_fail_with_not_found(
        mut service: BankingService,
        #[case] customer_id: &str,
        #[case] account: &str,
        #[case] expected: BankingError,
    ) {
        assert_eq!(
            service.perform_deposit(customer_id, account, Decimal::ONE),
            Err(expected.clone())
        );
        assert_eq!(
            service.perform_withdrawal(customer_id, account, Decimal::ONE),
            Err(expected.clone())
        );
        assert_eq!(
            service
                .display_account_transactions(customer_id, account)
                .unwrap_err(),
            expected
        );
        assert_eq!(
            service.update_account_number(customer_id, account, "A2"),
            Err(expected)
        );
        assert_eq!(balance(&service, "C1", "A1"), Decimal::new(100, 0));
    }

    #[rstest]
    fn test_customer_not_found_is_checked_before_amount(mut service: BankingService) {
        let result = service.perform_deposit("C9", "A1", Decimal::new(-5, 0));
        assert_eq!(result, Err(BankingError::customer_not_found("C9")));
    }

    #[rstest]
    fn test_display_customer_accounts(mut service: BankingService) {
        service
            .create_account("C1", "A2", Decimal::new(2550, 2))
            .unwrap();

        assert_eq!(
            service.display_customer_accounts("C1").unwrap().to_string(),
            "Customer: Alice | Customer ID: C1\n\
             Account Number: A1 | Balance: 100\n\
             Account Number: A2 | Balance: 25.5\n"
        );
        assert!(service.display_customer_accounts("C9").unwrap_err().is_not_found());
    }

    #[rstest]
    fn test_display_account_transactions(mut service: BankingService) {
        service
            .perform_deposit("C1", "A1", Decimal::new(50, 0))
            .unwrap();

        assert_eq!(
            service
                .display_account_transactions("C1", "A1")
                .unwrap()
                .to_string(),
            "Transactions for Account: A1\nTransaction: Deposit | Amount: 50\n"
        );
    }

    #[rstest]
    fn test_update_customer_name(mut service: BankingService) {
        service.update_customer_name("C1", "Alicia").unwrap();

        let customer = service.customer("C1").unwrap();
        assert_eq!(customer.name(), "Alicia");
        assert_eq!(customer.accounts().len(), 1);
        assert_eq!(
            service.update_customer_name("C9", "Nobody"),
            Err(BankingError::customer_not_found("C9"))
        );
    }

    #[rstest]
    fn test_update_account_number_preserves_state(mut service: BankingService) {
        service
            .perform_deposit("C1", "A1", Decimal::new(50, 0))
            .unwrap();

        service.update_account_number("C1", "A1", "A2").unwrap();

        assert!(service.customer("C1").unwrap().account("A1").is_err());
        assert_eq!(balance(&service, "C1", "A2"), Decimal::new(150, 0));
        assert_eq!(history_len(&service, "C1", "A2"), 1);
        assert_eq!(
            service.perform_deposit("C1", "A1", Decimal::ONE),
            Err(BankingError::account_not_found("A1"))
        );
    }
}
