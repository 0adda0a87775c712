use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountId},
    transaction::Transaction,
};

pub mod in_memory_ledger;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("account with id {0} does not exist")]
    AccountNotFound(AccountId),
    #[error("insufficient balance on account with id {0}")]
    InsufficientBalance(AccountId),
}

/// Full operation surface of one independent ledger. Mutating operations
/// take `&mut self`: a ledger is single-writer by contract, and a
/// concurrent variant would wrap one instance in a mutual-exclusion scope.
///
/// Every mutating operation either fully succeeds (mutates a balance and
/// records a transaction) or fully fails with a [`LedgerError`] before any
/// state change.
pub trait Ledger {
    /// Opens an account for `owner`, assigning the next account id.
    /// The initial balance is taken as-is, without validation.
    fn open_account(&mut self, owner: &str, initial_balance: Decimal) -> &Account;

    /// Looks up an account by id. Read-only, never fails.
    fn find_account_by_id(&self, id: AccountId) -> Option<&Account>;

    /// Adds `amount` to the account balance and records a positive posting.
    fn deposit(&mut self, account_id: AccountId, amount: Decimal) -> Result<(), LedgerError>;

    /// Subtracts `amount` from the account balance and records a negative
    /// posting. The balance must cover the amount.
    fn withdraw(&mut self, account_id: AccountId, amount: Decimal) -> Result<(), LedgerError>;

    /// Moves `amount` between two accounts, recording a debit leg against
    /// the source and a credit leg against the destination. The source is
    /// looked up first, and its funds are checked only once both accounts
    /// are known to exist.
    fn transfer(
        &mut self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError>;

    /// Every transaction posted against the account, in posting order.
    fn transactions_history(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<&Transaction>, LedgerError>;
}
