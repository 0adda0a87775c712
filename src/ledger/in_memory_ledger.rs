use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountId},
    transaction::{Transaction, TransactionId, TransferIdPolicy},
};

use super::{Ledger, LedgerError};

/// Keeps every account and the append-only transaction log in process
/// memory. One instance is one independent ledger; all state dies with it.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: HashMap<AccountId, Account>,
    transactions: Vec<Transaction>,
    last_account_id: AccountId,
    last_transaction_id: TransactionId,
    transfer_id_policy: TransferIdPolicy,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transfer_id_policy(transfer_id_policy: TransferIdPolicy) -> Self {
        Self {
            transfer_id_policy,
            ..Self::default()
        }
    }

    /// Accounts in creation order. Ids are dense and monotonic, so
    /// ascending id equals insertion order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        let mut ids: Vec<_> = self.accounts.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(|id| &self.accounts[&id])
    }

    fn next_transaction_id(&mut self) -> TransactionId {
        self.last_transaction_id += 1;
        self.last_transaction_id
    }

    fn record(
        &mut self,
        id: TransactionId,
        account_id: AccountId,
        amount: Decimal,
        posted_at: DateTime<Utc>,
    ) {
        tracing::debug!("posting transaction {id} for account {account_id}: {amount}");
        self.transactions
            .push(Transaction::new(id, account_id, amount, posted_at));
    }
}

impl Ledger for InMemoryLedger {
    fn open_account(&mut self, owner: &str, initial_balance: Decimal) -> &Account {
        self.last_account_id += 1;
        let id = self.last_account_id;
        self.accounts
            .insert(id, Account::new(id, owner, initial_balance));
        tracing::info!("opened account {id} for {owner} with balance {initial_balance}");
        &self.accounts[&id]
    }

    fn find_account_by_id(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    fn deposit(&mut self, account_id: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(&account_id)
            .ok_or(LedgerError::AccountNotFound(account_id))?;
        account.apply(amount);
        tracing::info!("deposited {amount} into account {account_id}");
        let id = self.next_transaction_id();
        self.record(id, account_id, amount, Utc::now());
        Ok(())
    }

    fn withdraw(&mut self, account_id: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(&account_id)
            .ok_or(LedgerError::AccountNotFound(account_id))?;
        if !account.can_cover(amount) {
            return Err(LedgerError::InsufficientBalance(account_id));
        }
        account.apply(-amount);
        tracing::info!("withdrew {amount} from account {account_id}");
        let id = self.next_transaction_id();
        self.record(id, account_id, -amount, Utc::now());
        Ok(())
    }

    fn transfer(
        &mut self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let source = self
            .accounts
            .get(&from_account_id)
            .ok_or(LedgerError::AccountNotFound(from_account_id))?;
        if !self.accounts.contains_key(&to_account_id) {
            return Err(LedgerError::AccountNotFound(to_account_id));
        }
        // funds are checked only once both accounts are known to exist
        if !source.can_cover(amount) {
            return Err(LedgerError::InsufficientBalance(from_account_id));
        }

        let debit_id = self.next_transaction_id();
        let credit_id = match self.transfer_id_policy {
            TransferIdPolicy::SharedId => debit_id,
            TransferIdPolicy::DistinctIds => self.next_transaction_id(),
        };
        let posted_at = Utc::now();

        // both keys were verified above, these lookups cannot miss
        if let Some(source) = self.accounts.get_mut(&from_account_id) {
            source.apply(-amount);
        }
        if let Some(destination) = self.accounts.get_mut(&to_account_id) {
            destination.apply(amount);
        }
        tracing::info!(
            "transferred {amount} from account {from_account_id} to account {to_account_id}"
        );
        self.record(debit_id, from_account_id, -amount, posted_at);
        self.record(credit_id, to_account_id, amount, posted_at);
        Ok(())
    }

    fn transactions_history(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        if !self.accounts.contains_key(&account_id) {
            return Err(LedgerError::AccountNotFound(account_id));
        }
        Ok(self
            .transactions
            .iter()
            .filter(|tx| tx.account_id() == account_id)
            .collect())
    }
}
