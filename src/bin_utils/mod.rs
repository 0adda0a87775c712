//! This module could be a separate crate on its own, to bootstrap [`tiny_bank`] within binary
//! but for simplicitly purposes, I include this module directly in binary.

use std::io::Write;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::ledger::{Ledger, LedgerError, in_memory_ledger::InMemoryLedger};
use crate::transaction::TransferIdPolicy;
use csv_printer::{print_balances, print_statement};
pub mod csv_printer;

/// Replays the showcase scenario against a fresh ledger: two accounts, a
/// transfer that succeeds, one that bounces, and a withdrawal on each.
/// Domain failures go through `error_printer`; each account's statement
/// and the final balances are written to `output` as CSV.
pub struct Service<'w, W: 'w> {
    pub output: &'w mut W,
    pub transfer_id_policy: TransferIdPolicy,
    pub error_printer: Box<dyn FnMut(LedgerError)>,
}

impl<'w, W> Service<'w, W>
where
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let mut ledger = InMemoryLedger::with_transfer_id_policy(self.transfer_id_policy);

        let first = ledger
            .open_account("Karol Janowski", Decimal::from(1000))
            .id();
        let second = ledger
            .open_account("Marcel Kawalec", Decimal::from(500))
            .id();

        let steps = [
            ledger.transfer(first, second, Decimal::from(200)),
            ledger.transfer(first, second, Decimal::from(1000)),
            ledger.withdraw(second, Decimal::from(300)),
            ledger.withdraw(first, Decimal::from(300)),
        ];
        for step in steps {
            if let Err(err) = step {
                (self.error_printer)(err);
            }
        }

        for account_id in [first, second] {
            match ledger.transactions_history(account_id) {
                Ok(history) => {
                    for tx in &history {
                        tracing::info!("history for account {account_id}: {tx}");
                    }
                    print_statement(&mut *self.output, history.into_iter())?;
                }
                Err(err) => (self.error_printer)(err),
            }
        }

        print_balances(self.output, ledger.accounts())
    }
}
