use std::io::Write;

use chrono::{DateTime, Utc};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::{Account, AccountId};
use crate::transaction::{Transaction, TransactionId};

#[derive(Debug, Serialize)]
struct BalanceRow {
    account: AccountId,
    owner: String,
    balance: Decimal,
}

#[derive(Debug, Serialize)]
struct StatementRow {
    tx: TransactionId,
    account: AccountId,
    amount: Decimal,
    posted_at: DateTime<Utc>,
}

pub fn print_balances<'a, W>(
    output: &mut W,
    accounts: impl Iterator<Item = &'a Account>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for account in accounts {
        let row = BalanceRow {
            account: account.id(),
            owner: account.owner().to_owned(),
            balance: account.balance(),
        };
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    flush(writer)
}

pub fn print_statement<'a, W>(
    output: &mut W,
    history: impl Iterator<Item = &'a Transaction>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for tx in history {
        let row = StatementRow {
            tx: tx.id(),
            account: tx.account_id(),
            amount: tx.amount(),
            posted_at: tx.posted_at(),
        };
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    flush(writer)
}

fn flush<W: Write>(mut writer: Writer<W>) -> anyhow::Result<()> {
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
