use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::AccountId;

pub type TransactionId = u64;

/// How the two legs of a transfer consume transaction ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferIdPolicy {
    /// Both legs carry a single id, grouping them as one transfer.
    #[default]
    SharedId,
    /// Every leg draws its own id from the counter.
    DistinctIds,
}

/// Immutable record of a single balance change. Inbound amounts are
/// positive, outbound negative. The account is referenced by id, never by
/// an owning link, so the record resolves against the ledger's account map.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    id: TransactionId,
    account_id: AccountId,
    amount: Decimal,
    posted_at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        account_id: AccountId,
        amount: Decimal,
        posted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id,
            amount,
            posted_at,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn posted_at(&self) -> DateTime<Utc> {
        self.posted_at
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transaction {} on account {}: {} at {}",
            self.id, self.account_id, self.amount, self.posted_at
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    #[test]
    fn display_shows_signed_amount() {
        let posted_at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let tx = Transaction::new(7, 2, -Decimal::from_u32(200).unwrap(), posted_at);
        assert_eq!(
            tx.to_string(),
            "transaction 7 on account 2: -200 at 2024-05-17 09:30:00 UTC"
        );
    }

    #[test]
    fn shared_id_is_the_default_policy() {
        assert_eq!(TransferIdPolicy::default(), TransferIdPolicy::SharedId);
    }
}
