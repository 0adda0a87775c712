use rust_decimal::Decimal;
use serde::Serialize;

pub type AccountId = u64;

/// A single bank account. The balance is only ever touched by the owning
/// ledger, so all fields stay private behind accessors.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    id: AccountId,
    owner: String,
    balance: Decimal,
}

impl Account {
    pub(crate) fn new(id: AccountId, owner: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id,
            owner: owner.into(),
            balance,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Whether the balance covers `amount` without going negative.
    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    /// Shift the balance by a signed amount. The ledger validates before
    /// posting; an applied posting is the source of truth and there is no
    /// further checking here.
    pub(crate) fn apply(&mut self, amount: Decimal) {
        self.balance += amount;
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::{FromPrimitive, Zero};

    use super::*;

    #[test]
    fn apply_postings() {
        let mut acc = Account::new(1, "Karol Janowski", Decimal::zero());
        acc.apply(Decimal::from_u32(10).unwrap());
        assert_eq!(acc.balance(), Decimal::from_u32(10).unwrap());
        acc.apply(-Decimal::from_u32(3).unwrap());
        assert_eq!(acc.balance(), Decimal::from_u32(7).unwrap());
        assert_eq!(acc.id(), 1);
        assert_eq!(acc.owner(), "Karol Janowski");
    }

    #[test]
    fn can_cover_boundary() {
        let acc = Account::new(1, "Karol Janowski", Decimal::from_u32(10).unwrap());
        assert!(acc.can_cover(Decimal::from_u32(10).unwrap()));
        assert!(acc.can_cover(Decimal::zero()));
        assert!(!acc.can_cover(Decimal::from_u32(11).unwrap()));
    }

    #[test]
    fn negative_opening_balance_is_accepted() {
        // opening balances are taken as-is, only later withdrawals are checked
        let acc = Account::new(1, "Karol Janowski", Decimal::from_i64(-50).unwrap());
        assert_eq!(acc.balance(), Decimal::from_i64(-50).unwrap());
        assert!(!acc.can_cover(Decimal::zero()));
    }
}
