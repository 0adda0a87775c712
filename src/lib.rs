/// Account entity: identity, owner and the balance mutated by the ledger.
pub mod account;

/// Immutable transaction records plus the transfer id policy.
pub mod transaction;

/// Ledger operations interface, plus "in memory" implementation.
/// Owns all mutation and query logic over accounts and transactions.
///
/// NOTE: a single implementation does not strictly need the trait, but
/// it is the natural integration point for replacing the in memory
/// store with something more sophisticated.
pub mod ledger;

/// Ideally, this module should exists on its own crate, as a way to
/// bootstrap the demo ledger. However, I want to use it for integration test
/// so I put it here.
pub mod bin_utils;
