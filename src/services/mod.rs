//! Service layer for the envelope ledger
//!
//! The service layer provides business logic on top of the models: the
//! `Ledger` owns one household's state and validates every entry, and the
//! summary functions turn that state into per-envelope spend, balances and
//! totals.

pub mod ledger;
pub mod summary;

pub use ledger::{record_transaction, snapshot_history, Ledger, Recomputation};
pub use summary::{
    compute_balances, compute_summary, compute_totals, CategoryBalance, CategoryBalances,
    CategorySpend,
};
