//! Core data models for the envelope ledger
//!
//! This module contains all the data structures that represent the budgeting
//! domain: envelopes, transactions, income, debts and the savings history.

pub mod debt;
pub mod envelope;
pub mod history;
pub mod income;
pub mod money;
pub mod period;
pub mod state;
pub mod transaction;

pub use debt::{DebtEntry, DebtValidationError};
pub use envelope::{Envelope, EnvelopeSet, EnvelopeValidationError};
pub use history::{HistorySnapshot, Totals};
pub use income::{IncomeRecord, IncomeSource, IncomeValidationError};
pub use money::{Money, MoneyParseError};
pub use period::{MonthKey, PeriodParseError};
pub use state::LedgerState;
pub use transaction::{Transaction, TransactionValidationError};
