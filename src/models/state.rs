//! Ledger state
//!
//! Everything that is persisted and exchanged as a unit: display name,
//! income, transaction log, debts and the savings history.

use serde::{Deserialize, Serialize};

use super::debt::DebtEntry;
use super::history::HistorySnapshot;
use super::income::IncomeRecord;
use super::transaction::Transaction;

/// The full persisted state of one household ledger
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedgerState {
    pub username: String,

    #[serde(rename = "revenus")]
    pub income: IncomeRecord,

    pub transactions: Vec<Transaction>,

    /// Files written before the history existed have no key
    #[serde(default)]
    pub history: HistorySnapshot,

    /// Files written before debts existed have no key
    #[serde(default)]
    pub debts: Vec<DebtEntry>,
}

impl LedgerState {
    /// An empty ledger for the given display name
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }
}
