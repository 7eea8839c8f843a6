//! Envelope ledger
//!
//! The `Ledger` owns one household's state and the envelope set it is
//! budgeted against. Callers hold the single instance for a session and
//! drive every mutation and recomputation through it.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::export::json;
use crate::models::{
    DebtEntry, EnvelopeSet, HistorySnapshot, IncomeRecord, LedgerState, Money, MonthKey, Totals,
    Transaction,
};

use super::summary::{
    compute_balances, compute_summary, compute_totals, CategoryBalances, CategorySpend,
};

/// Validate an entry and append it to the log.
///
/// The amount must be non-negative and the category must have an envelope.
pub fn record_transaction(
    log: &mut Vec<Transaction>,
    entry: Transaction,
    envelopes: &EnvelopeSet,
) -> EnvelopeResult<()> {
    entry
        .validate()
        .map_err(|e| EnvelopeError::Validation(e.to_string()))?;

    if !envelopes.contains(&entry.category) {
        return Err(EnvelopeError::unknown_category(entry.category));
    }

    let amounts = log.iter().map(|t| t.amount).chain([entry.amount]);
    if Money::checked_total(amounts).is_none() {
        return Err(EnvelopeError::Validation(
            "the transaction log total would exceed the representable range".into(),
        ));
    }

    log.push(entry);
    Ok(())
}

/// Store `totals` for `month` unless the month already has a snapshot.
///
/// The first recomputation of a month wins; later ones leave it untouched.
/// Returns whether a snapshot was written.
pub fn snapshot_history(history: &mut HistorySnapshot, month: MonthKey, totals: Totals) -> bool {
    history.insert_if_absent(month, totals)
}

/// Result of one full recomputation pass
#[derive(Debug, Clone)]
pub struct Recomputation {
    pub month: MonthKey,
    pub spend: CategorySpend,
    pub balances: CategoryBalances,
    pub totals: Totals,
    /// Whether this pass wrote the month's history snapshot
    pub snapshot_written: bool,
}

/// One household's ledger
#[derive(Debug, Clone)]
pub struct Ledger {
    state: LedgerState,
    envelopes: EnvelopeSet,
}

impl Ledger {
    /// Create a ledger over existing state
    pub fn new(state: LedgerState, envelopes: EnvelopeSet) -> Self {
        Self { state, envelopes }
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn envelopes(&self) -> &EnvelopeSet {
        &self.envelopes
    }

    /// Swap in a new envelope configuration; past transactions are kept
    pub fn set_envelopes(&mut self, envelopes: EnvelopeSet) {
        self.envelopes = envelopes;
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.state.username = username.into();
    }

    /// Replace the current income figures
    pub fn set_income(&mut self, income: IncomeRecord) -> EnvelopeResult<()> {
        income
            .validate()
            .map_err(|e| EnvelopeError::Validation(e.to_string()))?;
        self.state.income = income;
        Ok(())
    }

    /// Validate and append a transaction
    pub fn record_transaction(&mut self, entry: Transaction) -> EnvelopeResult<()> {
        record_transaction(&mut self.state.transactions, entry, &self.envelopes)?;
        debug!(count = self.state.transactions.len(), "transaction recorded");
        Ok(())
    }

    /// Validate and append a debt entry
    pub fn record_debt(&mut self, debt: DebtEntry) -> EnvelopeResult<()> {
        debt.validate()
            .map_err(|e| EnvelopeError::Validation(e.to_string()))?;
        self.state.debts.push(debt);
        Ok(())
    }

    /// Transactions dated within `month`, in log order
    pub fn transactions_in(&self, month: MonthKey) -> Vec<Transaction> {
        self.state
            .transactions
            .iter()
            .filter(|txn| month.contains(txn.date))
            .cloned()
            .collect()
    }

    /// Replace the whole transaction log (e.g., when opening a month file)
    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) -> EnvelopeResult<()> {
        for txn in &transactions {
            txn.validate()
                .map_err(|e| EnvelopeError::Validation(e.to_string()))?;
        }
        self.state.transactions = transactions;
        Ok(())
    }

    pub fn summary(&self) -> CategorySpend {
        compute_summary(&self.state.transactions, &self.envelopes)
    }

    pub fn balances(&self) -> CategoryBalances {
        compute_balances(&self.summary(), &self.envelopes)
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.summary(), &self.state.income)
    }

    /// Recompute everything and record the month's snapshot if it has none
    pub fn recompute(&mut self, month: MonthKey) -> Recomputation {
        let spend = self.summary();
        self.finish_recompute(month, spend)
    }

    /// Like `recompute`, but only transactions dated within `month` count
    pub fn recompute_month(&mut self, month: MonthKey) -> Recomputation {
        let spend = compute_summary(&self.transactions_in(month), &self.envelopes);
        self.finish_recompute(month, spend)
    }

    fn finish_recompute(&mut self, month: MonthKey, spend: CategorySpend) -> Recomputation {
        let balances = compute_balances(&spend, &self.envelopes);
        let totals = compute_totals(&spend, &self.state.income);

        for (category, amount) in spend.unknown() {
            warn!(%category, %amount, "spend booked against a category with no envelope");
        }

        let snapshot_written = snapshot_history(&mut self.state.history, month, totals);
        debug!(%month, savings = %totals.savings, snapshot_written, "ledger recomputed");

        Recomputation {
            month,
            spend,
            balances,
            totals,
            snapshot_written,
        }
    }

    /// Serialize the full state in interchange form
    pub fn export_bytes(&self) -> EnvelopeResult<Vec<u8>> {
        json::serialize(&self.state)
    }

    /// Replace the whole state with an imported one.
    ///
    /// Nothing is merged. On error the current state is left as it was.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> EnvelopeResult<()> {
        let imported = json::deserialize(bytes)?;
        info!(
            transactions = imported.transactions.len(),
            debts = imported.debts.len(),
            months = imported.history.len(),
            "ledger state imported"
        );
        self.state = imported;
        Ok(())
    }

    /// Earliest and latest transaction dates, if any
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.state.transactions.iter().map(|t| t.date).min()?;
        let last = self.state.transactions.iter().map(|t| t.date).max()?;
        Some((first, last))
    }
}
