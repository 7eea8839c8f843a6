//! JSON interchange format
//!
//! Exported files carry the full ledger state under the historical French
//! key names (`revenus`, `Catégorie`, `Montant`, ...). Per-month files carry
//! a bare array of transactions in the same shape.

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::{LedgerState, Money, Transaction};

/// Serialize the full state
pub fn serialize(state: &LedgerState) -> EnvelopeResult<Vec<u8>> {
    serde_json::to_vec_pretty(state).map_err(|e| EnvelopeError::Export(e.to_string()))
}

/// Decode a full state.
///
/// Malformed JSON or a wrong shape yields a `Decode` error carrying the
/// position; well-formed data with negative amounts yields a `Validation`
/// error. Nothing is returned partially populated.
pub fn deserialize(bytes: &[u8]) -> EnvelopeResult<LedgerState> {
    let state: LedgerState = serde_json::from_slice(bytes)?;
    validate_state(&state)?;
    Ok(state)
}

/// Check the amount invariants of a decoded state
pub fn validate_state(state: &LedgerState) -> EnvelopeResult<()> {
    state
        .income
        .validate()
        .map_err(|e| EnvelopeError::Validation(e.to_string()))?;

    validate_transactions(&state.transactions)?;

    for (index, debt) in state.debts.iter().enumerate() {
        debt.validate()
            .map_err(|e| EnvelopeError::Validation(format!("debt {}: {}", index + 1, e)))?;
    }

    Ok(())
}

fn validate_transactions(transactions: &[Transaction]) -> EnvelopeResult<()> {
    for (index, txn) in transactions.iter().enumerate() {
        txn.validate().map_err(|e| {
            EnvelopeError::Validation(format!("transaction {}: {}", index + 1, e))
        })?;
    }
    if Money::checked_total(transactions.iter().map(|t| t.amount)).is_none() {
        return Err(EnvelopeError::Validation(
            "transaction amounts add up to more than can be represented".into(),
        ));
    }
    Ok(())
}

/// Serialize a bare transaction array
pub fn encode_transactions(transactions: &[Transaction]) -> EnvelopeResult<Vec<u8>> {
    serde_json::to_vec_pretty(transactions).map_err(|e| EnvelopeError::Export(e.to_string()))
}

/// Decode a bare transaction array
pub fn decode_transactions(bytes: &[u8]) -> EnvelopeResult<Vec<Transaction>> {
    let transactions: Vec<Transaction> = serde_json::from_slice(bytes)?;
    validate_transactions(&transactions)?;
    Ok(transactions)
}
