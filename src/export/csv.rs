//! CSV Export functionality
//!
//! Exports the transaction log in a spreadsheet-friendly form.

use std::io::Write;

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::Transaction;

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> EnvelopeResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Catégorie", "Montant", "Description"])
        .map_err(|e| EnvelopeError::Export(e.to_string()))?;

    for txn in transactions {
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = txn.amount.to_string();
        csv_writer
            .write_record([
                date.as_str(),
                txn.category.as_str(),
                amount.as_str(),
                txn.description.as_str(),
            ])
            .map_err(|e| EnvelopeError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| EnvelopeError::Export(e.to_string()))?;

    Ok(())
}
