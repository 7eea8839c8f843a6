//! CLI commands for data export and import
//!
//! JSON exports carry the full ledger state in the interchange format and
//! can be imported back; CSV exports carry the transaction log only.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::info;

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::export::export_transactions_csv;
use crate::services::Ledger;
use crate::storage::{read_required, write_atomic};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Full ledger state
    #[default]
    Json,
    /// Transactions only, for spreadsheets
    Csv,
}

/// Handle the export command
pub fn handle_export_command(
    ledger: &Ledger,
    output: PathBuf,
    format: ExportFormat,
) -> EnvelopeResult<()> {
    let transactions = &ledger.state().transactions;

    match format {
        ExportFormat::Json => {
            let bytes = ledger.export_bytes()?;
            write_atomic(&output, &bytes)
                .map_err(|e| EnvelopeError::Export(format!("{}: {}", output.display(), e)))?;
        }
        ExportFormat::Csv => {
            let file = File::create(&output).map_err(|e| {
                EnvelopeError::Export(format!("Cannot create {}: {}", output.display(), e))
            })?;
            export_transactions_csv(transactions, BufWriter::new(file))?;
        }
    }

    info!(path = %output.display(), ?format, "ledger exported");
    println!(
        "Exported {} transaction(s) to {}",
        transactions.len(),
        output.display()
    );
    if let Some((first, last)) = ledger.date_range() {
        println!("Date range: {} to {}", first, last);
    }
    Ok(())
}

/// Handle the import command.
///
/// The imported file replaces the whole ledger state.
pub fn handle_import_command(ledger: &mut Ledger, file: &Path) -> EnvelopeResult<()> {
    let bytes = read_required(file)
        .map_err(|e| EnvelopeError::Import(format!("{}: {}", file.display(), e)))?;
    ledger.import_bytes(&bytes)?;

    let state = ledger.state();
    println!("Imported ledger from {}", file.display());
    println!("  User:         {}", state.username);
    println!("  Transactions: {}", state.transactions.len());
    println!("  Debts:        {}", state.debts.len());
    println!("  History:      {} month(s)", state.history.len());
    Ok(())
}
