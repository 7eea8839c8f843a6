//! Per-month file CLI commands
//!
//! `save` writes the month's transactions to their own file; `open` makes a
//! month file the working transaction log.

use clap::Subcommand;

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::MonthKey;
use crate::services::Ledger;
use crate::storage::{Loaded, Storage};

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// List months that have a transaction file
    #[command(alias = "ls")]
    List,

    /// Write the month's transactions to its file
    Save {
        /// Month (YYYY-MM)
        month: String,
    },

    /// Replace the working transaction log with a month's file
    Open {
        /// Month (YYYY-MM)
        month: String,
    },
}

fn parse_month(month: &str) -> EnvelopeResult<MonthKey> {
    MonthKey::parse(month).map_err(|e| EnvelopeError::Validation(e.to_string()))
}

/// Handle a month command
pub fn handle_month_command(
    storage: &Storage,
    ledger: &mut Ledger,
    cmd: MonthCommands,
) -> EnvelopeResult<()> {
    match cmd {
        MonthCommands::List => {
            let months = storage.months.list()?;
            if months.is_empty() {
                println!("No month files saved yet.");
                println!("Use 'envelope month save <YYYY-MM>' to create one.");
            }
            for month in months {
                let marker = if ledger.state().history.contains(&month) {
                    " (in history)"
                } else {
                    ""
                };
                println!("{}{}", month, marker);
            }
        }

        MonthCommands::Save { month } => {
            let month = parse_month(&month)?;
            let transactions = ledger.transactions_in(month);
            storage.months.save(month, &transactions)?;
            println!(
                "Saved {} transaction(s) for {} to {}",
                transactions.len(),
                month,
                storage.months.file_for(month).display()
            );
        }

        MonthCommands::Open { month } => {
            let month = parse_month(&month)?;
            match storage.months.load(month)? {
                Loaded::Found(transactions) => {
                    let count = transactions.len();
                    ledger.replace_transactions(transactions)?;
                    println!("Opened {} with {} transaction(s)", month, count);
                }
                Loaded::Fresh(transactions) => {
                    ledger.replace_transactions(transactions)?;
                    println!("No file for {}; starting with an empty transaction log", month);
                }
            }
        }
    }

    Ok(())
}
