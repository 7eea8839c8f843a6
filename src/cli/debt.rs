//! Debt CLI commands
//!
//! Debts are tracked alongside the budget; payments recorded here do not
//! count against any envelope.

use clap::Subcommand;

use super::transaction::parse_month_or_current;
use crate::config::settings::Settings;
use crate::display::format_debt_table;
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::{DebtEntry, Money};
use crate::services::Ledger;

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Record a debt and this month's payment
    Add {
        /// Creditor or loan name
        name: String,
        /// Total amount owed
        total: String,
        /// Amount paid this month
        paid: String,
        /// Month of the payment (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// List recorded debts
    #[command(alias = "ls")]
    List,
}

/// Handle a debt command
pub fn handle_debt_command(
    settings: &Settings,
    ledger: &mut Ledger,
    cmd: DebtCommands,
) -> EnvelopeResult<()> {
    match cmd {
        DebtCommands::Add {
            name,
            total,
            paid,
            month,
        } => {
            let total = Money::parse(&total)
                .map_err(|e| EnvelopeError::Validation(format!("Invalid total: {}", e)))?;
            let paid = Money::parse(&paid)
                .map_err(|e| EnvelopeError::Validation(format!("Invalid payment: {}", e)))?;
            let month = parse_month_or_current(month.as_deref())?;

            let debt = DebtEntry::new(name.trim(), total, paid, month);
            ledger.record_debt(debt.clone())?;

            println!(
                "Recorded debt '{}' for {}: {} paid, {} remaining",
                debt.name,
                debt.month,
                settings.format_money(debt.paid_this_month),
                settings.format_money(debt.remaining())
            );
        }

        DebtCommands::List => {
            print!(
                "{}",
                format_debt_table(&ledger.state().debts, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
