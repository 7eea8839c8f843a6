//! Income CLI commands
//!
//! Implements CLI commands for the four monthly income sources.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::{IncomeRecord, Money};
use crate::services::Ledger;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Show the income breakdown
    Show,

    /// Set all four income sources at once
    Set {
        /// First salary
        salary1: String,
        /// Second salary
        salary2: String,
        /// Secondary income
        secondary: String,
        /// Benefits and allowances
        aid: String,
    },
}

fn parse_amount(label: &str, value: &str) -> EnvelopeResult<Money> {
    Money::parse(value)
        .map_err(|e| EnvelopeError::Validation(format!("Invalid {}: {}", label, e)))
}

/// Handle an income command
pub fn handle_income_command(
    settings: &Settings,
    ledger: &mut Ledger,
    cmd: IncomeCommands,
) -> EnvelopeResult<()> {
    match cmd {
        IncomeCommands::Set {
            salary1,
            salary2,
            secondary,
            aid,
        } => {
            let income = IncomeRecord::new(
                parse_amount("first salary", &salary1)?,
                parse_amount("second salary", &salary2)?,
                parse_amount("secondary income", &secondary)?,
                parse_amount("allowances", &aid)?,
            );
            ledger.set_income(income)?;
            println!("Income set to {}", settings.format_money(income.total()));
        }

        IncomeCommands::Show => {
            let income = &ledger.state().income;
            println!("Revenus");
            println!("{}", "-".repeat(40));
            for (source, amount) in income.breakdown() {
                println!("{:<22} {:>16}", source.label(), settings.format_money(amount));
            }
            println!("{}", "-".repeat(40));
            println!("{:<22} {:>16}", "Total", settings.format_money(income.total()));
        }
    }

    Ok(())
}
