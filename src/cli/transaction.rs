//! Transaction CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_transaction_table;
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::{Money, MonthKey, Transaction};
use crate::services::Ledger;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an expense against an envelope
    Add {
        /// Envelope the expense belongs to
        category: String,
        /// Amount spent (e.g., "42.50")
        amount: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List recorded transactions
    #[command(alias = "ls")]
    List {
        /// Only show one month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        /// Number of most recent transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Parse a YYYY-MM-DD date argument, defaulting to today
pub fn parse_date_or_today(date: Option<&str>) -> EnvelopeResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            EnvelopeError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse a YYYY-MM month argument, defaulting to the current month
pub fn parse_month_or_current(month: Option<&str>) -> EnvelopeResult<MonthKey> {
    match month {
        Some(s) => MonthKey::parse(s).map_err(|e| EnvelopeError::Validation(e.to_string())),
        None => Ok(MonthKey::current()),
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    settings: &Settings,
    ledger: &mut Ledger,
    cmd: TransactionCommands,
) -> EnvelopeResult<()> {
    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            date,
            description,
        } => {
            let date = parse_date_or_today(date.as_deref())?;
            let amount = Money::parse(&amount)
                .map_err(|e| EnvelopeError::Validation(format!("Invalid amount: {}", e)))?;

            let txn = Transaction::with_description(
                date,
                category.trim(),
                amount,
                description.unwrap_or_default(),
            );
            ledger.record_transaction(txn.clone())?;

            println!(
                "Recorded {} in '{}' on {}",
                settings.format_money(txn.amount),
                txn.category,
                txn.date.format(&settings.date_format)
            );

            if let Some(balance) = ledger.balances().get(&txn.category) {
                if balance.is_overspent() {
                    println!(
                        "Warning: '{}' is over budget by {}",
                        balance.category,
                        settings.format_money(balance.remaining.abs())
                    );
                }
            }
        }

        TransactionCommands::List { month, limit } => {
            let transactions = match month {
                Some(m) => ledger.transactions_in(parse_month_or_current(Some(m.as_str()))?),
                None => ledger.state().transactions.clone(),
            };
            let skip = limit
                .map(|n| transactions.len().saturating_sub(n))
                .unwrap_or(0);

            print!(
                "{}",
                format_transaction_table(
                    &transactions[skip..],
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date_or_today(Some("2025-01-15")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(parse_date_or_today(Some("15/01/2025"))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month_or_current(Some("2025-03")).unwrap(),
            MonthKey::new(2025, 3).unwrap()
        );
        assert!(parse_month_or_current(Some("2025-13")).is_err());
        assert_eq!(parse_month_or_current(None).unwrap(), MonthKey::current());
    }
}
