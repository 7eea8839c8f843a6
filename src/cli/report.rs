//! Report CLI commands
//!
//! Summary, history and recap output. Summary and recap each run the
//! recomputation pass, which records the month's history snapshot when the
//! month has none yet.

use std::path::PathBuf;

use tracing::info;

use super::transaction::parse_month_or_current;
use crate::config::settings::Settings;
use crate::display::{
    format_balance_table, format_history, format_spend_chart, format_totals,
    format_unknown_categories,
};
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::export::{render_recap, RecapFormat};
use crate::services::{Ledger, Recomputation};
use crate::storage::write_atomic;

/// Recompute over the whole log, or over one month when `month` is given
fn recompute(ledger: &mut Ledger, month: Option<&str>) -> EnvelopeResult<Recomputation> {
    match month {
        Some(m) => {
            let month = parse_month_or_current(Some(m))?;
            Ok(ledger.recompute_month(month))
        }
        None => Ok(ledger.recompute(parse_month_or_current(None)?)),
    }
}

/// Handle the summary command
pub fn handle_summary_command(
    settings: &Settings,
    ledger: &mut Ledger,
    month: Option<String>,
) -> EnvelopeResult<()> {
    let result = recompute(ledger, month.as_deref())?;
    let symbol = &settings.currency_symbol;

    println!("Budget summary for {}", result.month);
    println!();
    print!("{}", format_balance_table(&result.balances, symbol));
    print!("{}", format_unknown_categories(&result.spend, symbol));
    println!();
    print!("{}", format_spend_chart(&result.spend, symbol));
    println!();
    print!(
        "{}",
        format_totals(&result.totals, settings.low_savings_threshold, symbol)
    );

    let overspent: Vec<_> = result.balances.overspent().collect();
    if !overspent.is_empty() {
        println!();
        for balance in overspent {
            println!(
                "Over budget: {} by {}",
                balance.category,
                settings.format_money(balance.remaining.abs())
            );
        }
    }

    if result.snapshot_written {
        println!();
        println!("Saved {} to history.", result.month);
    }

    Ok(())
}

/// Handle the history command
pub fn handle_history_command(settings: &Settings, ledger: &Ledger) -> EnvelopeResult<()> {
    print!(
        "{}",
        format_history(&ledger.state().history, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle the recap command
pub fn handle_recap_command(
    settings: &Settings,
    ledger: &mut Ledger,
    output: PathBuf,
    format: RecapFormat,
    month: Option<String>,
) -> EnvelopeResult<()> {
    let result = recompute(ledger, month.as_deref())?;

    let mut state = ledger.state().clone();
    if month.is_some() {
        state.transactions = ledger.transactions_in(result.month);
    }
    if state.username.is_empty() {
        state.username = settings.username.clone();
    }

    let document = render_recap(
        &state,
        &result.totals,
        &result.spend,
        format,
        &settings.currency_symbol,
    );

    write_atomic(&output, document.as_bytes())
        .map_err(|e| EnvelopeError::Export(format!("{}: {}", output.display(), e)))?;

    info!(path = %output.display(), ?format, "recap written");
    println!(
        "Wrote {} recap for {} to {}",
        format.extension(),
        result.month,
        output.display()
    );
    Ok(())
}
