//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display,
//! including tables, bar charts, and status indicators.

pub mod ledger;
pub mod report;

pub use ledger::{
    format_balance_table, format_debt_table, format_envelope_list, format_history,
    format_spend_chart, format_totals, format_transaction_table, format_unknown_categories,
};
pub use report::{balance_marker, SavingsBand};
