//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod debt;
pub mod envelope;
pub mod export;
pub mod income;
pub mod month;
pub mod report;
pub mod transaction;

pub use debt::{handle_debt_command, DebtCommands};
pub use envelope::{handle_envelope_command, EnvelopeCommands};
pub use export::{handle_export_command, handle_import_command, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use month::{handle_month_command, MonthCommands};
pub use report::{handle_history_command, handle_recap_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};
