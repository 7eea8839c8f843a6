//! Export module for the envelope ledger
//!
//! - JSON: the interchange format for the full state and per-month files
//! - Recap: HTML or plain-text summary documents
//! - CSV: the transaction log for spreadsheets

pub mod csv;
pub mod json;
pub mod recap;

pub use self::csv::export_transactions_csv;
pub use json::{decode_transactions, deserialize, encode_transactions, serialize};
pub use recap::{escape_html, escape_text, render_recap, RecapFormat};
