//! Envelope Ledger - household envelope budgeting from the terminal
//!
//! This library provides the core of the `envelope` command: category
//! budgets ("envelopes"), a transaction log, four income sources, and the
//! recomputation that turns them into per-envelope balances, total spend
//! and a savings figure, plus a write-once monthly history.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, envelopes, transactions, income, debts)
//! - `services`: The `Ledger` and the summary computations
//! - `export`: Interchange JSON, recap documents and CSV
//! - `storage`: JSON file storage layer
//! - `display`: Terminal tables and charts
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use envelope_ledger::config::{paths::EnvelopePaths, settings::Settings};
//! use envelope_ledger::services::Ledger;
//! use envelope_ledger::storage::Storage;
//!
//! let paths = EnvelopePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let state = storage.session.load(&settings.username)?.into_inner();
//! let mut ledger = Ledger::new(state, settings.envelopes.clone());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{EnvelopeError, EnvelopeResult};
