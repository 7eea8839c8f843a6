//! Configuration module for the envelope ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (display name, currency, envelope caps)

pub mod paths;
pub mod settings;

pub use paths::EnvelopePaths;
pub use settings::Settings;
