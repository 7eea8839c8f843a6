//! Custom error types for the envelope ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed interchange payload
    #[error("Decode error at line {line}, column {column}: {message}")]
    Decode {
        message: String,
        line: usize,
        column: usize,
    },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A transaction names a category that has no envelope
    #[error("Unknown category: '{category}' has no envelope")]
    UnknownCategory { category: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl EnvelopeError {
    /// Create a "not found" error for envelopes
    pub fn envelope_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Envelope",
            identifier: identifier.into(),
        }
    }

    /// Create an "unknown category" error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownCategory { .. })
    }

    /// Check if this is a decoding failure
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EnvelopeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EnvelopeError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return Self::Io(err.to_string());
        }
        Self::Decode {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Result type alias for ledger operations
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
