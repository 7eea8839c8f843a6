//! Transaction model
//!
//! A transaction is a dated, non-negative expense booked against one
//! envelope. Field names follow the interchange format of exported files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::MonthKey;

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative ({})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Transaction amount {} exceeds the maximum of {}",
                amount,
                Money::MAX_ENTRY
            ),
            Self::EmptyCategory => write!(f, "Transaction category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// A single expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    /// Envelope the expense is booked against
    #[serde(rename = "Catégorie")]
    pub category: String,

    /// Amount spent (never negative)
    #[serde(rename = "Montant", alias = "Montant (€)")]
    pub amount: Money,

    /// Free-text description, empty when none was given
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction without a description
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: String::new(),
        }
    }

    /// Create a transaction with a description
    pub fn with_description(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(date, category, amount);
        txn.description = description.into();
        txn
    }

    /// The description, if one was given
    pub fn description(&self) -> Option<&str> {
        if self.description.trim().is_empty() {
            None
        } else {
            Some(&self.description)
        }
    }

    /// The month this transaction falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.date)
    }

    /// Validate the transaction on its own (envelope membership is checked
    /// by the ledger)
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if !self.amount.is_within_entry_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date.format("%Y-%m-%d"), self.category, self.amount)?;
        if let Some(description) = self.description() {
            write!(f, " ({})", description)?;
        }
        Ok(())
    }
}
