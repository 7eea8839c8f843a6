//! Debt entries
//!
//! Debts are informational: they are listed in the recap but never
//! subtracted from envelope balances.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::MonthKey;

/// Validation errors for debt entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    EmptyName,
    NegativeTotal,
    NegativePayment,
    AmountTooLarge,
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Debt name cannot be empty"),
            Self::NegativeTotal => write!(f, "Debt total cannot be negative"),
            Self::NegativePayment => write!(f, "Debt payment cannot be negative"),
            Self::AmountTooLarge => {
                write!(f, "Debt amounts cannot exceed {}", Money::MAX_ENTRY)
            }
        }
    }
}

impl std::error::Error for DebtValidationError {}

/// A debt and what was paid on it in a given month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtEntry {
    #[serde(rename = "Nom")]
    pub name: String,

    #[serde(rename = "Montant total")]
    pub total_amount: Money,

    #[serde(rename = "Payé ce mois")]
    pub paid_this_month: Money,

    #[serde(rename = "Mois")]
    pub month: MonthKey,
}

impl DebtEntry {
    pub fn new(
        name: impl Into<String>,
        total_amount: Money,
        paid_this_month: Money,
        month: MonthKey,
    ) -> Self {
        Self {
            name: name.into(),
            total_amount,
            paid_this_month,
            month,
        }
    }

    /// What is left after this month's payment (negative if overpaid)
    pub fn remaining(&self) -> Money {
        self.total_amount - self.paid_this_month
    }

    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.name.trim().is_empty() {
            return Err(DebtValidationError::EmptyName);
        }
        if self.total_amount.is_negative() {
            return Err(DebtValidationError::NegativeTotal);
        }
        if self.paid_this_month.is_negative() {
            return Err(DebtValidationError::NegativePayment);
        }
        if !self.total_amount.is_within_entry_limit()
            || !self.paid_this_month.is_within_entry_limit()
        {
            return Err(DebtValidationError::AmountTooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn january() -> MonthKey {
        MonthKey::new(2025, 1).unwrap()
    }

    #[test]
    fn test_remaining() {
        let debt = DebtEntry::new("Crédit auto", Money::from_units(8000), Money::from_units(250), january());
        assert_eq!(debt.remaining(), Money::from_units(7750));
    }

    #[test]
    fn test_validation() {
        let debt = DebtEntry::new("", Money::zero(), Money::zero(), january());
        assert_eq!(debt.validate(), Err(DebtValidationError::EmptyName));

        let debt = DebtEntry::new("Prêt", Money::from_cents(-1), Money::zero(), january());
        assert_eq!(debt.validate(), Err(DebtValidationError::NegativeTotal));

        let debt = DebtEntry::new("Prêt", Money::zero(), Money::from_cents(-1), january());
        assert_eq!(debt.validate(), Err(DebtValidationError::NegativePayment));
    }

    #[test]
    fn test_interchange_field_names() {
        let debt = DebtEntry::new("Prêt étudiant", Money::from_units(5000), Money::from_units(100), january());
        let json = serde_json::to_value(&debt).unwrap();
        assert_eq!(json["Nom"], "Prêt étudiant");
        assert_eq!(json["Montant total"], 5000.0);
        assert_eq!(json["Payé ce mois"], 100.0);
        assert_eq!(json["Mois"], "2025-01");
    }
}
