//! Income record
//!
//! The household declares four independent income figures for the current
//! period. They are exchanged as a positional array of four numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount(IncomeSource),
    AmountTooLarge(IncomeSource),
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(source) => write!(f, "{} cannot be negative", source),
            Self::AmountTooLarge(source) => {
                write!(f, "{} exceeds the maximum of {}", source, Money::MAX_ENTRY)
            }
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// One of the four income sources, in interchange order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeSource {
    PrimarySalary,
    SecondarySalary,
    SecondaryIncome,
    Allowances,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 4] = [
        Self::PrimarySalary,
        Self::SecondarySalary,
        Self::SecondaryIncome,
        Self::Allowances,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PrimarySalary => "Salaire 1",
            Self::SecondarySalary => "Salaire 2",
            Self::SecondaryIncome => "Revenu secondaire",
            Self::Allowances => "Aides / allocations",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current-period income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[Money; 4]", into = "[Money; 4]")]
pub struct IncomeRecord {
    pub primary_salary: Money,
    pub secondary_salary: Money,
    pub secondary_income: Money,
    pub allowances: Money,
}

impl IncomeRecord {
    pub fn new(
        primary_salary: Money,
        secondary_salary: Money,
        secondary_income: Money,
        allowances: Money,
    ) -> Self {
        Self {
            primary_salary,
            secondary_salary,
            secondary_income,
            allowances,
        }
    }

    /// Amount for a given source
    pub fn get(&self, source: IncomeSource) -> Money {
        match source {
            IncomeSource::PrimarySalary => self.primary_salary,
            IncomeSource::SecondarySalary => self.secondary_salary,
            IncomeSource::SecondaryIncome => self.secondary_income,
            IncomeSource::Allowances => self.allowances,
        }
    }

    /// Sources paired with their amounts, in interchange order
    pub fn breakdown(&self) -> [(IncomeSource, Money); 4] {
        IncomeSource::ALL.map(|source| (source, self.get(source)))
    }

    /// Sum of the four sources
    pub fn total(&self) -> Money {
        self.breakdown().iter().map(|(_, amount)| *amount).sum()
    }

    /// Validate that no source is negative
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        for (source, amount) in self.breakdown() {
            if amount.is_negative() {
                return Err(IncomeValidationError::NegativeAmount(source));
            }
            if !amount.is_within_entry_limit() {
                return Err(IncomeValidationError::AmountTooLarge(source));
            }
        }
        Ok(())
    }
}

impl From<[Money; 4]> for IncomeRecord {
    fn from(values: [Money; 4]) -> Self {
        let [primary_salary, secondary_salary, secondary_income, allowances] = values;
        Self::new(primary_salary, secondary_salary, secondary_income, allowances)
    }
}

impl From<IncomeRecord> for [Money; 4] {
    fn from(record: IncomeRecord) -> Self {
        [
            record.primary_salary,
            record.secondary_salary,
            record.secondary_income,
            record.allowances,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let income = IncomeRecord::new(
            Money::from_units(2000),
            Money::from_units(1500),
            Money::zero(),
            Money::zero(),
        );
        assert_eq!(income.total(), Money::from_units(3500));
    }

    #[test]
    fn test_validation_negative_amount() {
        let income = IncomeRecord::new(
            Money::from_units(2000),
            Money::zero(),
            Money::zero(),
            Money::from_cents(-1),
        );
        assert_eq!(
            income.validate(),
            Err(IncomeValidationError::NegativeAmount(IncomeSource::Allowances))
        );
    }

    #[test]
    fn test_positional_serialization() {
        let income = IncomeRecord::new(
            Money::from_units(2000),
            Money::from_cents(150_050),
            Money::zero(),
            Money::from_units(120),
        );
        let json = serde_json::to_string(&income).unwrap();
        assert_eq!(json, "[2000.0,1500.5,0.0,120.0]");

        let back: IncomeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, income);
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        assert!(serde_json::from_str::<IncomeRecord>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<IncomeRecord>("[1, 2, 3, 4, 5]").is_err());
    }
}
