//! Recomputation of per-envelope spend, balances and totals
//!
//! These are pure functions over the transaction log, the envelope set and
//! the income record. Negative balances and negative savings are ordinary
//! results, reported as data.

use std::collections::BTreeMap;

use crate::models::{EnvelopeSet, IncomeRecord, Money, Totals, Transaction};

/// Spend per envelope, plus spend booked against categories that have no
/// envelope
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySpend {
    /// One row per envelope, in envelope order
    by_envelope: Vec<(String, Money)>,
    /// Categories seen in transactions but missing from the envelope set
    unknown: BTreeMap<String, Money>,
}

impl CategorySpend {
    /// Spend for a category (envelope or unknown)
    pub fn get(&self, category: &str) -> Option<Money> {
        self.by_envelope
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, spent)| *spent)
            .or_else(|| self.unknown.get(category).copied())
    }

    /// Envelope rows in envelope order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.by_envelope
            .iter()
            .map(|(name, spent)| (name.as_str(), *spent))
    }

    /// Flagged categories that have no envelope, sorted by name
    pub fn unknown(&self) -> impl Iterator<Item = (&str, Money)> {
        self.unknown.iter().map(|(name, spent)| (name.as_str(), *spent))
    }

    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }

    /// Spend across envelopes
    pub fn total(&self) -> Money {
        self.by_envelope.iter().map(|(_, spent)| *spent).sum()
    }

    /// Spend across unknown categories
    pub fn unknown_total(&self) -> Money {
        self.unknown.values().sum()
    }

    /// Spend across every transaction, envelope or not
    pub fn grand_total(&self) -> Money {
        self.total() + self.unknown_total()
    }
}

/// Remaining budget for one envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBalance {
    pub category: String,
    pub cap: Money,
    pub spent: Money,
    /// Cap minus spend, negative when overspent
    pub remaining: Money,
}

impl CategoryBalance {
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Remaining budget for every envelope, in envelope order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBalances {
    rows: Vec<CategoryBalance>,
}

impl CategoryBalances {
    pub fn get(&self, category: &str) -> Option<&CategoryBalance> {
        self.rows.iter().find(|row| row.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryBalance> {
        self.rows.iter()
    }

    pub fn overspent(&self) -> impl Iterator<Item = &CategoryBalance> {
        self.rows.iter().filter(|row| row.is_overspent())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group the log by category and sum the amounts.
///
/// Every envelope gets a row, zero when nothing was spent in it. Amounts in
/// categories without an envelope are kept apart and flagged.
pub fn compute_summary(transactions: &[Transaction], envelopes: &EnvelopeSet) -> CategorySpend {
    let mut by_envelope: Vec<(String, Money)> = envelopes
        .names()
        .map(|name| (name.to_string(), Money::zero()))
        .collect();
    let mut unknown: BTreeMap<String, Money> = BTreeMap::new();

    for txn in transactions {
        match by_envelope.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, spent)) => *spent += txn.amount,
            None => *unknown.entry(txn.category.clone()).or_default() += txn.amount,
        }
    }

    CategorySpend {
        by_envelope,
        unknown,
    }
}

/// Cap minus spend for every envelope. No clamping.
pub fn compute_balances(spend: &CategorySpend, envelopes: &EnvelopeSet) -> CategoryBalances {
    let rows = envelopes
        .iter()
        .map(|envelope| {
            let spent = spend.get(&envelope.name).unwrap_or_default();
            CategoryBalance {
                category: envelope.name.clone(),
                cap: envelope.cap,
                spent,
                remaining: envelope.cap - spent,
            }
        })
        .collect();

    CategoryBalances { rows }
}

/// Total income, total envelope spend and the resulting savings
pub fn compute_totals(spend: &CategorySpend, income: &IncomeRecord) -> Totals {
    Totals::new(income.total(), spend.total())
}
