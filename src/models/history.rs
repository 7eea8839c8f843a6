//! Totals and the monthly savings history

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;
use super::period::MonthKey;

/// Aggregate figures for one recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    #[serde(rename = "revenus")]
    pub income: Money,

    #[serde(rename = "dépenses")]
    pub spend: Money,

    /// Income minus spend; negative when overspent
    #[serde(rename = "épargne")]
    pub savings: Money,
}

impl Totals {
    pub fn new(income: Money, spend: Money) -> Self {
        Self {
            income,
            spend,
            savings: income - spend,
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.savings.is_negative()
    }
}

/// Month-by-month snapshots, ordered by month
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistorySnapshot {
    months: BTreeMap<MonthKey, Totals>,
}

impl HistorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, month: &MonthKey) -> Option<&Totals> {
        self.months.get(month)
    }

    pub fn contains(&self, month: &MonthKey) -> bool {
        self.months.contains_key(month)
    }

    /// Insert only if the month has no snapshot yet; returns whether it wrote
    pub fn insert_if_absent(&mut self, month: MonthKey, totals: Totals) -> bool {
        if self.months.contains_key(&month) {
            return false;
        }
        self.months.insert(month, totals);
        true
    }

    /// Snapshots in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (&MonthKey, &Totals)> {
        self.months.iter()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

impl FromIterator<(MonthKey, Totals)> for HistorySnapshot {
    fn from_iter<I: IntoIterator<Item = (MonthKey, Totals)>>(iter: I) -> Self {
        Self {
            months: iter.into_iter().collect(),
        }
    }
}
