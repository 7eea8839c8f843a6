//! Per-month transaction files
//!
//! Each month is stored as a bare array of transactions in
//! `transactions_YYYY-MM.json` under the months directory.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::export::json;
use crate::models::{MonthKey, Transaction};

use super::file_io::{read_optional, write_atomic};
use super::Loaded;

const FILE_PREFIX: &str = "transactions_";
const FILE_SUFFIX: &str = ".json";

/// Reads and writes per-month transaction files
#[derive(Debug, Clone)]
pub struct MonthlyStore {
    dir: PathBuf,
}

impl MonthlyStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file for a month
    pub fn file_for(&self, month: MonthKey) -> PathBuf {
        self.dir
            .join(format!("{}{}{}", FILE_PREFIX, month, FILE_SUFFIX))
    }

    /// Load a month's transactions; a missing file yields `Loaded::Fresh`
    pub fn load(&self, month: MonthKey) -> EnvelopeResult<Loaded<Vec<Transaction>>> {
        let path = self.file_for(month);
        match read_optional(&path)? {
            Some(bytes) => {
                let transactions = json::decode_transactions(&bytes).map_err(|e| {
                    EnvelopeError::Storage(format!("{} is unreadable: {}", path.display(), e))
                })?;
                Ok(Loaded::Found(transactions))
            }
            None => {
                warn!(%month, "no transaction file for month, starting empty");
                Ok(Loaded::Fresh(Vec::new()))
            }
        }
    }

    /// Save a month's transactions atomically
    pub fn save(&self, month: MonthKey, transactions: &[Transaction]) -> EnvelopeResult<()> {
        let bytes = json::encode_transactions(transactions)?;
        write_atomic(self.file_for(month), &bytes)?;
        info!(%month, count = transactions.len(), "month file saved");
        Ok(())
    }

    /// Months that have a file, oldest first
    pub fn list(&self) -> EnvelopeResult<Vec<MonthKey>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(EnvelopeError::Storage(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        let mut months = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let key = name
                .strip_prefix(FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
                .and_then(|label| MonthKey::parse(label).ok());
            if let Some(key) = key {
                months.push(key);
            }
        }

        months.sort();
        Ok(months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn month(m: u32) -> MonthKey {
        MonthKey::new(2025, m).unwrap()
    }

    #[test]
    fn test_file_name() {
        let dir = PathBuf::from("data").join("months");
        let store = MonthlyStore::new(dir.clone());
        assert_eq!(
            store.file_for(month(3)),
            dir.join("transactions_2025-03.json")
        );
    }

    #[test]
    fn test_save_load_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let store = MonthlyStore::new(temp_dir.path().join("months"));

        let transactions = vec![Transaction::new(
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            "Transport",
            Money::from_units(20),
        )];
        store.save(month(3), &transactions).unwrap();
        store.save(month(1), &[]).unwrap();
        std::fs::write(temp_dir.path().join("months").join("notes.txt"), "x").unwrap();

        let loaded = store.load(month(3)).unwrap();
        assert!(!loaded.is_fresh());
        assert_eq!(loaded.into_inner(), transactions);

        assert_eq!(store.list().unwrap(), vec![month(1), month(3)]);
    }

    #[test]
    fn test_missing_month_is_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let store = MonthlyStore::new(temp_dir.path().join("months"));

        let loaded = store.load(month(7)).unwrap();
        assert!(loaded.is_fresh());
        assert!(loaded.into_inner().is_empty());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_file_is_a_bare_array() {
        let temp_dir = TempDir::new().unwrap();
        let store = MonthlyStore::new(temp_dir.path().to_path_buf());
        store.save(month(2), &[]).unwrap();

        let content = std::fs::read_to_string(store.file_for(month(2))).unwrap();
        assert_eq!(content.trim(), "[]");
    }
}
