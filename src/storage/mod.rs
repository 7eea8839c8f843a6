//! Storage layer for the envelope ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation: one session file with the full state, and optional per-month
//! transaction files.

pub mod file_io;
pub mod months;
pub mod session;

pub use file_io::{read_optional, read_required, write_atomic};
pub use months::MonthlyStore;
pub use session::SessionStore;

use crate::config::paths::EnvelopePaths;
use crate::error::EnvelopeError;

/// Outcome of a load that may have found nothing on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    /// Data read from an existing file
    Found(T),
    /// No file existed; an empty value was substituted
    Fresh(T),
}

impl<T> Loaded<T> {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Found(value) | Self::Fresh(value) => value,
        }
    }
}

/// Main storage coordinator
pub struct Storage {
    paths: EnvelopePaths,
    pub session: SessionStore,
    pub months: MonthlyStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: EnvelopePaths) -> Result<Self, EnvelopeError> {
        paths.ensure_directories()?;

        Ok(Self {
            session: SessionStore::new(paths.session_file()),
            months: MonthlyStore::new(paths.months_dir()),
            paths,
        })
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EnvelopePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("data").join("months").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_loaded_accessors() {
        assert!(Loaded::Fresh(1).is_fresh());
        assert!(!Loaded::Found(1).is_fresh());
        assert_eq!(Loaded::Found(5).into_inner(), 5);
    }
}
