//! Session store
//!
//! The session file holds the full ledger state in the interchange format,
//! so it can be handed to `import` on another machine as-is.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::export::json;
use crate::models::LedgerState;

use super::file_io::{read_optional, write_atomic};
use super::Loaded;

/// Reads and writes the session state file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the session state.
    ///
    /// A missing file yields `Loaded::Fresh` with an empty state for
    /// `username`; a corrupt file is an error.
    pub fn load(&self, username: &str) -> EnvelopeResult<Loaded<LedgerState>> {
        match read_optional(&self.path)? {
            Some(bytes) => {
                let state = json::deserialize(&bytes).map_err(|e| {
                    EnvelopeError::Storage(format!("{} is unreadable: {}", self.path.display(), e))
                })?;
                Ok(Loaded::Found(state))
            }
            None => {
                warn!(path = %self.path.display(), "no session file, starting an empty ledger");
                Ok(Loaded::Fresh(LedgerState::new(username)))
            }
        }
    }

    /// Save the session state atomically
    pub fn save(&self, state: &LedgerState) -> EnvelopeResult<()> {
        let bytes = json::serialize(state)?;
        write_atomic(&self.path, &bytes)?;
        info!(
            path = %self.path.display(),
            transactions = state.transactions.len(),
            "session saved"
        );
        Ok(())
    }
}
