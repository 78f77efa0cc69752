//! Persistence mirror for the ledger.
//!
//! The whole ledger lives in a single JSON file holding the encoded record
//! array, the file-system rendition of a one-key local storage slot. There
//! is no versioning and no migration: the file is overwritten wholesale
//! after every mutation and re-read only at startup.
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{Ledger, ResultEngine};

#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted ledger.
    ///
    /// A missing file yields an empty ledger. So does a blob that fails to
    /// deserialize: a corrupted file must never prevent startup, and it is
    /// only overwritten on the next mutation. Other I/O failures propagate.
    pub fn load(&self) -> ResultEngine<Ledger> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Ledger::default());
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    /// Serializes the full ledger and overwrites the slot.
    ///
    /// Called after every mutation, not batched. Parent directories are
    /// created on first save.
    pub fn save(&self, ledger: &Ledger) -> ResultEngine<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(ledger)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
