//! File-backed journal store.

use chrono::Utc;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tradelog_core::{Journal, RiskSettings, StoreError, TradeMode};

use crate::JournalFile;

/// Reads and writes journals under a data directory.
#[derive(Debug, Clone)]
pub struct JournalStore {
    data_dir: PathBuf,
}

impl JournalStore {
    /// Create a store rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the journal file for a mode.
    pub fn path(&self, mode: TradeMode) -> PathBuf {
        self.data_dir.join(mode.file_name())
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Check whether a journal was saved before.
    pub fn exists(&self, mode: TradeMode) -> bool {
        self.path(mode).is_file()
    }

    /// Load the journal for a mode. `Ok(None)` on first run.
    pub fn load(
        &self,
        mode: TradeMode,
        fallback: RiskSettings,
    ) -> Result<Option<Journal>, StoreError> {
        let path = self.path(mode);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved journal");
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        let file: JournalFile =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let journal = file
            .into_journal(mode, fallback)
            .map_err(|e| StoreError::Corrupt {
                path: path.clone(),
                message: e.to_string(),
            })?;
        info!(path = %path.display(), trades = journal.len(), "loaded journal");
        Ok(Some(journal))
    }

    /// Load the journal for a mode, or start an empty one.
    pub fn load_or_default(
        &self,
        mode: TradeMode,
        settings: RiskSettings,
    ) -> Result<Journal, StoreError> {
        Ok(self
            .load(mode, settings)?
            .unwrap_or_else(|| Journal::empty(mode, settings)))
    }

    /// Save a journal, stamping `saved_at`. Creates the data directory if needed.
    pub fn save(&self, journal: &mut Journal) -> Result<PathBuf, StoreError> {
        let path = self.path(journal.mode);
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Write {
            path: self.data_dir.clone(),
            source,
        })?;

        journal.saved_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(&JournalFile::from_journal(journal))
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&path, json).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), trades = journal.len(), "saved journal");
        Ok(path)
    }

    /// Delete the saved journal for a mode. A missing file is not an error.
    pub fn clear(&self, mode: TradeMode) -> Result<(), StoreError> {
        let path = self.path(mode);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "cleared journal");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove { path, source }),
        }
    }
}
