//! Command implementations.

pub mod add;
pub mod clear;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod list;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tradelog_config::AppConfig;
use tradelog_core::{Journal, TradeMode};
use tradelog_monitor::Translations;
use tradelog_store::JournalStore;

/// Shared state for one CLI invocation.
pub struct Session {
    pub config: AppConfig,
    pub mode: TradeMode,
    pub store: JournalStore,
}

impl Session {
    /// Build a session; `mode` overrides the configured mode.
    pub fn new(config: AppConfig, mode: Option<TradeMode>) -> Self {
        let mode = mode.unwrap_or(config.app.mode);
        let store = JournalStore::new(config.app.data_dir.clone());
        Self {
            config,
            mode,
            store,
        }
    }

    /// Load the journal for the active mode, or an empty one on first run.
    pub fn load_journal(&self) -> Result<Journal> {
        tradelog_store::load_journal(self.store.data_dir(), self.mode, self.config.risk.settings())
            .with_context(|| format!("Failed to load {} journal", self.mode))
    }

    /// Save a journal to the data directory.
    pub fn save_journal(&self, journal: &mut Journal) -> Result<()> {
        self.store
            .save(journal)
            .with_context(|| format!("Failed to save {} journal", journal.mode))?;
        Ok(())
    }

    /// Strings in the configured language.
    pub fn translations(&self) -> &'static Translations {
        Translations::get(self.config.app.language)
    }
}

/// Print `label` and read one trimmed line from `input`.
pub fn prompt_line<R: BufRead>(input: &mut R, label: &str) -> Result<String> {
    print!("{} ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line.trim().to_string())
}
