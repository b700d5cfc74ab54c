//! Journal persistence.
//!
//! Each mode is stored in its own JSON file inside a data directory. Loading
//! and saving are explicit operations; the hosting application calls them at
//! startup and shutdown.

mod file;
mod store;

pub use file::JournalFile;
pub use store::JournalStore;

use std::path::Path;
use tradelog_core::{Journal, JournalResult, RiskSettings, TradeMode};

/// Load the journal for `mode` from `data_dir`, or start an empty one.
pub fn load_journal(
    data_dir: &Path,
    mode: TradeMode,
    settings: RiskSettings,
) -> JournalResult<Journal> {
    Ok(JournalStore::new(data_dir).load_or_default(mode, settings)?)
}
