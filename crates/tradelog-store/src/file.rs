//! On-disk journal format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tradelog_core::{InputError, Journal, RiskSettings, TradeMode};

/// JSON record as written to `standard_data.json` / `risk_data.json`.
///
/// Only `returns` is required. Risk-reward files also carry the capital and
/// risk amount; `saved_at` is optional so older files still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalFile {
    #[serde(default)]
    pub returns: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_capital: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_per_trade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl JournalFile {
    /// Convert a journal into its file record.
    pub fn from_journal(journal: &Journal) -> Self {
        let risk = match journal.mode {
            TradeMode::Standard => None,
            TradeMode::RiskReward => Some(journal.risk_settings()),
        };

        Self {
            returns: journal.returns.clone(),
            initial_capital: risk.map(|r| r.initial_capital),
            risk_per_trade: risk.map(|r| r.risk_per_trade),
            saved_at: journal.saved_at,
        }
    }

    /// Convert back into a journal for `mode`.
    ///
    /// Saved risk settings take precedence; `fallback` fills in whatever the
    /// file lacks. The merged settings must pass the same checks as entry.
    pub fn into_journal(
        self,
        mode: TradeMode,
        fallback: RiskSettings,
    ) -> Result<Journal, InputError> {
        let risk = match mode {
            TradeMode::Standard => None,
            TradeMode::RiskReward => Some(RiskSettings::new(
                self.initial_capital.unwrap_or(fallback.initial_capital),
                self.risk_per_trade.unwrap_or(fallback.risk_per_trade),
            )?),
        };

        Ok(Journal {
            mode,
            returns: self.returns,
            risk,
            saved_at: self.saved_at,
        })
    }
}
