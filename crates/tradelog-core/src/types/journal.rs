//! Trade journal record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TradeMode;
use crate::error::InputError;

/// Fixed capital and risk amount for risk-reward journals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSettings {
    /// Capital before the first trade
    pub initial_capital: f64,
    /// Amount lost on a losing trade; wins pay `(multiple - 1)` times this
    pub risk_per_trade: f64,
}

impl RiskSettings {
    /// Create validated risk settings.
    pub fn new(initial_capital: f64, risk_per_trade: f64) -> Result<Self, InputError> {
        let settings = Self {
            initial_capital,
            risk_per_trade,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check that both amounts are finite and the risk is non-negative.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.initial_capital.is_finite() || !self.risk_per_trade.is_finite() {
            return Err(InputError::InvalidSettings(
                "capital and risk must be finite numbers".to_string(),
            ));
        }
        if self.risk_per_trade < 0.0 {
            return Err(InputError::InvalidSettings(format!(
                "risk per trade cannot be negative: {}",
                self.risk_per_trade
            )));
        }
        Ok(())
    }
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            initial_capital: 10_000.0,
            risk_per_trade: 100.0,
        }
    }
}

/// Ordered history of trade outcomes for one mode.
///
/// Insertion order is chronological. The statistics engine only ever reads
/// `returns`; mutation happens here, driven by the hosting application.
#[derive(Debug, Clone, PartialEq)]
pub struct Journal {
    /// Interpretation of `returns`
    pub mode: TradeMode,
    /// Fractional returns or risk-reward multiples, oldest first
    pub returns: Vec<f64>,
    /// Present for risk-reward journals
    pub risk: Option<RiskSettings>,
    /// When the journal was last persisted
    pub saved_at: Option<DateTime<Utc>>,
}

impl Journal {
    /// Create an empty return-rate journal.
    pub fn standard() -> Self {
        Self {
            mode: TradeMode::Standard,
            returns: Vec::new(),
            risk: None,
            saved_at: None,
        }
    }

    /// Create an empty risk-reward journal.
    pub fn risk_reward(settings: RiskSettings) -> Self {
        Self {
            mode: TradeMode::RiskReward,
            returns: Vec::new(),
            risk: Some(settings),
            saved_at: None,
        }
    }

    /// Create an empty journal for `mode`, using `settings` for risk-reward.
    pub fn empty(mode: TradeMode, settings: RiskSettings) -> Self {
        match mode {
            TradeMode::Standard => Self::standard(),
            TradeMode::RiskReward => Self::risk_reward(settings),
        }
    }

    /// Attach outcomes.
    pub fn with_returns(mut self, returns: Vec<f64>) -> Self {
        self.returns = returns;
        self
    }

    /// Append one validated outcome.
    pub fn record(&mut self, outcome: f64) -> Result<(), InputError> {
        self.mode.validate_entry(outcome)?;
        self.returns.push(outcome);
        Ok(())
    }

    /// Parse user input and append it.
    pub fn record_input(&mut self, text: &str) -> Result<f64, InputError> {
        let outcome = self.mode.parse_entry(text)?;
        self.returns.push(outcome);
        Ok(outcome)
    }

    /// Drop every recorded outcome, keeping the mode and risk settings.
    pub fn clear(&mut self) {
        self.returns.clear();
    }

    /// Recorded outcomes, oldest first.
    pub fn outcomes(&self) -> &[f64] {
        &self.returns
    }

    /// Number of recorded trades.
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Check if no trade has been recorded.
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Risk settings, falling back to defaults for journals that lack them.
    pub fn risk_settings(&self) -> RiskSettings {
        self.risk.unwrap_or_default()
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_validates_by_mode() {
        let mut journal = Journal::risk_reward(RiskSettings::default());
        assert!(journal.record(2.0).is_ok());
        assert!(journal.record(0.0).is_ok());
        assert_eq!(
            journal.record(-0.5),
            Err(InputError::NegativeMultiple(-0.5))
        );
        assert_eq!(journal.outcomes(), &[2.0, 0.0]);

        let mut journal = Journal::standard();
        assert!(journal.record(-0.5).is_ok());
        assert!(journal.record(f64::NAN).is_err());
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_record_input_converts_percent() {
        let mut journal = Journal::standard();
        let stored = journal.record_input("10").unwrap();
        assert!((stored - 0.1).abs() < 1e-12);
        assert!(journal.record_input("ten").is_err());
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_clear_keeps_settings() {
        let settings = RiskSettings::new(5000.0, 50.0).unwrap();
        let mut journal = Journal::risk_reward(settings).with_returns(vec![1.5, 0.0]);
        journal.clear();
        assert!(journal.is_empty());
        assert_eq!(journal.risk, Some(settings));
        assert_eq!(journal.mode, TradeMode::RiskReward);
    }

    #[test]
    fn test_risk_settings_validation() {
        assert!(RiskSettings::new(10_000.0, 100.0).is_ok());
        assert!(RiskSettings::new(10_000.0, -1.0).is_err());
        assert!(RiskSettings::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_risk_settings_serde() {
        let settings = RiskSettings::new(2500.0, 25.0).unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("initial_capital"));
        let back: RiskSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
