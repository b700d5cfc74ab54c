//! Trade recording modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// How each recorded outcome is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TradeMode {
    /// Fractional return per trade, compounded into a cumulative return curve
    #[default]
    Standard,
    /// Risk-reward multiple per trade against a fixed risk amount
    RiskReward,
}

impl TradeMode {
    /// Name of the file the journal for this mode is persisted to.
    pub fn file_name(&self) -> &'static str {
        match self {
            TradeMode::Standard => "standard_data.json",
            TradeMode::RiskReward => "risk_data.json",
        }
    }

    /// Get all modes.
    pub fn all() -> &'static [TradeMode] {
        &[TradeMode::Standard, TradeMode::RiskReward]
    }

    /// Parse user input into a stored outcome.
    ///
    /// Standard mode takes a percentage and stores the fraction (`5` -> `0.05`).
    /// Risk-reward mode takes the multiple as-is and rejects negative values;
    /// `0` records a full loss of the risk amount.
    pub fn parse_entry(&self, text: &str) -> Result<f64, InputError> {
        let trimmed = text.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| InputError::InvalidNumber(trimmed.to_string()))?;
        self.validate_entry(value)?;

        Ok(match self {
            TradeMode::Standard => value / 100.0,
            TradeMode::RiskReward => value,
        })
    }

    /// Check a raw value before it is recorded.
    pub fn validate_entry(&self, value: f64) -> Result<(), InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite(value));
        }
        if *self == TradeMode::RiskReward && value < 0.0 {
            return Err(InputError::NegativeMultiple(value));
        }
        Ok(())
    }
}

impl fmt::Display for TradeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TradeMode::Standard => "standard",
            TradeMode::RiskReward => "risk_reward",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TradeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "return" | "returns" => Ok(TradeMode::Standard),
            "risk_reward" | "risk-reward" | "risk" | "rr" => Ok(TradeMode::RiskReward),
            _ => {
                let valid: Vec<String> = TradeMode::all().iter().map(|m| m.to_string()).collect();
                Err(format!(
                    "Invalid trade mode: {} (expected one of: {})",
                    s,
                    valid.join(", ")
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent_entry() {
        let value = TradeMode::Standard.parse_entry("5").unwrap();
        assert!((value - 0.05).abs() < 1e-12);

        let value = TradeMode::Standard.parse_entry(" -12.5 ").unwrap();
        assert!((value + 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_parse_multiple_entry() {
        assert_eq!(TradeMode::RiskReward.parse_entry("2.5").unwrap(), 2.5);
        assert_eq!(TradeMode::RiskReward.parse_entry("0").unwrap(), 0.0);
    }

    #[test]
    fn test_negative_multiple_rejected() {
        assert_eq!(
            TradeMode::RiskReward.parse_entry("-1"),
            Err(InputError::NegativeMultiple(-1.0))
        );
        // Negative returns are ordinary losses in standard mode
        assert!(TradeMode::Standard.parse_entry("-1").is_ok());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            TradeMode::Standard.parse_entry("abc"),
            Err(InputError::InvalidNumber(_))
        ));
        assert!(matches!(
            TradeMode::Standard.parse_entry(""),
            Err(InputError::InvalidNumber(_))
        ));
        assert!(matches!(
            TradeMode::RiskReward.parse_entry("inf"),
            Err(InputError::NotFinite(_))
        ));
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!(TradeMode::from_str("rr").unwrap(), TradeMode::RiskReward);
        assert_eq!(TradeMode::from_str("Standard").unwrap(), TradeMode::Standard);
        let err = TradeMode::from_str("futures").unwrap_err();
        assert_eq!(
            err,
            "Invalid trade mode: futures (expected one of: standard, risk_reward)"
        );
        assert_eq!(TradeMode::RiskReward.to_string(), "risk_reward");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(TradeMode::Standard.file_name(), "standard_data.json");
        assert_eq!(TradeMode::RiskReward.file_name(), "risk_data.json");
    }
}
