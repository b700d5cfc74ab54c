//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tradelog_core::{InputError, RiskSettings, TradeMode};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub risk: RiskDefaults,
}

impl AppConfig {
    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), InputError> {
        self.risk.settings().validate()?;
        if self.risk.initial_capital <= 0.0 {
            return Err(InputError::InvalidSettings(format!(
                "initial capital must be positive: {}",
                self.risk.initial_capital
            )));
        }
        Ok(())
    }

    /// Render as TOML, e.g. to seed a config file.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    /// The other language.
    pub fn toggle(self) -> Self {
        match self {
            Language::Chinese => Language::English,
            Language::English => Language::Chinese,
        }
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub language: Language,
    pub theme: Theme,
    pub mode: TradeMode,
    /// Directory holding the journal files
    pub data_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            mode: TradeMode::default(),
            data_dir: PathBuf::from("."),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Check if JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Defaults for new risk-reward journals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskDefaults {
    pub initial_capital: f64,
    pub risk_per_trade: f64,
}

impl RiskDefaults {
    /// As journal risk settings.
    pub fn settings(&self) -> RiskSettings {
        RiskSettings {
            initial_capital: self.initial_capital,
            risk_per_trade: self.risk_per_trade,
        }
    }
}

impl Default for RiskDefaults {
    fn default() -> Self {
        let settings = RiskSettings::default();
        Self {
            initial_capital: settings.initial_capital,
            risk_per_trade: settings.risk_per_trade,
        }
    }
}
