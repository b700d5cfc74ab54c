//! Validate configuration command.

use anyhow::{Context, Result};
use std::path::Path;

use super::Session;

pub fn run(config_path: &Path, session: &Session) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("File not found, using defaults and environment overrides");
    }

    println!("Configuration is valid!");
    println!();
    println!("{}", effective_config(session)?);

    Ok(())
}

/// Effective configuration as TOML, with the active mode.
fn effective_config(session: &Session) -> Result<String> {
    let mut config = session.config.clone();
    config.app.mode = session.mode;
    config
        .to_toml()
        .context("Failed to render configuration as TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradelog_config::AppConfig;
    use tradelog_core::TradeMode;

    #[test]
    fn test_effective_config_shows_active_mode() {
        let session = Session::new(AppConfig::default(), Some(TradeMode::RiskReward));
        let text = effective_config(&session).unwrap();

        assert!(text.contains("[app]"));
        assert!(text.contains("mode = \"risk_reward\""));
        assert!(text.contains("language = \"chinese\""));
        assert!(text.contains("[risk]"));
    }
}
