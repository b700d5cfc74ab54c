//! Add command: record one trade.

use anyhow::{anyhow, Result};
use tracing::{info, warn};
use tradelog_stats::JournalStats;

use super::Session;
use crate::cli::AddArgs;

pub fn run(args: AddArgs, session: &Session) -> Result<()> {
    let t = session.translations();
    let mut journal = session.load_journal()?;

    let outcome = match journal.record_input(&args.value) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(input = %args.value, error = %e, "rejected trade entry");
            return Err(anyhow!(t.entry_error(&e)));
        }
    };
    session.save_journal(&mut journal)?;
    info!(mode = %journal.mode, outcome, trades = journal.len(), "recorded trade");

    println!("{}", t.trade_item(journal.mode, journal.len(), outcome));
    for line in t.metric_lines(&JournalStats::compute(&journal)) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tradelog_config::AppConfig;
    use tradelog_core::TradeMode;

    fn session_in(dir: &std::path::Path, mode: TradeMode) -> Session {
        let mut config = AppConfig::default();
        config.app.data_dir = dir.to_path_buf();
        Session::new(config, Some(mode))
    }

    fn add(value: &str, session: &Session) -> Result<()> {
        run(
            AddArgs {
                value: value.to_string(),
            },
            session,
        )
    }

    #[test]
    fn test_add_persists() {
        let dir = tempdir().unwrap();
        let session = session_in(dir.path(), TradeMode::Standard);

        add("10", &session).unwrap();
        add("-5", &session).unwrap();

        let journal = session.load_journal().unwrap();
        assert_eq!(journal.len(), 2);
        assert!((journal.returns[0] - 0.1).abs() < 1e-12);
        assert!((journal.returns[1] + 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_rejected_entry_not_saved() {
        let dir = tempdir().unwrap();
        let session = session_in(dir.path(), TradeMode::RiskReward);

        assert!(add("-2", &session).is_err());
        assert!(add("abc", &session).is_err());
        assert!(!session.store.exists(TradeMode::RiskReward));

        add("0", &session).unwrap();
        assert_eq!(session.load_journal().unwrap().returns, vec![0.0]);
    }
}
