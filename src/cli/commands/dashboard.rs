//! Dashboard command: interactive journal.

use anyhow::{Context, Result};
use tracing::info;
use tradelog_monitor::{Dashboard, DashboardState};

use super::Session;
use crate::cli::DashboardArgs;

pub fn run(args: DashboardArgs, session: &Session) -> Result<()> {
    let journal = session.load_journal()?;
    let mut state = DashboardState::new(
        journal,
        session.config.app.language,
        session.config.app.theme,
    );

    info!(mode = %session.mode, trades = state.journal.len(), "starting dashboard");
    let result = Dashboard::new(args.refresh_ms).run(&mut state);

    // Save whatever was recorded, even if the terminal failed
    session.save_journal(&mut state.journal)?;
    result.context("Dashboard terminated with an error")
}
