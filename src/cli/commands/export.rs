//! Export command: write the curve as CSV.

use anyhow::{Context, Result};
use std::fs::File;
use tracing::info;
use tradelog_stats::JournalReport;

use super::Session;
use crate::cli::ExportArgs;

pub fn run(args: ExportArgs, session: &Session) -> Result<()> {
    let journal = session.load_journal()?;
    let report = JournalReport::new(&journal);

    let file = File::create(&args.path)
        .with_context(|| format!("Failed to create {}", args.path.display()))?;
    report
        .curve_to_csv(file)
        .with_context(|| format!("Failed to write {}", args.path.display()))?;

    info!(path = %args.path.display(), points = report.stats.curve.len(), "exported curve");
    Ok(())
}
