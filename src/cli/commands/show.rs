//! Show command: print journal statistics.

use anyhow::Result;
use tradelog_stats::JournalReport;

use super::Session;
use crate::cli::ShowArgs;

pub fn run(args: ShowArgs, session: &Session) -> Result<()> {
    println!("{}", render(&args, session)?);
    Ok(())
}

fn render(args: &ShowArgs, session: &Session) -> Result<String> {
    let journal = session.load_journal()?;
    let report = JournalReport::new(&journal);

    // Output results
    match args.output.as_str() {
        "json" => Ok(report.to_json()?),
        _ => {
            let mut text = report.summary();
            for line in session.translations().metric_lines(&report.stats) {
                text.push_str(&line);
                text.push('\n');
            }
            Ok(text)
        }
    }
}
