//! List command: print recorded trades.

use anyhow::Result;

use super::Session;

pub fn run(session: &Session) -> Result<()> {
    for line in render(session)? {
        println!("{}", line);
    }
    Ok(())
}

fn render(session: &Session) -> Result<Vec<String>> {
    let t = session.translations();
    let journal = session.load_journal()?;

    let mut lines = vec![t.trade_record.to_string()];
    if journal.is_empty() {
        lines.push("  -".to_string());
    }
    for (i, outcome) in journal.outcomes().iter().enumerate() {
        lines.push(format!("  {}", t.trade_item(journal.mode, i + 1, *outcome)));
    }
    Ok(lines)
}
