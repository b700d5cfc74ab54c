//! Clear command: delete the journal history.

use anyhow::Result;
use std::io::{self, BufRead};
use tracing::info;

use super::{prompt_line, Session};
use crate::cli::ClearArgs;

pub fn run(args: ClearArgs, session: &Session) -> Result<()> {
    let stdin = io::stdin();
    clear_with(args, session, &mut stdin.lock())
}

fn clear_with<R: BufRead>(args: ClearArgs, session: &Session, input: &mut R) -> Result<()> {
    if !args.yes {
        let t = session.translations();
        let answer = prompt_line(input, &format!("{} (y/N)", t.confirm_clear_history))?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Cancelled");
            return Ok(());
        }
    }

    session.store.clear(session.mode)?;
    info!(mode = %session.mode, "history cleared");
    Ok(())
}
