//! Init command: start a risk-reward journal.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead};
use tracing::info;
use tradelog_core::{Journal, RiskSettings, TradeMode};

use super::{prompt_line, Session};
use crate::cli::InitArgs;

pub fn run(args: InitArgs, session: &Session) -> Result<()> {
    let stdin = io::stdin();
    init_with(args, session, &mut stdin.lock())
}

fn init_with<R: BufRead>(args: InitArgs, session: &Session, input: &mut R) -> Result<()> {
    if session.store.exists(TradeMode::RiskReward) && !args.force {
        bail!(
            "A risk-reward journal already exists at {}. Use --force to replace it.",
            session.store.path(TradeMode::RiskReward).display()
        );
    }

    let settings = resolve_settings(&args, session, input)?;

    let mut journal = Journal::risk_reward(settings);
    session.save_journal(&mut journal)?;

    info!(
        initial_capital = settings.initial_capital,
        risk_per_trade = settings.risk_per_trade,
        "initialized risk-reward journal"
    );
    println!(
        "Initial capital: {:.2}, risk per trade: {:.2}",
        settings.initial_capital, settings.risk_per_trade
    );
    Ok(())
}

/// Use the given values, prompting for whichever is missing.
fn resolve_settings<R: BufRead>(
    args: &InitArgs,
    session: &Session,
    input: &mut R,
) -> Result<RiskSettings> {
    let t = session.translations();

    let capital = match args.capital {
        Some(value) => value,
        None => read_amount(input, t.capital_input)?,
    };
    let risk = match args.risk {
        Some(value) => value,
        None => read_amount(input, t.risk_input)?,
    };

    if capital <= 0.0 {
        bail!("Initial capital must be positive, got {}", capital);
    }
    RiskSettings::new(capital, risk).context("Invalid risk settings")
}

fn read_amount<R: BufRead>(input: &mut R, label: &str) -> Result<f64> {
    let text = prompt_line(input, label)?;
    text.parse::<f64>()
        .with_context(|| format!("'{}' is not a valid number", text))
}
