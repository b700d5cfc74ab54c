//! Journal statistics.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tradelog_core::{Journal, TradeMode};

use crate::capital::{capital_curve, profit_losses};
use crate::drawdown::max_drawdown_or_zero;
use crate::returns::cumulative_returns;
use crate::streak::{longest_streak_by, Outcome, StreakSummary};

/// Everything a journal view displays, recomputed from the full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalStats {
    /// Mode the values were computed for
    pub mode: TradeMode,
    /// Number of recorded trades
    pub trade_count: usize,
    /// Cumulative return curve (standard) or capital curve (risk-reward)
    pub curve: Vec<f64>,
    /// Total return as a fraction (standard) or current capital (risk-reward)
    pub headline: f64,
    /// Worst drawdown, in the curve's unit; 0 with no trades
    pub max_drawdown: f64,
    /// Longest win/loss runs
    pub streaks: StreakSummary,
}

impl JournalStats {
    /// Compute statistics for a journal.
    pub fn compute(journal: &Journal) -> Self {
        let stats = match journal.mode {
            TradeMode::Standard => Self::standard(journal.outcomes()),
            TradeMode::RiskReward => Self::risk_reward(journal),
        };
        debug!(
            mode = %stats.mode,
            trades = stats.trade_count,
            headline = stats.headline,
            max_drawdown = stats.max_drawdown,
            "computed journal statistics"
        );
        stats
    }

    fn standard(outcomes: &[f64]) -> Self {
        let curve = cumulative_returns(outcomes);

        Self {
            mode: TradeMode::Standard,
            trade_count: outcomes.len(),
            headline: curve.last().copied().unwrap_or(0.0),
            max_drawdown: max_drawdown_or_zero(&curve),
            streaks: longest_streak_by(outcomes, |&r| Outcome::of_return(r)),
            curve,
        }
    }

    fn risk_reward(journal: &Journal) -> Self {
        let settings = journal.risk_settings();
        let outcomes = journal.outcomes();
        let curve = capital_curve(outcomes, &settings);
        let amounts = profit_losses(outcomes, settings.risk_per_trade);

        Self {
            mode: TradeMode::RiskReward,
            trade_count: outcomes.len(),
            headline: curve.last().copied().unwrap_or(settings.initial_capital),
            max_drawdown: max_drawdown_or_zero(&curve),
            streaks: longest_streak_by(&amounts, |&pl| Outcome::of_profit_loss(pl)),
            curve,
        }
    }

    /// Total return in percent (standard mode).
    pub fn total_return_pct(&self) -> f64 {
        self.headline * 100.0
    }

    /// Curve values in display units: percent for returns, currency for capital.
    pub fn display_curve(&self) -> Vec<f64> {
        match self.mode {
            TradeMode::Standard => self.curve.iter().map(|v| v * 100.0).collect(),
            TradeMode::RiskReward => self.curve.clone(),
        }
    }

    /// Max drawdown in display units.
    pub fn display_drawdown(&self) -> f64 {
        match self.mode {
            TradeMode::Standard => self.max_drawdown * 100.0,
            TradeMode::RiskReward => self.max_drawdown,
        }
    }

    /// Check if there is anything to show.
    pub fn is_empty(&self) -> bool {
        self.trade_count == 0
    }
}
