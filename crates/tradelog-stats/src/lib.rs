//! Return statistics engine.
//!
//! Pure functions over an ordered sequence of trade outcomes:
//! - Cumulative (compounded) return curve
//! - Capital curve for fixed-risk, risk-reward journals
//! - Drawdown series and maximum drawdown
//! - Longest win and loss streaks
//!
//! Nothing here performs I/O or keeps state between calls. [`JournalStats`]
//! bundles the values a journal view displays and [`JournalReport`] renders
//! them as text, JSON or CSV.

pub mod capital;
pub mod drawdown;
pub mod returns;
pub mod streak;

mod report;
mod statistics;

pub use capital::{capital_curve, profit_loss, profit_losses};
pub use drawdown::{drawdown_series, max_drawdown, max_drawdown_or_zero};
pub use report::JournalReport;
pub use returns::cumulative_returns;
pub use statistics::JournalStats;
pub use streak::{
    longest_profit_loss_streak, longest_streak, longest_streak_by, Outcome, StreakSummary,
};
