//! Win and loss streaks.
//!
//! One left-to-right scan with two running counters and two running maxima.
//! Callers choose how an item is classified; a [`Outcome::Neutral`] item
//! resets both counters, so a breakeven trade ends any streak in progress.

use serde::{Deserialize, Serialize};

/// Sign of a single trade result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    /// Breaks both streaks
    Neutral,
}

impl Outcome {
    /// Classify a fractional return: positive wins, negative loses, zero breaks.
    pub fn of_return(r: f64) -> Self {
        if r > 0.0 {
            Outcome::Win
        } else if r < 0.0 {
            Outcome::Loss
        } else {
            Outcome::Neutral
        }
    }

    /// Classify a pre-computed signed indicator.
    pub fn of_indicator(indicator: i32) -> Self {
        match indicator.signum() {
            1 => Outcome::Win,
            -1 => Outcome::Loss,
            _ => Outcome::Neutral,
        }
    }

    /// Classify a risk-reward profit/loss amount.
    ///
    /// Only a strictly positive amount is a win. A breakeven trade counts as
    /// a loss here, never as a break.
    pub fn of_profit_loss(amount: f64) -> Self {
        if amount > 0.0 {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

/// Longest streaks found in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Longest run of consecutive wins
    pub longest_win: usize,
    /// Longest run of consecutive losses
    pub longest_loss: usize,
}

impl From<StreakSummary> for (usize, usize) {
    fn from(summary: StreakSummary) -> Self {
        (summary.longest_win, summary.longest_loss)
    }
}

/// Longest win and loss runs under an arbitrary classification.
pub fn longest_streak_by<T, F>(items: &[T], classify: F) -> StreakSummary
where
    F: Fn(&T) -> Outcome,
{
    let mut summary = StreakSummary::default();
    let mut current_win = 0;
    let mut current_loss = 0;

    for item in items {
        match classify(item) {
            Outcome::Win => {
                current_win += 1;
                current_loss = 0;
            }
            Outcome::Loss => {
                current_loss += 1;
                current_win = 0;
            }
            Outcome::Neutral => {
                current_win = 0;
                current_loss = 0;
            }
        }

        summary.longest_win = summary.longest_win.max(current_win);
        summary.longest_loss = summary.longest_loss.max(current_loss);
    }

    summary
}

/// Longest (profit, loss) streaks over fractional returns.
pub fn longest_profit_loss_streak(outcomes: &[f64]) -> (usize, usize) {
    longest_streak_by(outcomes, |&r| Outcome::of_return(r)).into()
}

/// Longest (profit, loss) streaks over signed indicators
/// (positive = win, negative = loss, zero = break).
pub fn longest_streak(classified: &[i32]) -> (usize, usize) {
    longest_streak_by(classified, |&i| Outcome::of_indicator(i)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separate_runs() {
        let streaks = longest_profit_loss_streak(&[0.1, 0.1, -0.1, 0.1, 0.1, 0.1]);
        assert_eq!(streaks, (3, 1));
    }

    #[test]
    fn test_zero_breaks_streak() {
        assert_eq!(longest_profit_loss_streak(&[0.1, 0.0, 0.1]), (1, 0));
        assert_eq!(longest_profit_loss_streak(&[-0.1, -0.1, 0.0, -0.1]), (0, 2));
    }

    #[test]
    fn test_empty() {
        assert_eq!(longest_profit_loss_streak(&[]), (0, 0));
        assert_eq!(longest_streak(&[]), (0, 0));
    }

    #[test]
    fn test_peaks_at_different_positions() {
        let outcomes = [-0.01, -0.02, -0.03, 0.01, 0.02, -0.01, 0.05, 0.05, 0.05, 0.05];
        assert_eq!(longest_profit_loss_streak(&outcomes), (4, 3));
    }

    #[test]
    fn test_indicator_streaks() {
        assert_eq!(longest_streak(&[1, 1, -1, -1, -1, 1]), (2, 3));
        assert_eq!(longest_streak(&[5, 0, 7, -2]), (1, 1));
    }

    #[test]
    fn test_profit_loss_classification() {
        // Breakeven counts as a loss and extends a losing run
        let amounts = [-100.0, 0.0, -100.0, 50.0];
        let summary = longest_streak_by(&amounts, |&pl| Outcome::of_profit_loss(pl));
        assert_eq!(summary.longest_loss, 3);
        assert_eq!(summary.longest_win, 1);
    }

    #[test]
    fn test_nan_breaks_streak() {
        assert_eq!(longest_profit_loss_streak(&[0.1, f64::NAN, 0.1]), (1, 0));
    }
}
