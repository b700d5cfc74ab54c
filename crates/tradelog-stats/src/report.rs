//! Journal report generation.

use serde::{Deserialize, Serialize};
use std::io;
use tradelog_core::{Journal, RiskSettings, TradeMode};

use crate::JournalStats;

/// Complete journal report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalReport {
    /// Risk settings (risk-reward journals only)
    pub risk: Option<RiskSettings>,
    /// Recorded outcomes
    pub returns: Vec<f64>,
    /// Statistics
    pub stats: JournalStats,
}

#[derive(Serialize)]
struct CurveRow {
    trade: usize,
    value: f64,
}

impl JournalReport {
    /// Build a report for a journal.
    pub fn new(journal: &Journal) -> Self {
        Self {
            risk: journal.risk,
            returns: journal.returns.clone(),
            stats: JournalStats::compute(journal),
        }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                      JOURNAL REPORT                        \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("PERFORMANCE\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        match self.stats.mode {
            TradeMode::Standard => {
                s.push_str("  Mode:                Cumulative return\n");
                s.push_str(&format!(
                    "  Total Return:        {:.2}%\n",
                    self.stats.total_return_pct()
                ));
                s.push_str(&format!(
                    "  Max Drawdown:        {:.2}%\n",
                    self.stats.display_drawdown()
                ));
            }
            TradeMode::RiskReward => {
                let risk = self.risk.unwrap_or_default();
                s.push_str("  Mode:                Fixed risk (risk-reward)\n");
                s.push_str(&format!(
                    "  Initial Capital:     {:.2}\n",
                    risk.initial_capital
                ));
                s.push_str(&format!(
                    "  Risk Per Trade:      {:.2}\n",
                    risk.risk_per_trade
                ));
                s.push_str(&format!(
                    "  Current Capital:     {:.2}\n",
                    self.stats.headline
                ));
                s.push_str(&format!(
                    "  Max Drawdown:        {:.2}\n",
                    self.stats.display_drawdown()
                ));
            }
        }
        s.push('\n');

        s.push_str("TRADE STATISTICS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Total Trades:        {}\n",
            self.stats.trade_count
        ));
        s.push_str(&format!(
            "  Longest Win Streak:  {}\n",
            self.stats.streaks.longest_win
        ));
        s.push_str(&format!(
            "  Longest Loss Streak: {}\n",
            self.stats.streaks.longest_loss
        ));
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the curve as CSV in display units, trades numbered from 1.
    pub fn curve_to_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (i, value) in self.stats.display_curve().into_iter().enumerate() {
            wtr.serialize(CurveRow { trade: i + 1, value })?;
        }
        wtr.flush()?;
        Ok(())
    }
}
