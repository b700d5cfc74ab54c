//! User-facing strings in Chinese and English.

use tradelog_config::Language;
use tradelog_core::{InputError, TradeMode};
use tradelog_stats::JournalStats;

/// Translated labels for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub language: Language,
    pub standard_mode: &'static str,
    pub risk_mode: &'static str,
    pub input_label: &'static str,
    pub input_label_rr: &'static str,
    pub submit: &'static str,
    pub trade_record: &'static str,
    pub chart_title_standard: &'static str,
    pub chart_title_risk: &'static str,
    pub x_label: &'static str,
    pub y_label_standard: &'static str,
    pub y_label_risk: &'static str,
    pub input_error: &'static str,
    pub input_error_message: &'static str,
    pub negative_rr_error: &'static str,
    pub capital_input: &'static str,
    pub risk_input: &'static str,
    pub clear_history: &'static str,
    pub confirm_clear_history: &'static str,
    pub key_hints: &'static str,
}

const CHINESE: Translations = Translations {
    language: Language::Chinese,
    standard_mode: "交易報酬率記錄 - 標準累計收益率",
    risk_mode: "交易報酬率記錄 - 風險金額模式",
    input_label: "請輸入本次交易的報酬率（%）：",
    input_label_rr: "請輸入本次交易的風險回報比（虧損請輸入0）：",
    submit: "提交",
    trade_record: "交易記錄",
    chart_title_standard: "資產增長率曲線",
    chart_title_risk: "資金曲線",
    x_label: "交易次數",
    y_label_standard: "資產增長率（%）",
    y_label_risk: "資金金額",
    input_error: "輸入錯誤",
    input_error_message: "請輸入有效的數字。",
    negative_rr_error: "風險回報比不能為負數。",
    capital_input: "請輸入初始資金金額：",
    risk_input: "請輸入每筆交易的固定風險金額：",
    clear_history: "清除歷史記錄",
    confirm_clear_history: "您確定要清除所有歷史記錄嗎？此操作無法撤銷。",
    key_hints: "Enter 提交 | F2 語言 | F3 主題 | Ctrl+L 清除 | Esc 退出",
};

const ENGLISH: Translations = Translations {
    language: Language::English,
    standard_mode: "Trading Return Recorder - Standard Mode",
    risk_mode: "Trading Return Recorder - Risk Mode",
    input_label: "Please enter the return rate (%) for this trade:",
    input_label_rr: "Please enter the risk-reward ratio for this trade (enter 0 for a loss):",
    submit: "Submit",
    trade_record: "Trade Records",
    chart_title_standard: "Cumulative Return Curve",
    chart_title_risk: "Capital Curve",
    x_label: "Number of Trades",
    y_label_standard: "Cumulative Return (%)",
    y_label_risk: "Capital Amount",
    input_error: "Input Error",
    input_error_message: "Please enter a valid number.",
    negative_rr_error: "Risk-reward ratio cannot be negative.",
    capital_input: "Please enter the initial capital amount:",
    risk_input: "Please enter the fixed risk amount per trade:",
    clear_history: "Clear History",
    confirm_clear_history:
        "Are you sure you want to clear all history? This action cannot be undone.",
    key_hints: "Enter submit | F2 language | F3 theme | Ctrl+L clear | Esc quit",
};

impl Translations {
    /// Strings for a language.
    pub fn get(language: Language) -> &'static Translations {
        match language {
            Language::Chinese => &CHINESE,
            Language::English => &ENGLISH,
        }
    }

    /// Window title for a mode.
    pub fn title(&self, mode: TradeMode) -> &'static str {
        match mode {
            TradeMode::Standard => self.standard_mode,
            TradeMode::RiskReward => self.risk_mode,
        }
    }

    /// Prompt for a mode.
    pub fn prompt(&self, mode: TradeMode) -> &'static str {
        match mode {
            TradeMode::Standard => self.input_label,
            TradeMode::RiskReward => self.input_label_rr,
        }
    }

    /// Chart title for a mode.
    pub fn chart_title(&self, mode: TradeMode) -> &'static str {
        match mode {
            TradeMode::Standard => self.chart_title_standard,
            TradeMode::RiskReward => self.chart_title_risk,
        }
    }

    /// Y axis label for a mode.
    pub fn y_label(&self, mode: TradeMode) -> &'static str {
        match mode {
            TradeMode::Standard => self.y_label_standard,
            TradeMode::RiskReward => self.y_label_risk,
        }
    }

    pub fn total_return(&self, pct: f64) -> String {
        match self.language {
            Language::Chinese => format!("歷史總報酬率：{:.2}%", pct),
            Language::English => format!("Total Return: {:.2}%", pct),
        }
    }

    pub fn current_capital(&self, capital: f64) -> String {
        match self.language {
            Language::Chinese => format!("當前資金：{:.2}", capital),
            Language::English => format!("Current Capital: {:.2}", capital),
        }
    }

    pub fn max_drawdown(&self, value: f64) -> String {
        match self.language {
            Language::Chinese => format!("最大回撤：{:.2}", value),
            Language::English => format!("Max Drawdown: {:.2}", value),
        }
    }

    pub fn longest_profit(&self, count: usize) -> String {
        match self.language {
            Language::Chinese => format!("最長連續獲利：{} 次", count),
            Language::English => format!("Longest Profit Streak: {}", count),
        }
    }

    pub fn longest_loss(&self, count: usize) -> String {
        match self.language {
            Language::Chinese => format!("最長連續虧損：{} 次", count),
            Language::English => format!("Longest Loss Streak: {}", count),
        }
    }

    /// One line of the trade list. `index` starts at 1.
    pub fn trade_item(&self, mode: TradeMode, index: usize, outcome: f64) -> String {
        match (mode, self.language) {
            (TradeMode::Standard, Language::Chinese) => {
                format!("第 {} 筆交易：{:.2}%", index, outcome * 100.0)
            }
            (TradeMode::Standard, Language::English) => {
                format!("Trade {}: {:.2}%", index, outcome * 100.0)
            }
            (TradeMode::RiskReward, Language::Chinese) => {
                format!("第 {} 筆交易：風險回報比 {:.2}", index, outcome)
            }
            (TradeMode::RiskReward, Language::English) => {
                format!("Trade {}: Risk-Reward Ratio {:.2}", index, outcome)
            }
        }
    }

    /// Warning text for a rejected entry.
    pub fn entry_error(&self, error: &InputError) -> String {
        let message = match error {
            InputError::NegativeMultiple(_) => self.negative_rr_error,
            _ => self.input_error_message,
        };
        format!("{}: {}", self.input_error, message)
    }

    /// The four metric lines shown next to the chart.
    pub fn metric_lines(&self, stats: &JournalStats) -> Vec<String> {
        let headline = match stats.mode {
            TradeMode::Standard => self.total_return(stats.total_return_pct()),
            TradeMode::RiskReward => self.current_capital(stats.headline),
        };

        vec![
            headline,
            self.max_drawdown(stats.display_drawdown()),
            self.longest_profit(stats.streaks.longest_win),
            self.longest_loss(stats.streaks.longest_loss),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradelog_core::{Journal, RiskSettings};

    #[test]
    fn test_metric_lines_standard() {
        let journal = Journal::standard().with_returns(vec![0.1, 0.1, -0.1]);
        let stats = JournalStats::compute(&journal);
        let lines = Translations::get(Language::English).metric_lines(&stats);

        assert_eq!(lines[0], "Total Return: 8.90%");
        assert_eq!(lines[1], "Max Drawdown: -12.10");
        assert_eq!(lines[2], "Longest Profit Streak: 2");
        assert_eq!(lines[3], "Longest Loss Streak: 1");
    }

    #[test]
    fn test_metric_lines_risk_chinese() {
        let settings = RiskSettings::new(1000.0, 100.0).unwrap();
        let stats = JournalStats::compute(&Journal::risk_reward(settings));
        let lines = Translations::get(Language::Chinese).metric_lines(&stats);

        assert_eq!(lines[0], "當前資金：1000.00");
        assert_eq!(lines[2], "最長連續獲利：0 次");
    }

    #[test]
    fn test_trade_items() {
        let en = Translations::get(Language::English);
        assert_eq!(en.trade_item(TradeMode::Standard, 1, 0.05), "Trade 1: 5.00%");
        assert_eq!(
            en.trade_item(TradeMode::RiskReward, 3, 2.5),
            "Trade 3: Risk-Reward Ratio 2.50"
        );

        let zh = Translations::get(Language::Chinese);
        assert_eq!(zh.trade_item(TradeMode::Standard, 2, -0.1), "第 2 筆交易：-10.00%");
    }

    #[test]
    fn test_entry_error() {
        let en = Translations::get(Language::English);
        assert_eq!(
            en.entry_error(&InputError::NegativeMultiple(-1.0)),
            "Input Error: Risk-reward ratio cannot be negative."
        );
        assert_eq!(
            en.entry_error(&InputError::InvalidNumber("x".into())),
            "Input Error: Please enter a valid number."
        );
    }

    #[test]
    fn test_mode_labels() {
        let en = Translations::get(Language::English);
        assert_eq!(en.chart_title(TradeMode::RiskReward), "Capital Curve");
        assert_eq!(en.y_label(TradeMode::Standard), "Cumulative Return (%)");
        assert_eq!(
            Translations::get(Language::Chinese).title(TradeMode::Standard),
            CHINESE.standard_mode
        );
    }
}
