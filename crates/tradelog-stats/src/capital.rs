//! Capital tracking for risk-reward journals.
//!
//! A multiple of `0` loses the fixed risk amount. Any other multiple `r`
//! returns `(r - 1) * risk`, so `r = 1` is breakeven and `0 < r < 1` is a
//! partial loss.

use tradelog_core::RiskSettings;

/// Signed profit or loss of one trade.
pub fn profit_loss(multiple: f64, risk_per_trade: f64) -> f64 {
    if multiple == 0.0 {
        -risk_per_trade
    } else {
        (multiple - 1.0) * risk_per_trade
    }
}

/// Signed profit or loss of every trade.
pub fn profit_losses(multiples: &[f64], risk_per_trade: f64) -> Vec<f64> {
    multiples
        .iter()
        .map(|&m| profit_loss(m, risk_per_trade))
        .collect()
}

/// Capital after each trade.
///
/// Same length as `multiples`; the initial capital itself is not included.
pub fn capital_curve(multiples: &[f64], settings: &RiskSettings) -> Vec<f64> {
    let mut capital = settings.initial_capital;

    multiples
        .iter()
        .map(|&m| {
            capital += profit_loss(m, settings.risk_per_trade);
            capital
        })
        .collect()
}
