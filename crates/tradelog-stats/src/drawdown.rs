//! Peak-to-trough drawdown.

use tradelog_core::StatsError;

/// Distance of each point below its running peak.
///
/// `output[i] = curve[i] - max(curve[0..=i])`, so every value is <= 0.
/// Works on return curves and capital curves alike; the unit is the curve's.
pub fn drawdown_series(curve: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(curve.len());
    let mut peak = f64::NEG_INFINITY;

    for &value in curve {
        peak = peak.max(value);
        result.push(value - peak);
    }

    result
}

/// Worst drawdown over the whole curve.
///
/// Returns 0 for a curve that never falls below an earlier value.
/// An empty curve has no drawdown to report and yields
/// [`StatsError::EmptyInput`].
pub fn max_drawdown(curve: &[f64]) -> Result<f64, StatsError> {
    if curve.is_empty() {
        return Err(StatsError::EmptyInput("max drawdown"));
    }

    Ok(drawdown_series(curve)
        .into_iter()
        .fold(f64::INFINITY, f64::min))
}

/// [`max_drawdown`], treating "no trades yet" as no drawdown.
pub fn max_drawdown_or_zero(curve: &[f64]) -> f64 {
    max_drawdown(curve).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increasing_curve_has_no_drawdown() {
        assert_eq!(max_drawdown(&[0.01, 0.02, 0.05, 0.3]).unwrap(), 0.0);
        assert_eq!(max_drawdown(&[-0.5]).unwrap(), 0.0);
    }

    #[test]
    fn test_trough_below_peak() {
        let dd = max_drawdown(&[0.0, -0.1, -0.2, 0.05]).unwrap();
        assert!((dd + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_worst_of_several_pullbacks() {
        // Pullbacks of 20 and 50 from peaks 120 and 150
        let curve = [100.0, 120.0, 100.0, 150.0, 100.0, 160.0];
        assert_eq!(max_drawdown(&curve).unwrap(), -50.0);
    }

    #[test]
    fn test_series() {
        let series = drawdown_series(&[1.0, 3.0, 2.0, 4.0, 1.0]);
        assert_eq!(series, vec![0.0, 0.0, -1.0, 0.0, -3.0]);
    }

    #[test]
    fn test_empty_curve() {
        assert_eq!(
            max_drawdown(&[]),
            Err(StatsError::EmptyInput("max drawdown"))
        );
        assert_eq!(max_drawdown_or_zero(&[]), 0.0);
        assert!(drawdown_series(&[]).is_empty());
    }
}
