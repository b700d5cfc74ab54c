//! Compounded return curve.

/// Running compounded return after each trade.
///
/// `output[i] = (1 + r[0]) * ... * (1 + r[i]) - 1`. Inputs are not validated;
/// a return of -100% or worse compounds into a degenerate curve.
pub fn cumulative_returns(outcomes: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(outcomes.len());
    let mut growth = 1.0;

    for &r in outcomes {
        growth *= 1.0 + r;
        result.push(growth - 1.0);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(cumulative_returns(&[]).is_empty());
    }

    #[test]
    fn test_compounding() {
        let curve = cumulative_returns(&[0.1, -0.1]);
        assert_eq!(curve.len(), 2);
        assert!((curve[0] - 0.1).abs() < 1e-12);
        // 1.1 * 0.9 - 1 = -0.01
        assert!((curve[1] + 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_flat_trades_keep_level() {
        let curve = cumulative_returns(&[0.05, 0.0, 0.0]);
        assert!((curve[1] - 0.05).abs() < 1e-12);
        assert!((curve[2] - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_total_loss_is_not_rejected() {
        let curve = cumulative_returns(&[0.2, -1.0, 0.5]);
        assert!((curve[1] + 1.0).abs() < 1e-12);
        // Nothing left to compound
        assert!((curve[2] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_recomputation_is_identical() {
        let outcomes = [0.013, -0.027, 0.4, -0.33, 0.0, 0.07];
        assert_eq!(cumulative_returns(&outcomes), cumulative_returns(&outcomes));
    }
}
