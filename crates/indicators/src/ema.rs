use crate::{check_period, IndicatorError};

/// Windowed, re-normalized Exponential Moving Average.
///
/// alpha = 2 / (period + 1). Within each window the j-th element carries
/// weight (1 − alpha)^j and the weighted sum is divided by the sum of the
/// weights, so every output point is recomputed independently over its own
/// window. This is not the classical single-pass recurrence; the
/// normalization makes the estimator well-defined without a running-state
/// initialization. Output has `data.len() − period + 1` elements.
pub fn ema(period: usize, data: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    check_period(period, data.len())?;
    let alpha = 2.0 / (period as f64 + 1.0);
    Ok(data
        .windows(period)
        .map(|w| decay_average(w, alpha))
        .collect())
}

/// Weighted average of one window under geometric decay: the j-th element
/// weighs (1 − alpha)^j, normalized by the weight sum. Shared with FRAMA,
/// which substitutes its own per-window alpha.
pub(crate) fn decay_average(window: &[f64], alpha: f64) -> f64 {
    let decay = 1.0 - alpha;
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    let mut weight = 1.0;
    for &v in window {
        numerator += weight * v;
        denominator += weight;
        weight *= decay;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_length_law() {
        let data = [4.0, 2.0, 5.0, 1.0, 3.0, 6.0];
        for n in 1..=data.len() {
            assert_eq!(ema(n, &data).unwrap().len(), data.len() - n + 1);
        }
    }

    #[test]
    fn test_ema_period_one_is_identity() {
        // alpha = 1: each window degenerates to its first element
        let data = [4.0, 2.0, 5.0, 1.0, 3.0];
        assert_eq!(ema(1, &data).unwrap(), data.to_vec());
    }

    #[test]
    fn test_ema_hand_computed() {
        // period 2: alpha = 2/3, weights [1, 1/3]
        // window [1,2]: (1 + 2/3) / (4/3) = 1.25
        // window [2,3]: (2 + 1) / (4/3) = 2.25
        let out = ema(2, &[1.0, 2.0, 3.0]).unwrap();
        assert!((out[0] - 1.25).abs() < 1e-12);
        assert!((out[1] - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_ema_invalid_period() {
        let data = [1.0, 2.0];
        assert_eq!(
            ema(0, &data),
            Err(IndicatorError::InvalidPeriod { period: 0, len: 2 })
        );
        assert_eq!(
            ema(3, &data),
            Err(IndicatorError::InvalidPeriod { period: 3, len: 2 })
        );
    }
}
