use crate::IndicatorError;

/// Substituted for exactly-zero weighted sums and ratios so flat
/// stretches stay computable instead of dividing by zero.
const ZERO_FLOOR: f64 = 1e-15;

/// Relative Strength Index.
///
/// For each start index the `period` day-over-day differences in
/// `data[i..=i + period]` split into gains and losses; both sums use the
/// same (1 − alpha)^j decay weight per difference (alpha = 2/(period+1)),
/// a difference of the wrong sign contributing zero to its own sum only.
/// RS = |gains / losses| and RSI = 100 − 100/(1 + RS). Output has
/// `data.len() − period` elements, each in [0, 100].
pub fn rsi(period: usize, data: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 || period + 1 > data.len() {
        return Err(IndicatorError::InvalidPeriod {
            period,
            len: data.len(),
        });
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let decay = 1.0 - alpha;
    let mut out = Vec::with_capacity(data.len() - period);
    for i in 0..data.len() - period {
        let mut gains = 0.0;
        let mut losses = 0.0;
        let mut weight = 1.0;
        for j in 0..period {
            let change = data[i + j + 1] - data[i + j];
            if change > 0.0 {
                gains += weight * change;
            } else {
                losses += weight * -change;
            }
            weight *= decay;
        }
        if gains == 0.0 {
            gains = ZERO_FLOOR;
        }
        if losses == 0.0 {
            losses = ZERO_FLOOR;
        }
        let mut rs = (gains / losses).abs();
        if rs == 0.0 {
            rs = ZERO_FLOOR;
        }
        out.push(100.0 - 100.0 / (1.0 + rs));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_bounded_zero_to_hundred() {
        let data = [
            44.0, 44.34, 44.09, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            45.61, 46.28, 46.28,
        ];
        for v in rsi(5, &data).unwrap() {
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
        }
    }

    #[test]
    fn test_rsi_length_law() {
        let data = [1.0, 3.0, 2.0, 4.0, 3.0, 5.0, 4.0, 6.0];
        for n in 1..data.len() {
            assert_eq!(rsi(n, &data).unwrap().len(), data.len() - n);
        }
    }

    #[test]
    fn test_rsi_all_gains_saturates_high() {
        // losses hit the epsilon floor, so RS is enormous and RSI ≈ 100
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        for v in rsi(3, &data).unwrap() {
            assert!(v > 99.999, "expected saturation near 100, got {v}");
        }
    }

    #[test]
    fn test_rsi_all_losses_saturates_low() {
        let data = [6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        for v in rsi(3, &data).unwrap() {
            assert!(v < 0.001, "expected saturation near 0, got {v}");
        }
    }

    #[test]
    fn test_rsi_flat_series_is_fifty() {
        // both sums floor to the same epsilon: RS = 1, RSI = 50
        let data = [7.0; 6];
        for v in rsi(3, &data).unwrap() {
            assert_eq!(v, 50.0);
        }
    }

    #[test]
    fn test_rsi_needs_period_plus_one_points() {
        let data = [1.0, 2.0, 3.0];
        assert_eq!(
            rsi(3, &data),
            Err(IndicatorError::InvalidPeriod { period: 3, len: 3 })
        );
        assert_eq!(
            rsi(0, &data),
            Err(IndicatorError::InvalidPeriod { period: 0, len: 3 })
        );
    }
}
