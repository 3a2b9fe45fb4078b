use crate::{check_period, IndicatorError};

/// Simple Moving Average.
///
/// Output element `i` is the arithmetic mean of `data[i..i + period]`;
/// the output has `data.len() − period + 1` elements.
pub fn sma(period: usize, data: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    check_period(period, data.len())?;
    Ok(data
        .windows(period)
        .map(|w| w.iter().sum::<f64>() / period as f64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_exact_means() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(sma(3, &data).unwrap(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_sma_length_law() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        for n in 1..=data.len() {
            assert_eq!(sma(n, &data).unwrap().len(), data.len() - n + 1);
        }
    }

    #[test]
    fn test_sma_daily_scenario() {
        let data = [10.0, 11.0, 12.0, 11.0, 10.0, 11.0, 12.0, 13.0, 12.0, 11.0];
        let out = sma(3, &data).unwrap();
        let expected = [
            11.0,
            11.333333333333334,
            11.0,
            10.666666666666666,
            11.0,
            12.0,
            12.333333333333334,
            12.0,
        ];
        assert_eq!(out.len(), 8);
        for (got, want) in out.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_sma_invalid_period() {
        let data = [1.0, 2.0, 3.0];
        assert_eq!(
            sma(0, &data),
            Err(IndicatorError::InvalidPeriod { period: 0, len: 3 })
        );
        assert_eq!(
            sma(4, &data),
            Err(IndicatorError::InvalidPeriod { period: 4, len: 3 })
        );
    }
}
