use crate::ema::ema;
use crate::IndicatorError;

/// Double Exponential Moving Average: 2·EMA − EMA(EMA).
///
/// The outer EMA and the EMA of that EMA are aligned from their heads and
/// the result is clipped to the shorter (nested) sequence, giving
/// `data.len() − 2·period + 2` elements. Fails if the period is invalid
/// for either nested computation.
pub fn dema(period: usize, data: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    let outer = ema(period, data)?;
    let inner = ema(period, &outer)?;
    Ok(inner
        .iter()
        .zip(&outer)
        .map(|(nested, first)| 2.0 * first - nested)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 10] = [10.0, 11.0, 12.0, 11.0, 10.0, 11.0, 12.0, 13.0, 12.0, 11.0];

    #[test]
    fn test_dema_matches_defining_formula() {
        let outer = ema(3, &DATA).unwrap();
        let inner = ema(3, &outer).unwrap();
        let out = dema(3, &DATA).unwrap();
        assert_eq!(out.len(), inner.len());
        for i in 0..out.len() {
            assert_eq!(out[i], 2.0 * outer[i] - inner[i]);
        }
    }

    #[test]
    fn test_dema_length_law() {
        // len − 2n + 2
        assert_eq!(dema(3, &DATA).unwrap().len(), DATA.len() - 6 + 2);
        assert_eq!(dema(4, &DATA).unwrap().len(), DATA.len() - 8 + 2);
    }

    #[test]
    fn test_dema_period_too_large_for_nested_call() {
        // outer EMA leaves 2 points, inner needs 3
        let short = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            dema(3, &short),
            Err(IndicatorError::InvalidPeriod { period: 3, len: 2 })
        );
    }
}
