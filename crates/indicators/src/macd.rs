use crate::ema::ema;
use crate::IndicatorError;

/// Moving Average Convergence Divergence.
///
/// Difference of two windowed EMAs, tail-aligned: the longer output drops
/// its leading elements so both series end on the same bar. The result is
/// always shorter-period EMA minus longer-period EMA, regardless of
/// argument order, with `data.len() − max(n1, n2) + 1` elements.
pub fn macd(n1: usize, n2: usize, data: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    let (fast_period, slow_period) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
    let fast = ema(fast_period, data)?;
    let slow = ema(slow_period, data)?;
    let skip = fast.len() - slow.len();
    Ok(fast[skip..]
        .iter()
        .zip(&slow)
        .map(|(f, s)| f - s)
        .collect())
}
