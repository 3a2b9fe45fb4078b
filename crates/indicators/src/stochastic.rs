use crate::sma::sma;
use crate::window::max_min;
use crate::{check_period, IndicatorError};

/// Smoothing period applied to %K to obtain %D.
const D_PERIOD: usize = 3;

/// Stochastic oscillator, returning the smoothed %D line.
///
/// %K = 100·(data[i] − min) / (max − min) over the window `[i, i+period)`.
/// A flat window (max == min) has no defined %K; it emits 50.0, the
/// midpoint, rather than failing. The %K series is then smoothed with a
/// 3-period SMA, so the output has `data.len() − period − 1` elements.
pub fn stochastic_oscillator(period: usize, data: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    check_period(period, data.len())?;
    let mut percent_k = Vec::with_capacity(data.len() - period + 1);
    for window in data.windows(period) {
        let (max, min) = max_min(window)?;
        let range = max - min;
        let k = if range == 0.0 {
            50.0
        } else {
            100.0 * (window[0] - min) / range
        };
        percent_k.push(k);
    }
    sma(D_PERIOD, &percent_k)
}
