use crate::ema::decay_average;
use crate::window::max_min;
use crate::{check_period, IndicatorError};

/// Default adaptiveness constant `w`. More negative means the average
/// reacts more sharply to changes in local fractal dimension.
pub const DEFAULT_W: f64 = -4.6;

/// Fractal Adaptive Moving Average.
///
/// Each window derives its own smoothing factor from the local fractal
/// dimension and feeds it into the same decay average as [`ema`](crate::ema::ema):
///
/// - the window splits into an older half `[i, i+n/2)` and a newer half
///   `[i+n/2, i+n)` (floor division, unequal halves when n is odd);
/// - HL is the full range over n, HL1/HL2 the half ranges over 0.5·n;
/// - D = (ln(HL1 + HL2) − ln HL) / ln 2;
/// - alpha = exp(w·(D − 1)), clamped to [0.01, 1.0].
///
/// Output has `data.len() − period + 1` elements. Periods below 2 leave
/// one half-window empty and fail with [`IndicatorError::EmptyWindow`].
pub fn frama(period: usize, data: &[f64], w: f64) -> Result<Vec<f64>, IndicatorError> {
    check_period(period, data.len())?;
    let mut out = Vec::with_capacity(data.len() - period + 1);
    for window in data.windows(period) {
        let alpha = fractal_alpha(window, w)?;
        out.push(decay_average(window, alpha));
    }
    Ok(out)
}

/// Smoothing factor exp(w·(D − 1)) for one window, clamped to [0.01, 1.0].
///
/// A zero-range window makes D degenerate (both logarithms diverge); it is
/// treated as D = 1, the flat-window limit, so alpha comes out as 1.0.
fn fractal_alpha(window: &[f64], w: f64) -> Result<f64, IndicatorError> {
    let n = window.len();
    let half = n / 2;
    let (older_max, older_min) = max_min(&window[..half])?;
    let (newer_max, newer_min) = max_min(&window[half..])?;
    let (max, min) = max_min(window)?;

    let hl = (max - min) / n as f64;
    let hl1 = (older_max - older_min) / (0.5 * n as f64);
    let hl2 = (newer_max - newer_min) / (0.5 * n as f64);

    let d = ((hl1 + hl2).ln() - hl.ln()) / std::f64::consts::LN_2;
    let alpha = (w * (d - 1.0)).exp();
    if alpha.is_nan() {
        return Ok(1.0);
    }
    Ok(alpha.clamp(0.01, 1.0))
}
