use crate::IndicatorError;

/// Maximum and minimum of a window, in that order.
pub fn max_min(window: &[f64]) -> Result<(f64, f64), IndicatorError> {
    let (&first, rest) = window.split_first().ok_or(IndicatorError::EmptyWindow)?;
    let mut max = first;
    let mut min = first;
    for &v in rest {
        if v > max {
            max = v;
        }
        if v < min {
            min = v;
        }
    }
    Ok((max, min))
}

/// Population standard deviation of a window (divides by the window
/// length, not length − 1).
pub fn std_dev(window: &[f64]) -> Result<f64, IndicatorError> {
    if window.is_empty() {
        return Err(IndicatorError::EmptyWindow);
    }
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    let variance = window
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    Ok(variance.sqrt())
}
