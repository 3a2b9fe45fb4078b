use crate::sma::sma;
use crate::window::std_dev;
use crate::{check_period, IndicatorError};

/// Upper and lower Bollinger bands, index-aligned with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Bollinger bands: SMA ± k population standard deviations per window.
///
/// Both bands have `data.len() − period` rows; the final window is not
/// emitted.
pub fn bollinger_bands(
    period: usize,
    data: &[f64],
    k: f64,
) -> Result<BollingerBands, IndicatorError> {
    check_period(period, data.len())?;
    let means = sma(period, data)?;
    let rows = data.len() - period;
    let mut upper = Vec::with_capacity(rows);
    let mut lower = Vec::with_capacity(rows);
    for i in 0..rows {
        let sd = std_dev(&data[i..i + period])?;
        upper.push(means[i] + k * sd);
        lower.push(means[i] - k * sd);
    }
    Ok(BollingerBands { upper, lower })
}
