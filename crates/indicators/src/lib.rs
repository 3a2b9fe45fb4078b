//! Windowed technical-analysis engines over a daily price series.
//!
//! Every engine is a pure function from a borrowed price slice (oldest
//! value first) to an owned output series. Output element `i` depends only
//! on a fixed window of the input starting at index `i`, so results are
//! deterministic bit-for-bit and safe to compute in parallel over shared
//! data. Engines validate their parameters up front and fail with a
//! descriptive [`IndicatorError`] instead of producing partial output.

pub mod bollinger;
pub mod dema;
pub mod ema;
pub mod frama;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod window;

pub use bollinger::{bollinger_bands, BollingerBands};
pub use dema::dema;
pub use ema::ema;
pub use frama::{frama, DEFAULT_W};
pub use macd::macd;
pub use rsi::rsi;
pub use sma::sma;
pub use stochastic::stochastic_oscillator;
pub use window::{max_min, std_dev};

/// Errors shared by all indicator engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndicatorError {
    /// The period is zero or exceeds the usable data length.
    #[error("invalid period {period} for {len} data points")]
    InvalidPeriod { period: usize, len: usize },
    /// A zero-length window reached the extrema or dispersion utility.
    #[error("empty window")]
    EmptyWindow,
}

pub(crate) fn check_period(period: usize, len: usize) -> Result<(), IndicatorError> {
    if period == 0 || period > len {
        return Err(IndicatorError::InvalidPeriod { period, len });
    }
    Ok(())
}

#[cfg(test)]
mod determinism {
    use super::*;

    const DATA: [f64; 12] = [
        10.0, 11.2, 12.1, 11.4, 10.3, 11.0, 12.6, 13.1, 12.4, 11.9, 12.2, 13.0,
    ];

    #[test]
    fn engines_are_reproducible_bit_for_bit() {
        assert_eq!(sma(3, &DATA).unwrap(), sma(3, &DATA).unwrap());
        assert_eq!(ema(4, &DATA).unwrap(), ema(4, &DATA).unwrap());
        assert_eq!(dema(3, &DATA).unwrap(), dema(3, &DATA).unwrap());
        assert_eq!(
            frama(4, &DATA, DEFAULT_W).unwrap(),
            frama(4, &DATA, DEFAULT_W).unwrap()
        );
        assert_eq!(rsi(4, &DATA).unwrap(), rsi(4, &DATA).unwrap());
        assert_eq!(
            stochastic_oscillator(4, &DATA).unwrap(),
            stochastic_oscillator(4, &DATA).unwrap()
        );
        assert_eq!(macd(3, 5, &DATA).unwrap(), macd(3, 5, &DATA).unwrap());
        assert_eq!(
            bollinger_bands(4, &DATA, 2.0).unwrap(),
            bollinger_bands(4, &DATA, 2.0).unwrap()
        );
    }
}
