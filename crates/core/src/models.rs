use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Daily quotes
// ---------------------------------------------------------------------------

/// One daily OHLCV row for a single instrument.
///
/// Quote sources deliver bars in ascending chronological order (oldest
/// first); everything downstream relies on that ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// The numeric column of a [`DailyBar`] projected into a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl PriceField {
    pub fn of(&self, bar: &DailyBar) -> f64 {
        match self {
            PriceField::Open => bar.open,
            PriceField::High => bar.high,
            PriceField::Low => bar.low,
            PriceField::Close => bar.close,
            PriceField::Volume => bar.volume,
        }
    }
}

/// Project one column of a bar sequence into a plain price series.
pub fn price_series(bars: &[DailyBar], field: PriceField) -> Vec<f64> {
    bars.iter().map(|b| field.of(b)).collect()
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// A single named output column of an indicator computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesColumn {
    pub name: String,
    pub values: Vec<f64>,
}

impl SeriesColumn {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Sink-facing result of one indicator computation: the dates the output
/// rows align to plus one or more equally long value columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport {
    pub symbol: String,
    pub indicator: String,
    pub dates: Vec<NaiveDate>,
    pub columns: Vec<SeriesColumn>,
}

impl SeriesReport {
    /// Number of output rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64) -> DailyBar {
        DailyBar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn test_price_series_projection() {
        let bars = vec![bar(2, 10.0), bar(3, 11.0), bar(4, 12.0)];
        assert_eq!(price_series(&bars, PriceField::Close), vec![10.0, 11.0, 12.0]);
        assert_eq!(price_series(&bars, PriceField::High), vec![11.0, 12.0, 13.0]);
        assert_eq!(
            price_series(&bars, PriceField::Volume),
            vec![1000.0, 1000.0, 1000.0]
        );
    }
}
