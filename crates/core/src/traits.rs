use crate::models::{DailyBar, SeriesReport};
use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Quote Source
// ---------------------------------------------------------------------------

/// Errors that can occur while acquiring quote data.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Quotes not found: {0}")]
    NotFound(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    HttpError(String),
}

/// Delivers the daily price history of a single instrument, oldest bar
/// first. The engines never see where the data came from.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn daily_quotes(&self, symbol: &str) -> Result<Vec<DailyBar>, QuoteError>;
}

// ---------------------------------------------------------------------------
// Report Sink
// ---------------------------------------------------------------------------

/// Errors that can occur while emitting a report.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializeError(String),
}

/// Consumes computed indicator series. Implementations decide the output
/// medium (CSV file, JSON, console table); they receive plain ordered
/// numeric sequences with their aligned dates and nothing else.
pub trait ReportSink {
    fn emit(&mut self, report: &SeriesReport) -> Result<(), SinkError>;
}
