pub mod csv_quotes;
pub mod stooq;

use async_trait::async_trait;
use std::path::PathBuf;
use tadesk_core::{DailyBar, QuoteError, QuoteSource};

pub use stooq::StooqSource;

/// A quote source backed by local CSV files, one `<symbol>.csv` per
/// instrument inside a directory.
pub struct CsvFileSource {
    pub directory: PathBuf,
}

impl CsvFileSource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl QuoteSource for CsvFileSource {
    async fn daily_quotes(&self, symbol: &str) -> Result<Vec<DailyBar>, QuoteError> {
        let path = self.directory.join(format!("{}.csv", symbol));
        if !path.exists() {
            return Err(QuoteError::NotFound(format!(
                "CSV file not found: {}",
                path.display()
            )));
        }
        let file = std::fs::File::open(&path)?;
        csv_quotes::parse_daily_csv(file)
    }
}
