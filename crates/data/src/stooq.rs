use async_trait::async_trait;
use tadesk_core::{DailyBar, QuoteError, QuoteSource};
use tracing::debug;

use crate::csv_quotes;

const DEFAULT_BASE_URL: &str = "https://stooq.com";

/// Daily quote source backed by stooq.com's CSV download endpoint
/// (`/q/d/l/?s=<symbol>&i=d`).
pub struct StooqSource {
    client: reqwest::Client,
    base_url: String,
}

impl StooqSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the source at a different host (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for StooqSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for StooqSource {
    async fn daily_quotes(&self, symbol: &str) -> Result<Vec<DailyBar>, QuoteError> {
        let url = format!("{}/q/d/l/?s={}&i=d", self.base_url, symbol);
        debug!(%url, "Downloading daily quotes");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuoteError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuoteError::HttpError(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::HttpError(e.to_string()))?;

        let bars = csv_quotes::parse_daily_csv(body.as_bytes())?;
        if bars.is_empty() {
            return Err(QuoteError::NotFound(format!(
                "No quotes returned for {}",
                symbol
            )));
        }

        debug!(symbol, bars = bars.len(), "Quotes downloaded");
        Ok(bars)
    }
}
