use chrono::NaiveDate;
use std::str::FromStr;
use tadesk_core::{DailyBar, QuoteError};

/// Parse daily OHLCV quotes from CSV.
///
/// Expected columns (case-insensitive, flexible ordering):
/// `date` (or `timestamp`, `datetime`), `open`, `high`, `low`, `close`,
/// `volume` — the layout stooq serves for daily history. A missing volume
/// column yields 0. Rows come back sorted ascending by date regardless of
/// input order.
pub fn parse_daily_csv<R: std::io::Read>(input: R) -> Result<Vec<DailyBar>, QuoteError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| QuoteError::ParseError(format!("Failed to read headers: {}", e)))?
        .clone();

    let cols = resolve_columns(&headers)?;

    let mut bars = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| QuoteError::ParseError(format!("CSV record error: {}", e)))?;

        let volume = if let Some(idx) = cols.volume {
            parse_value(&record[idx], "volume")?
        } else {
            0.0
        };

        bars.push(DailyBar {
            date: parse_date(&record[cols.date])?,
            open: parse_value(&record[cols.open], "open")?,
            high: parse_value(&record[cols.high], "high")?,
            low: parse_value(&record[cols.low], "low")?,
            close: parse_value(&record[cols.close], "close")?,
            volume,
        });
    }

    bars.sort_by_key(|b| b.date);
    Ok(bars)
}

/// Write bars back out in the same `Date,Open,High,Low,Close,Volume`
/// layout [`parse_daily_csv`] accepts, so fetched quotes can be reloaded
/// from disk.
pub fn write_daily_csv<W: std::io::Write>(bars: &[DailyBar], writer: W) -> Result<(), QuoteError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["Date", "Open", "High", "Low", "Close", "Volume"])
        .map_err(|e| QuoteError::ParseError(e.to_string()))?;
    for bar in bars {
        csv_writer
            .write_record([
                bar.date.to_string(),
                bar.open.to_string(),
                bar.high.to_string(),
                bar.low.to_string(),
                bar.close.to_string(),
                bar.volume.to_string(),
            ])
            .map_err(|e| QuoteError::ParseError(e.to_string()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

struct ColumnMap {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: Option<usize>,
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnMap, QuoteError> {
    let date = find_column(headers, &["date", "timestamp", "datetime"])
        .ok_or_else(|| QuoteError::ParseError("No date column found".into()))?;
    let open = find_column(headers, &["open", "o"])
        .ok_or_else(|| QuoteError::ParseError("No open column found".into()))?;
    let high = find_column(headers, &["high", "h"])
        .ok_or_else(|| QuoteError::ParseError("No high column found".into()))?;
    let low = find_column(headers, &["low", "l"])
        .ok_or_else(|| QuoteError::ParseError("No low column found".into()))?;
    let close = find_column(headers, &["close", "c"])
        .ok_or_else(|| QuoteError::ParseError("No close column found".into()))?;
    let volume = find_column(headers, &["volume", "vol", "v"]);

    Ok(ColumnMap {
        date,
        open,
        high,
        low,
        close,
        volume,
    })
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    for (i, header) in headers.iter().enumerate() {
        let h = header.trim().to_lowercase();
        for name in names {
            if h == *name {
                return Some(i);
            }
        }
    }
    None
}

fn parse_value(s: &str, field: &str) -> Result<f64, QuoteError> {
    f64::from_str(s.trim())
        .map_err(|e| QuoteError::ParseError(format!("Failed to parse {} '{}': {}", field, s, e)))
}

fn parse_date(s: &str) -> Result<NaiveDate, QuoteError> {
    let s = s.trim();
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%m/%d/%Y"];
    for fmt in &formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    Err(QuoteError::ParseError(format!(
        "Unable to parse date: '{}'",
        s
    )))
}
