//! Output sinks for computed indicator series.
//!
//! The reporting side is deliberately plain: it receives ordered numeric
//! sequences with their aligned dates and writes them somewhere. Chart
//! rendering stays outside this repository.

use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::PathBuf;
use tadesk_core::{DailyBar, ReportSink, SeriesReport, SinkError};

/// Dates for a suffix-aligned output series: element k of a series of
/// `output_len` values computed from `bars` aligns to
/// `bars[k + lead].date` with `lead = bars.len() − output_len`.
pub fn aligned_dates(bars: &[DailyBar], output_len: usize) -> Vec<NaiveDate> {
    let lead = bars.len().saturating_sub(output_len);
    bars[lead..].iter().map(|b| b.date).collect()
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Writes one report as a CSV file: a `date` column plus one column per
/// output series.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for CsvSink {
    fn emit(&mut self, report: &SeriesReport) -> Result<(), SinkError> {
        let file = std::fs::File::create(&self.path)?;
        write_csv(report, file)
    }
}

/// CSV serialization, separated from the file sink so any writer works.
pub fn write_csv<W: std::io::Write>(report: &SeriesReport, writer: W) -> Result<(), SinkError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["date".to_string()];
    header.extend(report.columns.iter().map(|c| c.name.clone()));
    csv_writer
        .write_record(&header)
        .map_err(|e| SinkError::SerializeError(e.to_string()))?;

    for (i, date) in report.dates.iter().enumerate() {
        let mut row = vec![date.to_string()];
        for column in &report.columns {
            row.push(column.values[i].to_string());
        }
        csv_writer
            .write_record(&row)
            .map_err(|e| SinkError::SerializeError(e.to_string()))?;
    }

    csv_writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Writes one report as a JSON document.
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for JsonSink {
    fn emit(&mut self, report: &SeriesReport) -> Result<(), SinkError> {
        let file = std::fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, report)
            .map_err(|e| SinkError::SerializeError(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Prints a fixed-width table to stdout.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn emit(&mut self, report: &SeriesReport) -> Result<(), SinkError> {
        print!("{}", render_table(report));
        Ok(())
    }
}

/// Table rendering, separated from the console sink for testability.
pub fn render_table(report: &SeriesReport) -> String {
    let sep = "=".repeat(60);
    let mut out = String::new();
    let _ = writeln!(out, "{sep}");
    let _ = writeln!(
        out,
        "  {}  {}  ({} rows)",
        report.symbol.to_uppercase(),
        report.indicator,
        report.len()
    );
    let _ = writeln!(out, "{sep}");

    let mut header = format!("  {:>10}", "date");
    for column in &report.columns {
        let _ = write!(header, " {:>12}", column.name);
    }
    let _ = writeln!(out, "{header}");

    for (i, date) in report.dates.iter().enumerate() {
        let mut row = format!("  {:>10}", date.to_string());
        for column in &report.columns {
            let _ = write!(row, " {:>12.4}", column.values[i]);
        }
        let _ = writeln!(out, "{row}");
    }
    let _ = writeln!(out, "{sep}");
    out
}
