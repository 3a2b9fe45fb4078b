use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "tadesk")]
#[command(about = "Daily technical-analysis desk — fetch quotes and compute indicators")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// TOML config file with defaults
    #[arg(long, env = "TADESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download daily quotes from stooq and store them as CSV
    Fetch {
        /// Instrument symbol (e.g. "aapl.us", "wig20")
        #[arg(short, long)]
        symbol: String,

        /// Output CSV path
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Compute an indicator over a daily price series
    Compute {
        /// Instrument symbol
        #[arg(short, long)]
        symbol: String,

        /// Directory of local <symbol>.csv files; stooq is used when absent
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Indicator name (see `tadesk indicators`)
        #[arg(short, long)]
        indicator: String,

        /// Window period
        #[arg(short, long, default_value = "20")]
        period: usize,

        /// Second EMA period (macd)
        #[arg(long, default_value = "26")]
        period2: usize,

        /// Band width in standard deviations (bb)
        #[arg(long, default_value = "2.0")]
        k: f64,

        /// Adaptiveness constant (frama)
        #[arg(long, default_value = "-4.6", allow_hyphen_values = true)]
        w: f64,

        /// Price column: open, high, low, close, volume
        #[arg(long)]
        field: Option<String>,

        /// Output format: console, csv, json
        #[arg(short, long)]
        format: Option<String>,

        /// Output path (csv and json formats)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List available indicators
    Indicators,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    match cli.command {
        Commands::Fetch { symbol, out } => {
            fetch_quotes(&config, &symbol, &out).await?;
        }
        Commands::Compute {
            symbol,
            data,
            indicator,
            period,
            period2,
            k,
            w,
            field,
            format,
            out,
        } => {
            run_compute(
                &config, symbol, data, indicator, period, period2, k, w, field, format, out,
            )
            .await?;
        }
        Commands::Indicators => {
            println!("Available indicators:");
            println!("  sma    - Simple Moving Average (--period)");
            println!("  ema    - Exponential Moving Average, windowed (--period)");
            println!("  dema   - Double EMA (--period)");
            println!("  frama  - Fractal Adaptive Moving Average (--period, --w)");
            println!("  rsi    - Relative Strength Index (--period)");
            println!("  stoch  - Stochastic Oscillator %D (--period)");
            println!("  macd   - EMA(period) minus EMA(period2) (--period, --period2)");
            println!("  bb     - Bollinger Bands (--period, --k)");
        }
    }

    Ok(())
}

async fn fetch_quotes(config: &CliConfig, symbol: &str, out: &Path) -> Result<()> {
    use tadesk_core::QuoteSource;
    use tadesk_data::StooqSource;

    tracing::info!(symbol, "Fetching daily quotes");
    let source = StooqSource::with_base_url(&config.stooq.base_url);
    let bars = source.daily_quotes(symbol).await?;
    tracing::info!(bars = bars.len(), "Quotes received");

    let file = std::fs::File::create(out)?;
    tadesk_data::csv_quotes::write_daily_csv(&bars, file)?;
    println!("Saved {} bars for {} to {}", bars.len(), symbol, out.display());

    Ok(())
}

async fn run_compute(
    config: &CliConfig,
    symbol: String,
    data: Option<PathBuf>,
    indicator: String,
    period: usize,
    period2: usize,
    k: f64,
    w: f64,
    field: Option<String>,
    format: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    use tadesk_core::{QuoteSource, ReportSink};
    use tadesk_data::{CsvFileSource, StooqSource};
    use tadesk_report::{ConsoleSink, CsvSink, JsonSink};

    let field = parse_field(field.as_deref().unwrap_or(&config.defaults.field))?;
    let format = format.unwrap_or_else(|| config.defaults.format.clone());

    let bars = match &data {
        Some(dir) => CsvFileSource::new(dir).daily_quotes(&symbol).await?,
        None => {
            StooqSource::with_base_url(&config.stooq.base_url)
                .daily_quotes(&symbol)
                .await?
        }
    };
    tracing::info!(symbol = %symbol, bars = bars.len(), "Loaded daily quotes");
    anyhow::ensure!(!bars.is_empty(), "No quotes loaded for {symbol}");

    let report = compute_report(&indicator, period, period2, k, w, &bars, field, &symbol)?;

    let mut sink: Box<dyn ReportSink> = match format.as_str() {
        "console" => Box::new(ConsoleSink),
        "csv" => Box::new(CsvSink::new(require_out(out.as_deref(), "csv")?)),
        "json" => Box::new(JsonSink::new(require_out(out.as_deref(), "json")?)),
        other => anyhow::bail!("Unknown output format: {}", other),
    };
    sink.emit(&report)?;

    if let Some(path) = &out {
        tracing::info!(path = %path.display(), "Report written");
    }
    Ok(())
}

fn compute_report(
    indicator: &str,
    period: usize,
    period2: usize,
    k: f64,
    w: f64,
    bars: &[tadesk_core::DailyBar],
    field: tadesk_core::PriceField,
    symbol: &str,
) -> Result<tadesk_core::SeriesReport> {
    use tadesk_core::{price_series, SeriesColumn, SeriesReport};
    use tadesk_indicators as ind;
    use tadesk_report::aligned_dates;

    let prices = price_series(bars, field);

    let (label, columns) = match indicator {
        "sma" => (
            format!("sma({period})"),
            vec![SeriesColumn::new("sma", ind::sma(period, &prices)?)],
        ),
        "ema" => (
            format!("ema({period})"),
            vec![SeriesColumn::new("ema", ind::ema(period, &prices)?)],
        ),
        "dema" => (
            format!("dema({period})"),
            vec![SeriesColumn::new("dema", ind::dema(period, &prices)?)],
        ),
        "frama" => (
            format!("frama({period}, w={w})"),
            vec![SeriesColumn::new("frama", ind::frama(period, &prices, w)?)],
        ),
        "rsi" => (
            format!("rsi({period})"),
            vec![SeriesColumn::new("rsi", ind::rsi(period, &prices)?)],
        ),
        "stoch" => (
            format!("stoch({period})"),
            vec![SeriesColumn::new(
                "percent_d",
                ind::stochastic_oscillator(period, &prices)?,
            )],
        ),
        "macd" => (
            format!("macd({period}, {period2})"),
            vec![SeriesColumn::new(
                "macd",
                ind::macd(period, period2, &prices)?,
            )],
        ),
        "bb" => {
            let bands = ind::bollinger_bands(period, &prices, k)?;
            (
                format!("bb({period}, k={k})"),
                vec![
                    SeriesColumn::new("upper", bands.upper),
                    SeriesColumn::new("lower", bands.lower),
                ],
            )
        }
        other => anyhow::bail!("Unknown indicator: {} (see `tadesk indicators`)", other),
    };

    let rows = columns[0].values.len();
    Ok(SeriesReport {
        symbol: symbol.to_string(),
        indicator: label,
        dates: aligned_dates(bars, rows),
        columns,
    })
}

fn parse_field(name: &str) -> Result<tadesk_core::PriceField> {
    use tadesk_core::PriceField;

    Ok(match name {
        "open" => PriceField::Open,
        "high" => PriceField::High,
        "low" => PriceField::Low,
        "close" => PriceField::Close,
        "volume" => PriceField::Volume,
        other => anyhow::bail!("Unknown price field: {}", other),
    })
}

fn require_out<'a>(out: Option<&'a Path>, format: &str) -> Result<&'a Path> {
    out.ok_or_else(|| anyhow::anyhow!("--out is required for {} output", format))
}
