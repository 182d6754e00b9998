//! barfetch CLI: download historical prices to CSV for backtesting.
//!
//! Commands:
//! - `download`: fetch one ticker from Yahoo Finance and save it as
//!   `{data_dir}/{ticker}_{start}_{end}.csv`

use anyhow::{Context, Result};
use barfetch_core::data::{head, PriceRow};
use barfetch_core::{download_for_backtesting, DownloadRequest, FetchConfig, Interval, YahooProvider};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "barfetch",
    about = "barfetch: download historical price data for offline backtesting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download one ticker from Yahoo Finance and save it as CSV.
    Download {
        /// Ticker symbol (e.g., AAPL, BTC-USD, ^GSPC).
        ticker: String,

        /// Start date (YYYY-MM-DD), inclusive. Defaults to 10 years ago.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD), exclusive. Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Bar interval: 1m 2m 5m 15m 30m 60m 90m 1h 1d 5d 1wk 1mo 3mo.
        #[arg(long)]
        interval: Option<Interval>,

        /// Output directory. Overrides the config file.
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Keep raw prices instead of folding splits and dividends into OHLC.
        #[arg(long, default_value_t = false)]
        no_adjust: bool,

        /// Print the first N rows of the saved file.
        #[arg(long)]
        preview: Option<usize>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Download {
            ticker,
            start,
            end,
            interval,
            data_dir,
            config,
            no_adjust,
            preview,
        } => run_download(DownloadArgs {
            ticker,
            start,
            end,
            interval,
            data_dir,
            config,
            no_adjust,
            preview,
        }),
    };

    if let Err(e) = result {
        eprintln!("An error occurred: {e:#}");
        std::process::exit(1);
    }
}

struct DownloadArgs {
    ticker: String,
    start: Option<String>,
    end: Option<String>,
    interval: Option<Interval>,
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    no_adjust: bool,
    preview: Option<usize>,
}

fn run_download(args: DownloadArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => FetchConfig::from_file(path)?,
        None => FetchConfig::default(),
    };
    log::debug!("effective config: {config:?}");

    let today = chrono::Local::now().date_naive();
    let start_date = parse_date(args.start.as_deref(), "--start")?
        .unwrap_or_else(|| today - chrono::Duration::days(365 * 10));
    let end_date = parse_date(args.end.as_deref(), "--end")?.unwrap_or(today);

    let mut request = DownloadRequest::new(args.ticker, start_date, end_date).with_config(&config);
    if let Some(interval) = args.interval {
        request = request.with_interval(interval);
    }
    if let Some(dir) = args.data_dir {
        request = request.with_data_dir(dir);
    }
    if args.no_adjust {
        request = request.with_auto_adjust(false);
    }

    let provider = YahooProvider::new(&config.http)?;
    let path = download_for_backtesting(&provider, &request)?;

    println!("Data downloaded and available at: {}", path.display());

    if let Some(n) = args.preview {
        print_preview(&path, n)?;
    }

    Ok(())
}

fn parse_date(value: Option<&str>, flag: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("{flag} expects YYYY-MM-DD, got '{s}'"))
        })
        .transpose()
}

fn print_preview(path: &Path, n: usize) -> Result<()> {
    let rows = head(path, n)?;
    println!("Generated data sample:");
    println!(
        "{:<26} {:>12} {:>12} {:>12} {:>12} {:>14} {:>18}",
        "timestamps", "open", "high", "low", "close", "volume", "amount"
    );
    println!("{}", "-".repeat(112));
    for row in &rows {
        println!("{}", format_row(row));
    }
    Ok(())
}

fn format_row(row: &PriceRow) -> String {
    format!(
        "{:<26} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>14} {:>18.2}",
        row.timestamps, row.open, row.high, row.low, row.close, row.volume, row.amount
    )
}
