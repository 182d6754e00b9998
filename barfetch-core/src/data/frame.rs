//! Backtest frame: reshapes provider bars into the canonical CSV schema.
//!
//! Output columns, in order:
//! `timestamps, open, high, low, close, volume, amount`
//! where `amount = close * volume`.

use super::provider::DataError;
use crate::domain::{Interval, RawBar};
use polars::prelude::*;

/// Canonical column order of an exported file.
pub const COLUMNS: [&str; 7] = [
    "timestamps",
    "open",
    "high",
    "low",
    "close",
    "volume",
    "amount",
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Timestamp layout for an interval: bare dates for daily-or-longer bars,
/// offset-qualified datetimes for intraday bars.
pub fn timestamp_format(interval: Interval) -> &'static str {
    if interval.is_intraday() {
        DATETIME_FORMAT
    } else {
        DATE_FORMAT
    }
}

/// Build the export frame: select OHLCV, then derive `amount`.
pub fn backtest_frame(bars: &[RawBar], interval: Interval) -> Result<DataFrame, DataError> {
    let fmt = timestamp_format(interval);
    let timestamps: Vec<String> = bars
        .iter()
        .map(|b| b.timestamp.format(fmt).to_string())
        .collect();
    let opens: Vec<f64> = bars.iter().map(|b| b.open).collect();
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let volumes: Vec<u64> = bars.iter().map(|b| b.volume).collect();

    let df = DataFrame::new(vec![
        Column::new("timestamps".into(), timestamps),
        Column::new("open".into(), opens),
        Column::new("high".into(), highs),
        Column::new("low".into(), lows),
        Column::new("close".into(), closes),
        Column::new("volume".into(), volumes),
    ])
    .map_err(|e| DataError::Frame(format!("dataframe creation: {e}")))?;

    df.lazy()
        .with_column((col("close") * col("volume").cast(DataType::Float64)).alias("amount"))
        .collect()
        .map_err(|e| DataError::Frame(format!("derive amount: {e}")))
}
