//! Data provider trait and structured error types.
//!
//! The DataProvider trait abstracts over the remote source so the download
//! orchestrator can be driven by a mock in tests.

use crate::domain::{DownloadRequest, RawBar};
use chrono::NaiveDate;
use thiserror::Error;

/// Structured error types for data operations.
///
/// These are designed to be displayable directly in CLI output.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP {status} for {symbol}: {detail}")]
    HttpStatus {
        status: u16,
        symbol: String,
        detail: String,
    },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("No data found for ticker {symbol} from {start} to {end}.")]
    NoData {
        symbol: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("frame error: {0}")]
    Frame(String),

    #[error("csv error: {0}")]
    Csv(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),
}

/// A remote source of historical bars.
///
/// One call to `fetch` is one request to the source. Providers do not retry
/// and do not touch the filesystem; an empty vector is a valid answer.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch OHLCV bars for the request's ticker and interval whose local
    /// date falls in `[start, end)`.
    fn fetch(&self, request: &DownloadRequest) -> Result<Vec<RawBar>, DataError>;
}
