//! Download request: ticker, date range and where the result lands.

use super::interval::Interval;
use crate::config::FetchConfig;
use crate::data::provider::DataError;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Default output directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "../data";

/// One ticker over one date range.
///
/// `start` is inclusive and `end` is exclusive, matching the provider's
/// `period1`/`period2` semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
    pub data_dir: PathBuf,
    pub auto_adjust: bool,
}

impl DownloadRequest {
    pub fn new(ticker: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            ticker: ticker.into(),
            start,
            end,
            interval: Interval::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            auto_adjust: true,
        }
    }

    /// Take interval, output directory and adjustment from a loaded config.
    pub fn with_config(self, config: &FetchConfig) -> Self {
        Self {
            interval: config.interval,
            data_dir: config.data_dir.clone(),
            auto_adjust: config.auto_adjust,
            ..self
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_auto_adjust(mut self, auto_adjust: bool) -> Self {
        self.auto_adjust = auto_adjust;
        self
    }

    /// Reject requests that cannot produce a well-formed query or filename.
    pub fn validate(&self) -> Result<(), DataError> {
        let ticker = self.ticker.trim();
        if ticker.is_empty() {
            return Err(DataError::InvalidRequest("ticker must not be empty".into()));
        }
        if ticker.contains(['/', '\\']) || ticker != self.ticker {
            return Err(DataError::InvalidRequest(format!(
                "ticker '{}' contains whitespace or path separators",
                self.ticker
            )));
        }
        if self.start >= self.end {
            return Err(DataError::InvalidRequest(format!(
                "start date {} must be before end date {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// `{ticker}_{start}_{end}.csv`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}.csv",
            self.ticker,
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_request() -> DownloadRequest {
        DownloadRequest::new("BTC-USD", date(2022, 8, 29), date(2025, 8, 30))
    }

    #[test]
    fn defaults_match_backtest_layout() {
        let req = sample_request();
        assert_eq!(req.interval, Interval::OneDay);
        assert_eq!(req.data_dir, PathBuf::from("../data"));
        assert!(req.auto_adjust);
    }

    #[test]
    fn file_name_is_deterministic() {
        assert_eq!(
            sample_request().file_name(),
            "BTC-USD_2022-08-29_2025-08-30.csv"
        );
    }

    #[test]
    fn output_path_joins_data_dir() {
        let req = sample_request().with_data_dir("webui/data");
        assert_eq!(
            req.output_path(),
            PathBuf::from("webui/data/BTC-USD_2022-08-29_2025-08-30.csv")
        );
    }

    #[test]
    fn with_config_copies_fetch_settings() {
        let config = FetchConfig {
            data_dir: PathBuf::from("cache"),
            interval: Interval::OneHour,
            auto_adjust: false,
            ..FetchConfig::default()
        };
        let req = sample_request().with_config(&config);
        assert_eq!(req.data_dir, PathBuf::from("cache"));
        assert_eq!(req.interval, Interval::OneHour);
        assert!(!req.auto_adjust);
        assert_eq!(req.ticker, "BTC-USD");
    }

    #[test]
    fn validate_accepts_well_formed_request() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_ticker() {
        let req = DownloadRequest::new("  ", date(2024, 1, 1), date(2024, 2, 1));
        assert!(matches!(req.validate(), Err(DataError::InvalidRequest(_))));
    }

    #[test]
    fn validate_rejects_path_separators() {
        let req = DownloadRequest::new("../AAPL", date(2024, 1, 1), date(2024, 2, 1));
        assert!(req.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_or_empty_range() {
        let same = DownloadRequest::new("AAPL", date(2024, 1, 1), date(2024, 1, 1));
        assert!(same.validate().is_err());
        let inverted = DownloadRequest::new("AAPL", date(2024, 2, 1), date(2024, 1, 1));
        assert!(inverted.validate().is_err());
    }
}
