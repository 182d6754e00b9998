//! Fetch configuration, loadable from a TOML file.
//!
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! data_dir = "../data"
//! interval = "1d"
//! auto_adjust = true
//!
//! [http]
//! base_url = "https://query2.finance.yahoo.com"
//! timeout_secs = 30
//! ```

use crate::data::provider::DataError;
use crate::domain::{Interval, DEFAULT_DATA_DIR};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Directory the CSV files are written to.
    pub data_dir: PathBuf,
    pub interval: Interval,
    /// Fold splits and dividends into OHLC before export.
    pub auto_adjust: bool,
    pub http: HttpConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            interval: Interval::default(),
            auto_adjust: true,
            http: HttpConfig::default(),
        }
    }
}

impl FetchConfig {
    pub fn from_toml(s: &str) -> Result<Self, DataError> {
        toml::from_str(s).map_err(|e| DataError::Config(format!("invalid TOML: {e}")))
    }

    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DataError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }
}

/// HTTP client settings for the chart endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
