//! barfetch core: historical price download for offline backtesting.
//!
//! This crate turns one ticker and one date range into one CSV file:
//! - Domain types (raw bars, intervals, download requests)
//! - Data provider trait and the Yahoo Finance chart provider
//! - Frame transform to `timestamps, open, high, low, close, volume, amount`
//! - Atomic CSV export and read-back
//! - TOML configuration

pub mod config;
pub mod data;
pub mod domain;

pub use config::{FetchConfig, HttpConfig};
pub use data::{download_for_backtesting, DataError, DataProvider, YahooProvider};
pub use domain::{DownloadRequest, Interval, RawBar};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: request, bar and provider types can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<RawBar>();
        require_sync::<RawBar>();
        require_send::<DownloadRequest>();
        require_sync::<DownloadRequest>();
        require_send::<FetchConfig>();
        require_sync::<FetchConfig>();
        require_send::<DataError>();
        require_sync::<DataError>();
        require_send::<YahooProvider>();
        require_sync::<YahooProvider>();
    }

    /// The provider seam stays object-safe so the orchestrator can take `&dyn DataProvider`.
    #[test]
    fn data_provider_is_object_safe() {
        fn _check_trait_object_builds(
            provider: &dyn DataProvider,
            request: &DownloadRequest,
        ) -> Result<Vec<RawBar>, DataError> {
            provider.fetch(request)
        }
    }
}
