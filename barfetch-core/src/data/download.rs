//! Download orchestrator: fetch one ticker and persist it for backtesting.

use super::export::write_csv;
use super::frame::backtest_frame;
use super::provider::{DataError, DataProvider};
use crate::domain::{DownloadRequest, RawBar};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

/// Fetch → emptiness check → adjust → reshape → write.
///
/// Issues exactly one provider call. Returns the path of the written file,
/// `{data_dir}/{ticker}_{start}_{end}.csv`.
pub fn download_for_backtesting(
    provider: &dyn DataProvider,
    request: &DownloadRequest,
) -> Result<PathBuf, DataError> {
    request.validate()?;

    fs::create_dir_all(&request.data_dir).map_err(|e| {
        DataError::Io(format!(
            "failed to create {}: {e}",
            request.data_dir.display()
        ))
    })?;
    let path = request.output_path();

    let fetched = provider.fetch(request)?;
    if fetched.is_empty() {
        let err = DataError::NoData {
            symbol: request.ticker.clone(),
            start: request.start,
            end: request.end,
        };
        warn!("{err}");
        return Err(err);
    }

    let bars: Vec<RawBar> = if request.auto_adjust {
        fetched.iter().map(RawBar::adjusted).collect()
    } else {
        fetched
    };

    let mut frame = backtest_frame(&bars, request.interval)?;
    write_csv(&mut frame, &path)?;

    info!("Data for {} saved to {}", request.ticker, path.display());
    Ok(path)
}
