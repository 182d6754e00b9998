//! Yahoo Finance data provider.
//!
//! Fetches OHLCV bars from Yahoo's v8 chart API with a single request per
//! download. There is no retry and no backoff: a failed request surfaces
//! directly as a `DataError`.
//!
//! Yahoo Finance has no official API and is subject to unannounced format changes.

use super::provider::{DataError, DataProvider};
use crate::config::HttpConfig;
use crate::domain::{DownloadRequest, RawBar};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    gmtoffset: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteData>,
    adjclose: Option<Vec<AdjCloseData>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseData {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// Yahoo Finance data provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new(http: &HttpConfig) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(http.user_agent.as_str())
            .build()
            .map_err(|e| DataError::NetworkUnreachable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: http.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the chart API URL for a request.
    ///
    /// The query window is padded by one day on each side because the API
    /// takes UTC epochs while the date range is in exchange-local days.
    /// `parse_response` trims the result back to `[start, end)`.
    fn chart_url(base_url: &str, request: &DownloadRequest) -> String {
        let padded_start = request.start.pred_opt().unwrap_or(request.start);
        let padded_end = request.end.succ_opt().unwrap_or(request.end);
        format!(
            "{base_url}/v8/finance/chart/{symbol}\
             ?period1={start_ts}&period2={end_ts}&interval={interval}\
             &includeAdjustedClose=true&events=div%2Csplits",
            symbol = urlencoding::encode(&request.ticker),
            start_ts = midnight_utc(padded_start),
            end_ts = midnight_utc(padded_end),
            interval = request.interval,
        )
    }

    /// Map an HTTP status and body to a chart response.
    ///
    /// Yahoo attaches a `chart.error` body to most non-2xx replies; its
    /// description is carried into the error when present.
    fn decode_response(
        symbol: &str,
        status: StatusCode,
        body: &str,
    ) -> Result<ChartResponse, DataError> {
        if status == StatusCode::NOT_FOUND {
            return Err(DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }
        if !status.is_success() {
            let detail = serde_json::from_str::<ChartResponse>(body)
                .ok()
                .and_then(|r| r.chart.error)
                .map(|e| e.description)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                symbol: symbol.to_string(),
                detail,
            });
        }
        serde_json::from_str(body).map_err(|e| {
            DataError::ResponseFormatChanged(format!("failed to parse response for {symbol}: {e}"))
        })
    }

    /// Parse the chart API response into RawBars whose exchange-local date
    /// falls in `[request.start, request.end)`.
    ///
    /// A response with no timestamps is a valid empty result, not an error.
    fn parse_response(
        request: &DownloadRequest,
        resp: ChartResponse,
    ) -> Result<Vec<RawBar>, DataError> {
        let symbol = request.ticker.as_str();
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    DataError::SymbolNotFound {
                        symbol: symbol.to_string(),
                    }
                } else {
                    DataError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
                }
            } else {
                DataError::ResponseFormatChanged("empty result with no error".into())
            }
        })?;

        let Some(data) = result.into_iter().next() else {
            return Ok(Vec::new());
        };

        let timestamps = match data.timestamp {
            Some(ts) if !ts.is_empty() => ts,
            _ => return Ok(Vec::new()),
        };

        let offset = data
            .meta
            .and_then(|m| m.gmtoffset)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("no quote data".into()))?;

        let adj_closes = data
            .indicators
            .adjclose
            .and_then(|v| v.into_iter().next())
            .map(|a| a.adjclose);

        let mut bars = Vec::with_capacity(timestamps.len());

        for (i, &ts) in timestamps.iter().enumerate() {
            let timestamp = DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.with_timezone(&offset))
                .ok_or_else(|| {
                    DataError::ResponseFormatChanged(format!("invalid timestamp: {ts}"))
                })?;

            let day = timestamp.date_naive();
            if day < request.start || day >= request.end {
                continue;
            }

            let open = quote.open.get(i).copied().flatten();
            let high = quote.high.get(i).copied().flatten();
            let low = quote.low.get(i).copied().flatten();
            let close = quote.close.get(i).copied().flatten();
            let volume = quote.volume.get(i).copied().flatten();
            let adj_close = adj_closes
                .as_ref()
                .and_then(|v| v.get(i).copied().flatten());

            // Rows with no prices and no volume are non-trading placeholders
            if open.is_none()
                && high.is_none()
                && low.is_none()
                && close.is_none()
                && volume.is_none()
            {
                continue;
            }

            bars.push(RawBar {
                timestamp,
                open: open.unwrap_or(f64::NAN),
                high: high.unwrap_or(f64::NAN),
                low: low.unwrap_or(f64::NAN),
                close: close.unwrap_or(f64::NAN),
                volume: volume.unwrap_or(0),
                adj_close: adj_close.unwrap_or(f64::NAN),
            });
        }

        Ok(bars)
    }
}

impl DataProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(&self, request: &DownloadRequest) -> Result<Vec<RawBar>, DataError> {
        let symbol = request.ticker.as_str();
        let url = Self::chart_url(&self.base_url, request);
        debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| DataError::NetworkUnreachable(format!("reading body for {symbol}: {e}")))?;

        let chart = Self::decode_response(symbol, status, &body)?;
        let bars = Self::parse_response(request, chart)?;
        debug!("{symbol}: {} bars from {}", bars.len(), self.name());
        Ok(bars)
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
