//! RawBar: one OHLCV row as delivered by a provider.

use chrono::{DateTime, FixedOffset};

/// OHLCV bar for a single symbol at a single timestamp.
///
/// Timestamps carry the exchange's UTC offset so that daily bars resolve to
/// the local trading date. Missing prices are NaN; missing volume is 0.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBar {
    pub timestamp: DateTime<FixedOffset>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub adj_close: f64,
}

impl RawBar {
    /// Scale OHLC by `adj_close / close` so splits and dividends are folded in.
    ///
    /// Volume is left untouched. Bars without a usable ratio are returned as-is.
    pub fn adjusted(&self) -> RawBar {
        if self.close.is_nan() || self.adj_close.is_nan() || self.close == 0.0 {
            return self.clone();
        }
        let ratio = self.adj_close / self.close;
        RawBar {
            open: self.open * ratio,
            high: self.high * ratio,
            low: self.low * ratio,
            close: self.adj_close,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar() -> RawBar {
        RawBar {
            timestamp: DateTime::parse_from_rfc3339("2024-01-02T09:30:00-05:00").unwrap(),
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: 50_000,
            adj_close: 52.5,
        }
    }

    #[test]
    fn adjusted_scales_prices_by_ratio() {
        let adj = sample_bar().adjusted();
        assert!((adj.open - 50.0).abs() < 1e-9);
        assert!((adj.high - 55.0).abs() < 1e-9);
        assert!((adj.low - 45.0).abs() < 1e-9);
        assert_eq!(adj.close, 52.5);
        assert_eq!(adj.volume, 50_000);
        assert_eq!(adj.timestamp, sample_bar().timestamp);
    }

    #[test]
    fn adjusted_is_noop_without_adj_close() {
        let mut bar = sample_bar();
        bar.adj_close = f64::NAN;
        assert_eq!(bar.adjusted().close, 105.0);
    }

    #[test]
    fn adjusted_is_noop_for_zero_close() {
        let mut bar = sample_bar();
        bar.close = 0.0;
        let adj = bar.adjusted();
        assert_eq!(adj.open, 100.0);
        assert_eq!(adj.close, 0.0);
    }
}
