//! Data download, reshaping and export

pub mod download;
pub mod export;
pub mod frame;
pub mod preview;
pub mod provider;
pub mod yahoo;

pub use download::download_for_backtesting;
pub use export::write_csv;
pub use frame::{backtest_frame, COLUMNS};
pub use preview::{head, read_csv, PriceRow};
pub use provider::{DataError, DataProvider};
pub use yahoo::YahooProvider;
