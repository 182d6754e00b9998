//! Domain types: bars, intervals, download requests.

pub mod bar;
pub mod interval;
pub mod request;

pub use bar::RawBar;
pub use interval::Interval;
pub use request::{DownloadRequest, DEFAULT_DATA_DIR};
