//! External collaborators: exchange market data and the console surface.

pub mod binance;
pub mod market_data;
pub mod report;

pub use binance::BinanceFuturesClient;
pub use market_data::{FetchOutcome, MarketDataProvider};
pub use report::{ConsoleReporter, ScanReporter};
