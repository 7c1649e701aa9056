//! Binance USDⓈ-M futures market data

pub mod client;
pub mod messages;

pub use client::{BinanceFuturesClient, FetchError};
pub use messages::{parse_klines, ExchangeInfo, KlineParseError, SymbolInfo};
