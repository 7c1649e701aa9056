//! Indicator bank: trend, momentum, volatility and trend-strength features.

pub mod bank;
pub mod error;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use bank::IndicatorBank;
pub use error::IndicatorError;
