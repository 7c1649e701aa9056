//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod signal;

pub use candle::{Candle, CandleSeries};
pub use indicators::{
    AdxIndicator, BollingerBandsIndicator, EmaIndicator, IndicatorSnapshot, MacdIndicator,
    RsiIndicator,
};
pub use signal::{Signal, VoteTally};
