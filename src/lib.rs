//! Perpetual futures signal scanner.
//!
//! Polls the exchange for every USDT-margined perpetual, computes a fixed
//! indicator set per contract and classifies each one as long, short or
//! neutral with a 3-of-5 vote.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use config::Config;
pub use error::ScanError;
pub use models::{Candle, CandleSeries, Signal};
