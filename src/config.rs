//! Scanner configuration
//!
//! Everything tunable lives in one immutable [`Config`] value that is built
//! once at startup and passed down to the scanner and the classifier.

use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://fapi.binance.com";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
    #[error("LOOKBACK_BARS ({lookback}) must be at least the minimum history ({min_history})")]
    LookbackTooShort { lookback: usize, min_history: usize },
}

/// Exchange endpoint and request behaviour
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeSettings {
    pub base_url: String,
    pub quote_asset: String,
    pub contract_type: String,
    pub request_timeout: Duration,
    /// Extra attempts for transient failures; 0 disables retrying
    pub fetch_retries: usize,
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            quote_asset: "USDT".to_string(),
            contract_type: "PERPETUAL".to_string(),
            request_timeout: Duration::from_secs(10),
            fetch_retries: 2,
        }
    }
}

/// Scan cadence and history window
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    pub bar_interval: String,
    pub lookback: usize,
    pub interval: Duration,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            bar_interval: "30m".to_string(),
            lookback: 200,
            interval: Duration::from_secs(180),
        }
    }
}

/// Indicator parameterization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSettings {
    pub ema_period: u32,
    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,
    pub rsi_period: u32,
    pub bollinger_period: u32,
    pub bollinger_std_dev: f64,
    pub adx_period: u32,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            ema_period: 50,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            rsi_period: 14,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            adx_period: 14,
        }
    }
}

/// Vote thresholds.
///
/// Momentum is asymmetric (`> 55` long, `< 45` short) while trend strength
/// uses the same strict `> 20` on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoteThresholds {
    /// Bars required before any indicator is evaluated
    pub min_history: usize,
    pub quorum: u8,
    pub momentum_long: f64,
    pub momentum_short: f64,
    pub trend_strength: f64,
}

impl Default for VoteThresholds {
    fn default() -> Self {
        Self {
            min_history: 100,
            quorum: 3,
            momentum_long: 55.0,
            momentum_short: 45.0,
            trend_strength: 20.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub exchange: ExchangeSettings,
    pub scan: ScanSettings,
    pub indicators: IndicatorSettings,
    pub votes: VoteThresholds,
}

impl Config {
    /// Build from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup("BINANCE_FUTURES_URL") {
            config.exchange.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(quote) = lookup("QUOTE_ASSET") {
            config.exchange.quote_asset = quote;
        }
        if let Some(contract) = lookup("CONTRACT_TYPE") {
            config.exchange.contract_type = contract;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "REQUEST_TIMEOUT_SECONDS")? {
            config.exchange.request_timeout =
                Duration::from_secs(non_zero("REQUEST_TIMEOUT_SECONDS", secs)?);
        }
        if let Some(retries) = parse_var::<usize, _>(&lookup, "FETCH_RETRIES")? {
            config.exchange.fetch_retries = retries;
        }
        if let Some(interval) = lookup("BAR_INTERVAL") {
            config.scan.bar_interval = interval;
        }
        if let Some(lookback) = parse_var::<usize, _>(&lookup, "LOOKBACK_BARS")? {
            config.scan.lookback = non_zero("LOOKBACK_BARS", lookback)?;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "SCAN_INTERVAL_SECONDS")? {
            config.scan.interval = Duration::from_secs(non_zero("SCAN_INTERVAL_SECONDS", secs)?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.lookback < self.votes.min_history {
            return Err(ConfigError::LookbackTooShort {
                lookback: self.scan.lookback,
                min_history: self.votes.min_history,
            });
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn non_zero<T: PartialEq + Default>(key: &'static str, value: T) -> Result<T, ConfigError> {
    if value == T::default() {
        Err(ConfigError::Zero { key })
    } else {
        Ok(value)
    }
}

/// Deployment environment name from `APP_ENV` (defaults to `sandbox`)
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
