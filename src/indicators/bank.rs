//! Indicator bank
//!
//! Wires the individual indicators to a [`CandleSeries`] with one fixed
//! parameterization. Every indicator reads the same series independently;
//! none consumes another's output.

use crate::config::IndicatorSettings;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{
    calculate_macd, calculate_macd_series, calculate_rsi, calculate_rsi_series,
};
use crate::indicators::trend::{
    calculate_adx, calculate_adx_series, calculate_ema, calculate_ema_series,
};
use crate::indicators::volatility::{calculate_bollinger_bands, calculate_bollinger_series};
use crate::models::indicators::{BollingerBandsIndicator, IndicatorSnapshot};
use crate::models::CandleSeries;

#[derive(Debug, Clone)]
pub struct IndicatorBank {
    settings: IndicatorSettings,
    min_history: usize,
}

impl IndicatorBank {
    pub fn new(settings: IndicatorSettings, min_history: usize) -> Self {
        Self {
            settings,
            min_history,
        }
    }

    pub fn min_history(&self) -> usize {
        self.min_history
    }

    /// EMA of close over the configured window
    pub fn trend_estimate(&self, series: &CandleSeries) -> Vec<Option<f64>> {
        calculate_ema_series(series.candles(), self.settings.ema_period)
    }

    /// MACD line; positive is bullish momentum
    pub fn trend_oscillator(&self, series: &CandleSeries) -> Vec<Option<f64>> {
        calculate_macd_series(
            series.candles(),
            self.settings.macd_fast,
            self.settings.macd_slow,
            self.settings.macd_signal,
        )
        .macd
    }

    /// RSI, bounded 0..=100
    pub fn momentum_oscillator(&self, series: &CandleSeries) -> Vec<Option<f64>> {
        calculate_rsi_series(series.candles(), self.settings.rsi_period)
    }

    pub fn volatility_bands(&self, series: &CandleSeries) -> Vec<Option<BollingerBandsIndicator>> {
        calculate_bollinger_series(
            series.candles(),
            self.settings.bollinger_period,
            self.settings.bollinger_std_dev,
        )
    }

    /// ADX, bounded 0..=100
    pub fn trend_strength(&self, series: &CandleSeries) -> Vec<Option<f64>> {
        calculate_adx_series(series.candles(), self.settings.adx_period)
            .into_iter()
            .map(|slot| slot.map(|adx| adx.value))
            .collect()
    }

    /// Evaluate every indicator at the latest bar.
    ///
    /// Series shorter than the minimum history are rejected before any
    /// indicator runs.
    pub fn snapshot(&self, series: &CandleSeries) -> Result<IndicatorSnapshot, IndicatorError> {
        if series.len() < self.min_history {
            return Err(IndicatorError::InsufficientHistory {
                bars: series.len(),
                required: self.min_history,
            });
        }

        let candles = series.candles();
        let s = &self.settings;

        let bands = calculate_bollinger_bands(candles, s.bollinger_period, s.bollinger_std_dev);

        Ok(IndicatorSnapshot {
            close: finite("close", series.last().map(|c| c.close))?,
            trend_estimate: finite(
                "trend estimate",
                calculate_ema(candles, s.ema_period).map(|ema| ema.value),
            )?,
            trend_oscillator: finite(
                "trend oscillator",
                calculate_macd(candles, s.macd_fast, s.macd_slow, s.macd_signal).map(|m| m.macd),
            )?,
            momentum: finite(
                "momentum oscillator",
                calculate_rsi(candles, s.rsi_period).map(|rsi| rsi.value),
            )?,
            trend_strength: finite(
                "trend strength",
                calculate_adx(candles, s.adx_period).map(|adx| adx.value),
            )?,
            upper_band: finite("upper band", bands.map(|b| b.upper))?,
            lower_band: finite("lower band", bands.map(|b| b.lower))?,
        })
    }
}

fn finite(name: &'static str, value: Option<f64>) -> Result<f64, IndicatorError> {
    let value = value.ok_or(IndicatorError::Undefined(name))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IndicatorError::NonFinite(name))
    }
}
