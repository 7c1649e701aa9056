//! Unit tests for the indicator bank

use crate::fixtures::{rising_candles, series};
use perpscan::config::IndicatorSettings;
use perpscan::indicators::{IndicatorBank, IndicatorError};

fn bank() -> IndicatorBank {
    IndicatorBank::new(IndicatorSettings::default(), 100)
}

#[test]
fn test_series_are_aligned_with_candles() {
    let s = series("BTCUSDT", rising_candles(120));
    let bank = bank();
    assert_eq!(bank.trend_estimate(&s).len(), 120);
    assert_eq!(bank.trend_oscillator(&s).len(), 120);
    assert_eq!(bank.momentum_oscillator(&s).len(), 120);
    assert_eq!(bank.volatility_bands(&s).len(), 120);
    assert_eq!(bank.trend_strength(&s).len(), 120);
}

#[test]
fn test_snapshot_rejects_short_history() {
    let s = series("BTCUSDT", rising_candles(99));
    assert_eq!(
        bank().snapshot(&s),
        Err(IndicatorError::InsufficientHistory {
            bars: 99,
            required: 100
        })
    );
}

#[test]
fn test_snapshot_reads_latest_bar() {
    let s = series("BTCUSDT", rising_candles(150));
    let snapshot = bank().snapshot(&s).unwrap();

    assert_eq!(snapshot.close, 249.0);
    assert!(snapshot.trend_estimate < snapshot.close);
    assert!(snapshot.trend_oscillator > 0.0);
    assert_eq!(snapshot.momentum, 100.0);
    assert!(snapshot.lower_band < snapshot.close && snapshot.close < snapshot.upper_band);
    assert!(snapshot.trend_strength > 20.0);
}

#[test]
fn test_snapshot_with_long_indicator_window() {
    // EMA(150) cannot be defined on 120 bars even though history suffices
    let settings = IndicatorSettings {
        ema_period: 150,
        ..IndicatorSettings::default()
    };
    let s = series("BTCUSDT", rising_candles(120));
    assert_eq!(
        IndicatorBank::new(settings, 100).snapshot(&s),
        Err(IndicatorError::Undefined("trend estimate"))
    );
}

#[test]
fn test_snapshot_rejects_non_finite_prices() {
    let mut candles = rising_candles(120);
    candles[119].close = f64::NAN;
    let s = series("BTCUSDT", candles);
    assert_eq!(bank().snapshot(&s), Err(IndicatorError::NonFinite("close")));
}
