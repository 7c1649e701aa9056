//! Unit tests for RSI indicator

use crate::fixtures::{candles_from_closes, falling_candles, flat_candles, rising_candles};
use perpscan::indicators::momentum::{calculate_rsi, calculate_rsi_series};

#[test]
fn test_rsi_needs_period_bars() {
    // the first bar counts as a zero change
    assert!(calculate_rsi(&rising_candles(13), 14).is_none());
    assert!(calculate_rsi(&rising_candles(14), 14).is_some());
    assert!(calculate_rsi_series(&[], 14).is_empty());
}

#[test]
fn test_rsi_extremes() {
    assert_eq!(calculate_rsi(&rising_candles(50), 14).unwrap().value, 100.0);
    assert_eq!(calculate_rsi(&falling_candles(50), 14).unwrap().value, 0.0);
}

#[test]
fn test_rsi_without_losses_is_100() {
    assert_eq!(calculate_rsi(&flat_candles(30, 5.0), 14).unwrap().value, 100.0);
}

#[test]
fn test_rsi_exact_value() {
    // gains [0, 1, 0] smooth to 0.25 and losses [0, 0, 1] to 0.5
    let candles = candles_from_closes(&[1.0, 2.0, 1.0]);
    let series = calculate_rsi_series(&candles, 2);

    assert_eq!(series.len(), 3);
    assert_eq!(series[0], None);
    assert_eq!(series[1], Some(100.0));
    assert!((series[2].unwrap() - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rsi_bounded() {
    let closes: Vec<f64> = (0..120)
        .map(|i| 50.0 + (i as f64 * 0.3).cos() * 3.0)
        .collect();
    for value in calculate_rsi_series(&candles_from_closes(&closes), 14)
        .into_iter()
        .flatten()
    {
        assert!((0.0..=100.0).contains(&value));
    }
}
