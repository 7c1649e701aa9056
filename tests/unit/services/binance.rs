//! Unit tests for Binance payload handling

use perpscan::services::binance::{parse_klines, ExchangeInfo, KlineParseError};
use serde_json::{json, Value};

fn exchange_info() -> ExchangeInfo {
    serde_json::from_value(json!({
        "timezone": "UTC",
        "symbols": [
            {
                "symbol": "BTCUSDT",
                "quoteAsset": "USDT",
                "contractType": "PERPETUAL",
                "status": "TRADING"
            },
            { "symbol": "BTCUSDT_250328", "quoteAsset": "USDT", "contractType": "CURRENT_QUARTER" },
            { "symbol": "ETHBUSD", "quoteAsset": "BUSD", "contractType": "PERPETUAL" },
            { "symbol": "SOLUSDT", "quoteAsset": "USDT", "contractType": "PERPETUAL" },
            { "symbol": "ADAUSDT", "quoteAsset": "USDT", "contractType": "PERPETUAL" },
            { "symbol": "LEGACY" }
        ]
    }))
    .unwrap()
}

#[test]
fn test_universe_filters_and_keeps_exchange_order() {
    assert_eq!(
        exchange_info().perpetual_symbols("USDT", "PERPETUAL"),
        vec!["BTCUSDT", "SOLUSDT", "ADAUSDT"]
    );
    assert_eq!(
        exchange_info().perpetual_symbols("BUSD", "PERPETUAL"),
        vec!["ETHBUSD"]
    );
}

#[test]
fn test_missing_symbols_field_is_empty_universe() {
    let info: ExchangeInfo = serde_json::from_value(json!({})).unwrap();
    assert!(info.perpetual_symbols("USDT", "PERPETUAL").is_empty());
}

#[test]
fn test_klines_keep_exact_values() {
    let rows: Vec<Vec<Value>> = serde_json::from_value(json!([
        [1700000000000i64, "37000.10", "37150.00", "36980.50", "37100.00", "1234.567",
         1700001799999i64, "45678901.2", 1500, "600.1", "22222222.2", "0"],
        [1700001800000i64, "37100.00", "37200.00", "37050.00", "37080.25", "987.6",
         1700003599999i64, "36600000.0", 1200, "500.0", "18500000.0", "0"]
    ]))
    .unwrap();

    let series = parse_klines("BTCUSDT", "30m", &rows).unwrap();
    assert_eq!(series.symbol(), "BTCUSDT");
    assert_eq!(series.interval(), "30m");
    assert_eq!(series.len(), 2);

    let first = series.candles()[0];
    assert_eq!(first.open, 37000.10);
    assert_eq!(first.high, 37150.00);
    assert_eq!(first.low, 36980.50);
    assert_eq!(first.close, 37100.00);
    assert_eq!(first.volume, 1234.567);
    assert_eq!(first.open_time.timestamp_millis(), 1_700_000_000_000);

    assert_eq!(series.last().unwrap().close, 37080.25);
    assert_eq!(series.closes(), vec![37100.00, 37080.25]);
}

#[test]
fn test_empty_klines_are_an_empty_series() {
    let series = parse_klines("BTCUSDT", "30m", &[]).unwrap();
    assert!(series.is_empty());
}

#[test]
fn test_bad_open_time_is_rejected() {
    let rows = vec![vec![
        json!("yesterday"),
        json!("1"),
        json!("2"),
        json!("0.5"),
        json!("1.5"),
        json!("10"),
    ]];
    assert_eq!(
        parse_klines("BTCUSDT", "30m", &rows),
        Err(KlineParseError::InvalidOpenTime {
            row: 0,
            value: "\"yesterday\"".to_string()
        })
    );
}
