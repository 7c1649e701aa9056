//! Binance USDⓈ-M futures REST payloads

use crate::models::{Candle, CandleSeries};
use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// `GET /fapi/v1/exchangeInfo`, trimmed to the fields the scanner reads
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfo {
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    #[serde(default)]
    pub quote_asset: String,
    #[serde(default)]
    pub contract_type: String,
}

impl ExchangeInfo {
    /// Symbols quoted in `quote_asset` with the given contract type, in
    /// exchange order
    pub fn perpetual_symbols(&self, quote_asset: &str, contract_type: &str) -> Vec<String> {
        self.symbols
            .iter()
            .filter(|info| info.quote_asset == quote_asset && info.contract_type == contract_type)
            .map(|info| info.symbol.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum KlineParseError {
    #[error("kline row {row} has {len} fields, expected at least 6")]
    ShortRow { row: usize, len: usize },
    #[error("kline row {row}: {field} is not numeric ({value})")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("kline row {row}: invalid open time ({value})")]
    InvalidOpenTime { row: usize, value: String },
}

const PRICE_FIELDS: [&str; 5] = ["open", "high", "low", "close", "volume"];

/// Parse raw `GET /fapi/v1/klines` rows.
///
/// Each row is `[openTime, open, high, low, close, volume, closeTime, ...]`
/// with the prices as decimal strings. Only the open time and OHLCV are kept.
pub fn parse_klines(
    symbol: &str,
    interval: &str,
    rows: &[Vec<Value>],
) -> Result<CandleSeries, KlineParseError> {
    let candles = rows
        .iter()
        .enumerate()
        .map(|(row, fields)| parse_kline(row, fields))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CandleSeries::new(symbol, interval, candles))
}

fn parse_kline(row: usize, fields: &[Value]) -> Result<Candle, KlineParseError> {
    if fields.len() < 6 {
        return Err(KlineParseError::ShortRow {
            row,
            len: fields.len(),
        });
    }

    let open_time = fields[0]
        .as_i64()
        .and_then(DateTime::from_timestamp_millis)
        .ok_or_else(|| KlineParseError::InvalidOpenTime {
            row,
            value: fields[0].to_string(),
        })?;

    let mut values = [0.0; 5];
    for (slot, (&field, raw)) in values.iter_mut().zip(PRICE_FIELDS.iter().zip(&fields[1..6])) {
        *slot = parse_number(raw).ok_or_else(|| KlineParseError::InvalidNumber {
            row,
            field,
            value: raw.to_string(),
        })?;
    }
    let [open, high, low, close, volume] = values;

    Ok(Candle::new(open, high, low, close, volume, open_time))
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
