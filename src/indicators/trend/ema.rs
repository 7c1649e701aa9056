//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::EmaIndicator;
use crate::models::Candle;

/// EMA of close for every bar; the oldest `period - 1` slots are `None`
pub fn calculate_ema_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema_series(&closes, period as usize)
}

/// EMA at the latest bar
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<EmaIndicator> {
    let value = math::latest(&calculate_ema_series(candles, period))?;
    Some(EmaIndicator { value, period })
}
