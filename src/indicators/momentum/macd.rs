//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdIndicator;
use crate::models::Candle;

/// Per-bar MACD components
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Calculate MACD for every bar
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD, started at the first defined MACD value
/// Histogram = MACD - Signal
pub fn calculate_macd_series(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> MacdSeries {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast = math::ema_series(&closes, fast_period as usize);
    let slow = math::ema_series(&closes, slow_period as usize);

    let macd: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();

    let mut signal = vec![None; macd.len()];
    if let Some(start) = macd.iter().position(Option::is_some) {
        let defined: Vec<f64> = macd[start..].iter().flatten().copied().collect();
        for (offset, value) in math::ema_series(&defined, signal_period as usize)
            .into_iter()
            .enumerate()
        {
            signal[start + offset] = value;
        }
    }

    let histogram = macd
        .iter()
        .zip(&signal)
        .map(|(m, s)| Some((*m)? - (*s)?))
        .collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// MACD at the latest bar; `None` until the MACD line itself is defined
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    let series = calculate_macd_series(candles, fast_period, slow_period, signal_period);

    Some(MacdIndicator {
        macd: math::latest(&series.macd)?,
        signal: math::latest(&series.signal),
        histogram: math::latest(&series.histogram),
        period: (fast_period, slow_period, signal_period),
    })
}
