//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::models::indicators::AdxIndicator;
use crate::models::Candle;

/// ADX for every bar.
///
/// ADX measures trend strength regardless of direction. True range and
/// directional movement are Wilder-smoothed: the first smoothed value is the
/// plain sum over the first `period` changes, then `s = s - s / period + x`.
/// DX is averaged over `period` bars to seed ADX, after which
/// `adx = (adx * (period - 1) + dx) / period`.
///
/// The first defined slot is at index `2 * period - 1`.
pub fn calculate_adx_series(candles: &[Candle], period: u32) -> Vec<Option<AdxIndicator>> {
    let n = period as usize;
    let len = candles.len();
    let mut out = vec![None; len];
    if n == 0 || len < 2 * n {
        return out;
    }

    let mut tr_values = vec![0.0; len];
    let mut plus_dm_values = vec![0.0; len];
    let mut minus_dm_values = vec![0.0; len];

    for i in 1..len {
        let (current, previous) = (&candles[i], &candles[i - 1]);
        tr_values[i] = math::true_range(current.high, current.low, previous.close);

        let up_move = current.high - previous.high;
        let down_move = previous.low - current.low;
        if up_move > down_move && up_move > 0.0 {
            plus_dm_values[i] = up_move;
        }
        if down_move > up_move && down_move > 0.0 {
            minus_dm_values[i] = down_move;
        }
    }

    let mut tr_smoothed: f64 = tr_values[1..=n].iter().sum();
    let mut plus_dm_smoothed: f64 = plus_dm_values[1..=n].iter().sum();
    let mut minus_dm_smoothed: f64 = minus_dm_values[1..=n].iter().sum();

    let period_f = n as f64;
    let mut dx_seed = Vec::with_capacity(n);
    let mut adx: Option<f64> = None;

    for i in n..len {
        if i > n {
            tr_smoothed = tr_smoothed - tr_smoothed / period_f + tr_values[i];
            plus_dm_smoothed = plus_dm_smoothed - plus_dm_smoothed / period_f + plus_dm_values[i];
            minus_dm_smoothed =
                minus_dm_smoothed - minus_dm_smoothed / period_f + minus_dm_values[i];
        }

        let (plus_di, minus_di) = if tr_smoothed > 0.0 {
            (
                100.0 * plus_dm_smoothed / tr_smoothed,
                100.0 * minus_dm_smoothed / tr_smoothed,
            )
        } else {
            (0.0, 0.0)
        };

        let di_sum = plus_di + minus_di;
        let dx = if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        };

        let value = match adx {
            Some(previous) => (previous * (period_f - 1.0) + dx) / period_f,
            None => {
                dx_seed.push(dx);
                if dx_seed.len() < n {
                    continue;
                }
                dx_seed.iter().sum::<f64>() / period_f
            }
        };

        adx = Some(value);
        out[i] = Some(AdxIndicator {
            value,
            plus_di,
            minus_di,
            period,
        });
    }

    out
}

/// ADX at the latest bar
pub fn calculate_adx(candles: &[Candle], period: u32) -> Option<AdxIndicator> {
    math::latest(&calculate_adx_series(candles, period))
}
