//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::RsiIndicator;
use crate::models::Candle;

/// Calculate RSI for every bar
///
/// RSI = 100 - (100 / (1 + RS)), RS = smoothed gain / smoothed loss.
/// The first bar enters as a zero gain and a zero loss, so gains and losses
/// are Wilder-smoothed over one slot per candle and the first `period - 1`
/// slots are `None`. A zero smoothed loss yields 100.
pub fn calculate_rsi_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let (gains, losses): (Vec<f64>, Vec<f64>) = std::iter::once(0.0)
        .chain(candles.windows(2).map(|pair| pair[1].close - pair[0].close))
        .take(candles.len())
        .map(|change| (change.max(0.0), (-change).max(0.0)))
        .unzip();

    let avg_gains = math::wilder_series(&gains, period as usize);
    let avg_losses = math::wilder_series(&losses, period as usize);

    avg_gains
        .into_iter()
        .zip(avg_losses)
        .map(|(gain, loss)| {
            let (gain, loss) = (gain?, loss?);
            if loss == 0.0 {
                return Some(100.0);
            }
            Some(100.0 - (100.0 / (1.0 + gain / loss)))
        })
        .collect()
}

/// RSI at the latest bar
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    let value = math::latest(&calculate_rsi_series(candles, period))?;
    Some(RsiIndicator { value, period })
}
