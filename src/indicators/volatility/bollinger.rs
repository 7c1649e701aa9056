//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerBandsIndicator;
use crate::models::Candle;

/// Calculate Bollinger Bands for every bar
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population standard deviation)
/// Lower Band = Middle - (std_dev * population standard deviation)
pub fn calculate_bollinger_series(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Vec<Option<BollingerBandsIndicator>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    math::rolling_mean_std(&closes, period as usize)
        .into_iter()
        .map(|slot| {
            let (middle, std) = slot?;
            Some(BollingerBandsIndicator {
                upper: middle + (std_dev * std),
                middle,
                lower: middle - (std_dev * std),
                period,
                std_dev,
            })
        })
        .collect()
}

/// Bollinger Bands at the latest bar
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    math::latest(&calculate_bollinger_series(candles, period, std_dev))
}
