//! Moving-average and dispersion primitives used by the indicators.
//!
//! Series helpers return one slot per input value. A slot stays `None` until
//! enough observations have been seen for the value to be defined.

/// Exponentially weighted series with an explicit smoothing factor.
///
/// The recursion is seeded with the first value and is not bias-adjusted:
/// `y[0] = x[0]`, `y[i] = alpha * x[i] + (1 - alpha) * y[i - 1]`.
pub fn ewm_series(values: &[f64], alpha: f64, min_periods: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;

    for (i, &value) in values.iter().enumerate() {
        let current = match prev {
            Some(p) => alpha * value + (1.0 - alpha) * p,
            None => value,
        };
        prev = Some(current);
        out.push((i + 1 >= min_periods).then_some(current));
    }

    out
}

/// EMA series with `alpha = 2 / (period + 1)`
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }
    ewm_series(values, 2.0 / (period as f64 + 1.0), period)
}

/// Wilder smoothing, i.e. an EWM with `alpha = 1 / period`
pub fn wilder_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }
    ewm_series(values, 1.0 / period as f64, period)
}

/// Simple moving average of the last `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Population standard deviation of the last `period` values
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    let mean = sma(values, period)?;
    let window = &values[values.len() - period..];
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// Rolling `(mean, population std)` over a trailing window
pub fn rolling_mean_std(values: &[f64], period: usize) -> Vec<Option<(f64, f64)>> {
    (0..values.len())
        .map(|i| {
            if period == 0 || i + 1 < period {
                return None;
            }
            let window = &values[..=i];
            Some((sma(window, period)?, standard_deviation(window, period)?))
        })
        .collect()
}

/// True range of a bar given the previous close
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Value at the most recent slot, if defined
pub fn latest<T: Copy>(series: &[Option<T>]) -> Option<T> {
    series.last().copied().flatten()
}
