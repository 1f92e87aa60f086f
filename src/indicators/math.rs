//! Shared numeric helpers for the indicator functions.
//!
//! Everything here works on a plain `&[f64]` slice; the per-indicator
//! modules extract closes/highs/lows and call down into these.

/// Arithmetic mean of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Single EMA step: previous EMA folded with the next value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let multiplier = 2.0 / (period as f64 + 1.0);
    (value - previous) * multiplier + previous
}

/// EMA seeded with the SMA of the first `period` values, then the
/// standard recurrence over the rest.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    Some(*ema_series(values, period)?.last()?)
}

/// Full EMA series from the seed onward. `result[0]` corresponds to
/// `values[period - 1]`.
pub fn ema_series(values: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);
    let mut previous = seed;
    for &value in &values[period..] {
        previous = ema_from_previous(value, previous, period);
        series.push(previous);
    }
    Some(series)
}

/// Population standard deviation of the last `period` values.
pub fn population_std_dev(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// Mean absolute deviation of the last `period` values from their mean.
pub fn mean_abs_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    Some(window.iter().map(|v| (v - mean).abs()).sum::<f64>() / period as f64)
}

pub fn highest(values: &[f64]) -> Option<f64> {
    values.iter().copied().fold(None, |acc, v| match acc {
        Some(max) if max >= v => Some(max),
        _ => Some(v),
    })
}

pub fn lowest(values: &[f64]) -> Option<f64> {
    values.iter().copied().fold(None, |acc, v| match acc {
        Some(min) if min <= v => Some(min),
        _ => Some(v),
    })
}
