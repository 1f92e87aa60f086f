//! EMA (Exponential Moving Average) indicator

use crate::indicators::math;
use crate::models::indicators::EmaIndicator;
use crate::models::market::Candle;

/// Calculate EMA for a specific period
///
/// Seeded with the SMA of the first `period` closes, then
/// `ema_t = (close_t - ema_{t-1}) * (2 / (period + 1)) + ema_{t-1}`.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<EmaIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let value = math::ema(&closes, period as usize)?;
    Some(EmaIndicator { value, period })
}

/// Calculate multiple EMAs at once
pub fn calculate_emas(candles: &[Candle], periods: &[u32]) -> Vec<EmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_ema(candles, period))
        .collect()
}

/// Check for EMA cross (e.g., EMA 12 crossing above/below EMA 26)
pub fn check_ema_cross(candles: &[Candle], fast_period: u32, slow_period: u32) -> Option<i32> {
    let fast_ema = calculate_ema(candles, fast_period)?;
    let slow_ema = calculate_ema(candles, slow_period)?;

    if fast_ema.value > slow_ema.value {
        Some(1)
    } else if fast_ema.value < slow_ema.value {
        Some(-1)
    } else {
        Some(0)
    }
}
