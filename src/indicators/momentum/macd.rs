//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::math;
use crate::models::indicators::MacdIndicator;
use crate::models::market::Candle;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the MACD series
/// Histogram = MACD - Signal
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    let fast = fast_period as usize;
    let slow = slow_period as usize;
    let signal_len = signal_period as usize;
    if candles.len() < slow + signal_len {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast_series = math::ema_series(&closes, fast)?;
    let slow_series = math::ema_series(&closes, slow)?;

    // Both series end at the last close; align them from the back.
    let len = fast_series.len().min(slow_series.len());
    let macd_series: Vec<f64> = fast_series[fast_series.len() - len..]
        .iter()
        .zip(&slow_series[slow_series.len() - len..])
        .map(|(f, s)| f - s)
        .collect();

    if macd_series.len() < signal_len {
        return None;
    }

    let macd_line = *macd_series.last()?;
    let signal_line = math::ema(&macd_series, signal_len)?;

    Some(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
        period: Some((fast_period, slow_period, signal_period)),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}
