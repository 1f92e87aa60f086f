//! Williams %R indicator

use crate::models::indicators::WilliamsRIndicator;
use crate::models::market::Candle;

/// Calculate Williams %R
///
/// %R = -100 * (highestHigh - close) / (highestHigh - lowestLow) over the
/// trailing `period` bars. Ranges from -100 (weakest) to 0 (strongest).
pub fn calculate_williams_r(candles: &[Candle], period: u32) -> Option<WilliamsRIndicator> {
    let len = period as usize;
    if len == 0 || candles.len() < len {
        return None;
    }

    let window = &candles[candles.len() - len..];
    let highest_high = window.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest_low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let close = window.last()?.close;

    let range = highest_high - lowest_low;
    let value = if range == 0.0 {
        -50.0
    } else {
        -100.0 * (highest_high - close) / range
    };

    Some(WilliamsRIndicator { value, period })
}

/// Calculate with default period (14)
pub fn calculate_williams_r_default(candles: &[Candle]) -> Option<WilliamsRIndicator> {
    calculate_williams_r(candles, 14)
}
