//! SMA (Simple Moving Average) indicator

use crate::indicators::math;
use crate::models::indicators::SmaIndicator;
use crate::models::market::Candle;

/// Calculate the SMA of the last `period` closes.
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<SmaIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let value = math::sma(&closes, period as usize)?;
    Some(SmaIndicator { value, period })
}

/// Calculate several SMAs at once, skipping periods with too little history.
pub fn calculate_smas(candles: &[Candle], periods: &[u32]) -> Vec<SmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_sma(candles, period))
        .collect()
}
