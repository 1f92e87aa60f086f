//! Stochastic oscillator (%K / %D)

use crate::indicators::math;
use crate::models::indicators::StochasticIndicator;
use crate::models::market::Candle;

/// Calculate the stochastic oscillator
///
/// %K = 100 * (close - lowestLow) / (highestHigh - lowestLow) over the
/// trailing `k_period` bars; %D = SMA of the last `d_period` %K values.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: u32,
    d_period: u32,
) -> Option<StochasticIndicator> {
    let k_len = k_period as usize;
    let d_len = d_period as usize;
    if k_len == 0 || d_len == 0 || candles.len() < k_len + d_len - 1 {
        return None;
    }

    let mut k_values = Vec::with_capacity(d_len);
    for offset in 0..d_len {
        let end = candles.len() - offset;
        let window = &candles[end - k_len..end];
        k_values.push(percent_k(window));
    }
    k_values.reverse();

    let k = *k_values.last()?;
    let d = math::sma(&k_values, d_len)?;

    Some(StochasticIndicator {
        k,
        d,
        k_period,
        d_period,
    })
}

/// Calculate with default periods (%K 14, %D 3)
pub fn calculate_stochastic_default(candles: &[Candle]) -> Option<StochasticIndicator> {
    calculate_stochastic(candles, 14, 3)
}

fn percent_k(window: &[Candle]) -> f64 {
    let highest_high = window.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest_low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let close = window.last().map(|c| c.close).unwrap_or_default();
    let range = highest_high - lowest_low;
    if range == 0.0 {
        // Flat window, read as mid-range.
        return 50.0;
    }
    100.0 * (close - lowest_low) / range
}
