//! Bollinger Bands indicator

use crate::indicators::math;
use crate::models::indicators::BollingerBandsIndicator;
use crate::models::market::Candle;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper/Lower Band = Middle +/- (std_dev * population standard deviation)
/// Width = (Upper - Lower) / Middle
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = math::sma(&closes, period as usize)?;
    let std = math::population_std_dev(&closes, period as usize)?;

    let upper = middle + (std_dev * std);
    let lower = middle - (std_dev * std);
    let width = if middle == 0.0 {
        0.0
    } else {
        (upper - lower) / middle
    };

    Some(BollingerBandsIndicator {
        upper,
        middle,
        lower,
        width,
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2 sigma)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(candles, 20, 2.0)
}
