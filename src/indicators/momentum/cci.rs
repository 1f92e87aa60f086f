//! CCI (Commodity Channel Index) indicator

use crate::indicators::math;
use crate::models::indicators::CciIndicator;
use crate::models::market::Candle;

/// Calculate CCI
///
/// CCI = (typicalPrice - SMA(typicalPrice)) / (0.015 * meanAbsDeviation)
pub fn calculate_cci(candles: &[Candle], period: u32) -> Option<CciIndicator> {
    let len = period as usize;
    if len == 0 || candles.len() < len {
        return None;
    }

    let typical: Vec<f64> = candles.iter().map(|c| c.typical_price()).collect();
    let sma = math::sma(&typical, len)?;
    let mad = math::mean_abs_deviation(&typical, len)?;
    if mad == 0.0 {
        return Some(CciIndicator { value: 0.0, period });
    }

    let last = *typical.last()?;
    Some(CciIndicator {
        value: (last - sma) / (0.015 * mad),
        period,
    })
}

/// Calculate with default period (20)
pub fn calculate_cci_default(candles: &[Candle]) -> Option<CciIndicator> {
    calculate_cci(candles, 20)
}
