//! OBV (On-Balance Volume) indicator

use crate::models::indicators::ObvIndicator;
use crate::models::market::Candle;

/// Calculate OBV
///
/// Cumulative running sum: +volume on up days, -volume on down days,
/// unchanged on flat days. The first bar contributes 0.
pub fn calculate_obv(candles: &[Candle]) -> Option<ObvIndicator> {
    if candles.is_empty() {
        return None;
    }

    let mut value = 0.0;
    for i in 1..candles.len() {
        let change = candles[i].close - candles[i - 1].close;
        if change > 0.0 {
            value += candles[i].volume;
        } else if change < 0.0 {
            value -= candles[i].volume;
        }
    }

    Some(ObvIndicator { value })
}
