//! Support and resistance level detection

use crate::models::indicators::SupportResistanceIndicator;
use crate::models::market::Candle;

const WINDOW: usize = 10;
const MAX_LEVELS: usize = 5;

/// Detect support and resistance levels from local extrema.
///
/// A bar is a support candidate when its low is the minimum low within a
/// symmetric +/-`WINDOW` bar neighborhood, a resistance candidate when its
/// high is the neighborhood maximum. Levels are deduped and the 5 nearest
/// to the last close are reported each side: resistance ascending away
/// from the price, support descending from it.
pub fn calculate_support_resistance(candles: &[Candle]) -> Option<SupportResistanceIndicator> {
    calculate_support_resistance_with(candles, WINDOW)
}

pub fn calculate_support_resistance_with(
    candles: &[Candle],
    window: usize,
) -> Option<SupportResistanceIndicator> {
    if window == 0 || candles.len() < 2 * window + 1 {
        return None;
    }
    let price = candles.last()?.close;

    let mut supports = Vec::new();
    let mut resistances = Vec::new();

    for i in window..candles.len() - window {
        let neighborhood = &candles[i - window..=i + window];
        let low = candles[i].low;
        let high = candles[i].high;
        if neighborhood.iter().all(|c| c.low >= low) {
            supports.push(low);
        }
        if neighborhood.iter().all(|c| c.high <= high) {
            resistances.push(high);
        }
    }

    let support = nearest_levels(supports, price, true);
    let resistance = nearest_levels(resistances, price, false);

    Some(SupportResistanceIndicator {
        support,
        resistance,
    })
}

/// Dedupe, keep the side of the price that matters, order by closeness.
fn nearest_levels(mut levels: Vec<f64>, price: f64, below: bool) -> Vec<f64> {
    levels.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    levels.dedup();
    if below {
        // Supports below the price, nearest first (descending).
        levels.retain(|&l| l <= price);
        levels.reverse();
    } else {
        // Resistances above the price, nearest first (ascending).
        levels.retain(|&l| l >= price);
    }
    levels.truncate(MAX_LEVELS);
    levels
}
