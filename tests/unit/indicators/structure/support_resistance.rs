//! Unit tests for support/resistance detection

use chrono::Utc;
use tickscan::indicators::structure::{
    calculate_support_resistance, calculate_support_resistance_with,
};
use tickscan::models::market::Candle;

fn candle(low: f64, high: f64, close: f64) -> Candle {
    Candle::new(close, high, low, close, 1000.0, Utc::now())
}

/// V-shaped series: trough in the middle, peaks at the edges of the
/// detection range.
fn v_shape(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let distance = (i as f64 - count as f64 / 2.0).abs();
            let close = 100.0 + distance;
            candle(close - 1.0, close + 1.0, close)
        })
        .collect()
}

#[test]
fn test_insufficient_history_returns_none() {
    let candles = v_shape(15);
    // A +/-10 window needs at least 21 bars.
    assert!(calculate_support_resistance(&candles).is_none());
}

#[test]
fn test_trough_detected_as_support() {
    let candles = v_shape(41);
    let levels = calculate_support_resistance(&candles).unwrap();
    // The middle bar's low (99.0 or 99.5) is the only local minimum.
    assert!(!levels.support.is_empty());
    assert!(levels.support[0] < 101.0);
}

#[test]
fn test_levels_are_capped_at_five() {
    let candles: Vec<Candle> = (0..200)
        .map(|i| {
            let wave = ((i as f64) / 7.0).sin() * 10.0;
            let close = 100.0 + wave;
            candle(close - 1.0, close + 1.0, close)
        })
        .collect();
    let levels = calculate_support_resistance_with(&candles, 5).unwrap();
    assert!(levels.support.len() <= 5);
    assert!(levels.resistance.len() <= 5);
}

#[test]
fn test_support_descends_and_resistance_ascends_from_price() {
    let candles: Vec<Candle> = (0..200)
        .map(|i| {
            let wave = ((i as f64) / 9.0).sin() * 8.0 + ((i as f64) / 23.0).cos() * 4.0;
            let close = 100.0 + wave;
            candle(close - 1.0, close + 1.0, close)
        })
        .collect();
    let price = candles.last().unwrap().close;
    let levels = calculate_support_resistance_with(&candles, 5).unwrap();

    for window in levels.support.windows(2) {
        assert!(window[0] >= window[1], "support must descend from price");
    }
    for window in levels.resistance.windows(2) {
        assert!(window[0] <= window[1], "resistance must ascend from price");
    }
    for level in &levels.support {
        assert!(*level <= price);
    }
    for level in &levels.resistance {
        assert!(*level >= price);
    }
}
