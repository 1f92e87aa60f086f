//! Unit tests for MACD indicator

use chrono::Utc;
use tickscan::indicators::momentum::{calculate_macd, calculate_macd_default};
use tickscan::models::market::Candle;

fn candles_with_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.5, close - 0.5, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_macd_insufficient_data() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let candles = candles_with_closes(&closes);
    // Needs slow + signal = 35 bars.
    assert!(calculate_macd_default(&candles).is_none());
}

#[test]
fn test_macd_histogram_is_line_minus_signal() {
    let closes: Vec<f64> = (0..80)
        .map(|i| 100.0 + (i as f64 / 4.0).sin() * 5.0 + i as f64 * 0.2)
        .collect();
    let candles = candles_with_closes(&closes);
    let macd = calculate_macd_default(&candles).unwrap();
    assert!((macd.histogram - (macd.macd - macd.signal)).abs() < 1e-9);
    assert_eq!(macd.period, Some((12, 26, 9)));
}

#[test]
fn test_macd_positive_in_sustained_uptrend() {
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + i as f64).collect();
    let candles = candles_with_closes(&closes);
    let macd = calculate_macd_default(&candles).unwrap();
    // Fast EMA rides above slow EMA when price keeps climbing.
    assert!(macd.macd > 0.0);
}

#[test]
fn test_macd_negative_in_sustained_downtrend() {
    let closes: Vec<f64> = (0..80).map(|i| 200.0 - i as f64).collect();
    let candles = candles_with_closes(&closes);
    let macd = calculate_macd(&candles, 12, 26, 9).unwrap();
    assert!(macd.macd < 0.0);
}

#[test]
fn test_macd_flat_series_is_zero() {
    let candles = candles_with_closes(&[100.0; 80]);
    let macd = calculate_macd_default(&candles).unwrap();
    assert!(macd.macd.abs() < 1e-9);
    assert!(macd.signal.abs() < 1e-9);
}
