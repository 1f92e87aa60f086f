//! Unit tests for RSI indicator

use chrono::Utc;
use tickscan::indicators::momentum::{calculate_rsi, calculate_rsi_default};
use tickscan::models::market::Candle;

fn candles_with_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.5, close - 0.5, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    let candles = candles_with_closes(&[100.0; 14]);
    // Period 14 needs 15 bars for 14 deltas.
    assert!(calculate_rsi(&candles, 14).is_none());
}

#[test]
fn test_rsi_all_gains_is_100() {
    // Strictly rising 15-bar series has no losses.
    let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
    let candles = candles_with_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert_eq!(rsi.value, 100.0);
}

#[test]
fn test_rsi_all_losses_is_0() {
    let closes: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
    let candles = candles_with_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert!(rsi.value.abs() < 1e-9);
}

#[test]
fn test_rsi_stays_in_bounds() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + ((i * 7) % 13) as f64 - 6.0)
        .collect();
    let candles = candles_with_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert!((0.0..=100.0).contains(&rsi.value));
}

#[test]
fn test_rsi_balanced_moves_near_50() {
    // Alternating +1/-1 closes give equal average gain and loss.
    let closes: Vec<f64> = (0..40)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect();
    let candles = candles_with_closes(&closes);
    let rsi = calculate_rsi_default(&candles).unwrap();
    assert!((rsi.value - 50.0).abs() < 5.0);
}
