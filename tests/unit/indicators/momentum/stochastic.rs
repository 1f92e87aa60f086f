//! Unit tests for the stochastic oscillator

use chrono::Utc;
use tickscan::indicators::momentum::{calculate_stochastic, calculate_stochastic_default};
use tickscan::models::market::Candle;

fn candles_with_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 1.0, close - 1.0, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_stochastic_insufficient_data() {
    let candles = candles_with_closes(&[100.0; 10]);
    assert!(calculate_stochastic_default(&candles).is_none());
}

#[test]
fn test_stochastic_bounds() {
    let closes: Vec<f64> = (0..40)
        .map(|i| 100.0 + ((i * 5) % 11) as f64)
        .collect();
    let candles = candles_with_closes(&closes);
    let stoch = calculate_stochastic_default(&candles).unwrap();
    assert!((0.0..=100.0).contains(&stoch.k));
    assert!((0.0..=100.0).contains(&stoch.d));
}

#[test]
fn test_stochastic_high_in_uptrend() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let candles = candles_with_closes(&closes);
    let stoch = calculate_stochastic(&candles, 14, 3).unwrap();
    // Close sits at the top of the window, modulo the high wick.
    assert!(stoch.k > 80.0);
    assert!(stoch.d > 80.0);
}

#[test]
fn test_stochastic_low_in_downtrend() {
    let closes: Vec<f64> = (0..40).map(|i| 200.0 - i as f64).collect();
    let candles = candles_with_closes(&closes);
    let stoch = calculate_stochastic(&candles, 14, 3).unwrap();
    assert!(stoch.k < 20.0);
}

#[test]
fn test_stochastic_flat_window_reads_midrange() {
    let candles: Vec<Candle> = (0..20)
        .map(|_| Candle::new(100.0, 100.0, 100.0, 100.0, 1000.0, Utc::now()))
        .collect();
    let stoch = calculate_stochastic_default(&candles).unwrap();
    assert_eq!(stoch.k, 50.0);
}
