//! Unit tests for Williams %R

use chrono::Utc;
use tickscan::indicators::momentum::calculate_williams_r_default;
use tickscan::models::market::Candle;

fn candles_with_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 1.0, close - 1.0, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_williams_r_insufficient_data() {
    let candles = candles_with_closes(&[100.0; 10]);
    assert!(calculate_williams_r_default(&candles).is_none());
}

#[test]
fn test_williams_r_bounds() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + ((i * 3) % 7) as f64).collect();
    let candles = candles_with_closes(&closes);
    let wr = calculate_williams_r_default(&candles).unwrap();
    assert!((-100.0..=0.0).contains(&wr.value));
}

#[test]
fn test_williams_r_near_zero_in_uptrend() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let candles = candles_with_closes(&closes);
    let wr = calculate_williams_r_default(&candles).unwrap();
    // Close near the window high reads close to 0.
    assert!(wr.value > -20.0);
}

#[test]
fn test_williams_r_near_minus_100_in_downtrend() {
    let closes: Vec<f64> = (0..30).map(|i| 200.0 - i as f64).collect();
    let candles = candles_with_closes(&closes);
    let wr = calculate_williams_r_default(&candles).unwrap();
    assert!(wr.value < -80.0);
}
