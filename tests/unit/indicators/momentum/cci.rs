//! Unit tests for CCI indicator

use chrono::Utc;
use tickscan::indicators::momentum::{calculate_cci, calculate_cci_default};
use tickscan::models::market::Candle;

fn candles_with_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.5, close - 0.5, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_cci_insufficient_data() {
    let candles = candles_with_closes(&[100.0; 19]);
    assert!(calculate_cci_default(&candles).is_none());
}

#[test]
fn test_cci_flat_series_is_zero() {
    let candles = candles_with_closes(&[100.0; 30]);
    let cci = calculate_cci_default(&candles).unwrap();
    assert_eq!(cci.value, 0.0);
}

#[test]
fn test_cci_positive_when_price_above_average() {
    let mut closes = vec![100.0; 25];
    closes.extend([104.0, 106.0, 108.0, 110.0, 112.0]);
    let candles = candles_with_closes(&closes);
    let cci = calculate_cci(&candles, 20).unwrap();
    assert!(cci.value > 0.0);
}

#[test]
fn test_cci_symmetric_for_mirrored_input() {
    let up: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let down: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    let cci_up = calculate_cci(&candles_with_closes(&up), 20).unwrap();
    let cci_down = calculate_cci(&candles_with_closes(&down), 20).unwrap();
    assert!((cci_up.value + cci_down.value).abs() < 1e-6);
}
