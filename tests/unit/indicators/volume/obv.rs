//! Unit tests for OBV

use chrono::Utc;
use tickscan::indicators::volume::calculate_obv;
use tickscan::models::market::Candle;

fn candle(close: f64, volume: f64) -> Candle {
    Candle::new(close, close + 0.5, close - 0.5, close, volume, Utc::now())
}

#[test]
fn test_obv_empty_input() {
    assert!(calculate_obv(&[]).is_none());
}

#[test]
fn test_obv_single_bar_contributes_zero() {
    let obv = calculate_obv(&[candle(100.0, 5000.0)]).unwrap();
    assert_eq!(obv.value, 0.0);
}

#[test]
fn test_obv_accumulates_signed_volume() {
    let candles = vec![
        candle(100.0, 1000.0), // first bar: 0
        candle(101.0, 2000.0), // up: +2000
        candle(100.5, 1500.0), // down: -1500
        candle(100.5, 9000.0), // flat: unchanged
        candle(102.0, 500.0),  // up: +500
    ];
    let obv = calculate_obv(&candles).unwrap();
    assert_eq!(obv.value, 1000.0);
}
