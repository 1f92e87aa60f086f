//! Unit tests for the shared math helpers

use tickscan::indicators::math::{
    ema, ema_series, highest, lowest, mean_abs_deviation, population_std_dev, sma,
};

#[test]
fn test_sma_basic() {
    let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(sma(&values, 5), Some(3.0));
    assert_eq!(sma(&values, 2), Some(4.5));
}

#[test]
fn test_sma_insufficient_data() {
    let values = vec![1.0, 2.0];
    assert!(sma(&values, 3).is_none());
    assert!(sma(&values, 0).is_none());
}

#[test]
fn test_ema_equals_sma_when_period_is_full_length() {
    // With no points after the seed, EMA is exactly the seed SMA.
    let values = vec![10.0, 11.0, 12.0, 13.0, 14.0];
    assert_eq!(ema(&values, 5), sma(&values, 5));
}

#[test]
fn test_ema_series_length() {
    let values: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let series = ema_series(&values, 10).unwrap();
    assert_eq!(series.len(), 21);
}

#[test]
fn test_ema_tracks_rising_values() {
    let values: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
    let short = ema(&values, 5).unwrap();
    let long = ema(&values, 30).unwrap();
    // A shorter period hugs the latest (highest) values more closely.
    assert!(short > long);
}

#[test]
fn test_population_std_dev() {
    let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let std = population_std_dev(&values, 8).unwrap();
    assert!((std - 2.0).abs() < 1e-9);
}

#[test]
fn test_mean_abs_deviation() {
    let values = vec![1.0, 2.0, 3.0];
    let mad = mean_abs_deviation(&values, 3).unwrap();
    assert!((mad - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_highest_lowest() {
    let values = vec![3.0, 1.0, 4.0, 1.5];
    assert_eq!(highest(&values), Some(4.0));
    assert_eq!(lowest(&values), Some(1.0));
    assert_eq!(highest(&[]), None);
}
