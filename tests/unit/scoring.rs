//! Unit tests for fundamental scoring strategies and recommendation tiers

use tickscan::models::indicators::{IndicatorBundle, OverallSignal, RsiIndicator};
use tickscan::models::market::Quote;
use tickscan::models::scan::{Recommendation, ScanSignal, ScanType, SignalKind};
use tickscan::scoring::{recommendation_for, strategy_for, summarize_reasons, technical_bonus};

fn bargain_quote() -> Quote {
    let mut quote = Quote::new("VALU", 20.0);
    quote.pe_ratio = Some(8.0);
    quote.pb_ratio = Some(0.8);
    quote.dividend_yield = Some(4.0);
    quote.week52_low = Some(18.0);
    quote.week52_high = Some(40.0);
    quote
}

fn runner_quote() -> Quote {
    let mut quote = Quote::new("MOMO", 95.0);
    quote.previous_close = Some(90.0);
    quote.volume = Some(30_000_000.0);
    quote.avg_volume = Some(10_000_000.0);
    quote.week52_low = Some(40.0);
    quote.week52_high = Some(100.0);
    quote
}

#[test]
fn test_undervalued_rewards_cheap_multiples() {
    let (score, signals) = strategy_for(ScanType::Undervalued).score(&bargain_quote());
    // P/E < 10 (+25), P/B < 1 (+20), yield > 3 (+15), bottom of range (+15).
    assert_eq!(score, 75);
    assert_eq!(signals.len(), 4);
    assert!(signals.iter().all(|s| s.kind == SignalKind::Positive));
}

#[test]
fn test_undervalued_penalizes_rich_multiples() {
    let mut quote = Quote::new("RICH", 500.0);
    quote.pe_ratio = Some(45.0);
    let (score, signals) = strategy_for(ScanType::Undervalued).score(&quote);
    assert_eq!(score, -15);
    assert_eq!(signals[0].kind, SignalKind::Negative);
}

#[test]
fn test_momentum_rewards_strength() {
    let (score, _) = strategy_for(ScanType::Momentum).score(&runner_quote());
    // Up 5.6% (+20), volume 3x (+20), 92% of range (+15).
    assert_eq!(score, 55);
}

#[test]
fn test_momentum_penalizes_weakness() {
    let mut quote = Quote::new("SLUG", 9.0);
    quote.previous_close = Some(10.0);
    quote.week52_low = Some(8.0);
    quote.week52_high = Some(20.0);
    let (score, _) = strategy_for(ScanType::Momentum).score(&quote);
    // Down 10% (-15), stuck near the low (-10).
    assert_eq!(score, -25);
}

#[test]
fn test_penny_stock_rejects_non_penny_prices() {
    let quote = Quote::new("BLUE", 150.0);
    let (score, signals) = strategy_for(ScanType::PennyStock).score(&quote);
    assert_eq!(score, -30);
    assert_eq!(signals[0].category, "price");
}

#[test]
fn test_crypto_mining_needs_sector_exposure() {
    let mut miner = Quote::new("RIG", 12.0);
    miner.sector = Some("Technology".to_string());
    miner.industry = Some("Crypto Mining".to_string());
    let (miner_score, _) = strategy_for(ScanType::CryptoMining).score(&miner);

    let mut utility = Quote::new("UTIL", 60.0);
    utility.sector = Some("Utilities".to_string());
    let (utility_score, _) = strategy_for(ScanType::CryptoMining).score(&utility);

    assert_eq!(miner_score, 20);
    assert_eq!(utility_score, 0);
}

#[test]
fn test_missing_fields_score_zero_not_panic() {
    let bare = Quote::new("BARE", 50.0);
    for scan_type in ScanType::all() {
        let (score, _) = strategy_for(scan_type).score(&bare);
        // Penny stock is the one strategy that reads price alone.
        if scan_type == ScanType::PennyStock {
            assert_eq!(score, -30);
        } else if scan_type == ScanType::Value {
            assert_eq!(score, -5); // no-dividend penalty
        } else {
            assert_eq!(score, 0, "unexpected score for {}", scan_type.as_str());
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let quote = bargain_quote();
    for scan_type in ScanType::all() {
        let (first_score, first_signals) = strategy_for(scan_type).score(&quote);
        let (second_score, second_signals) = strategy_for(scan_type).score(&quote);
        assert_eq!(first_score, second_score);
        let first_messages: Vec<_> = first_signals.iter().map(|s| &s.message).collect();
        let second_messages: Vec<_> = second_signals.iter().map(|s| &s.message).collect();
        assert_eq!(first_messages, second_messages);
    }
}

#[test]
fn test_score_equals_sum_of_signal_weights() {
    for scan_type in ScanType::all() {
        let (score, signals) = strategy_for(scan_type).score(&runner_quote());
        let sum: i32 = signals.iter().map(|s| s.weight).sum();
        assert_eq!(score, sum);
    }
}

#[test]
fn test_recommendation_tier_boundaries() {
    assert_eq!(recommendation_for(70), Recommendation::StrongBuy);
    assert_eq!(recommendation_for(69), Recommendation::Buy);
    assert_eq!(recommendation_for(50), Recommendation::Buy);
    assert_eq!(recommendation_for(49), Recommendation::Hold);
    assert_eq!(recommendation_for(30), Recommendation::Hold);
    assert_eq!(recommendation_for(29), Recommendation::Sell);
    assert_eq!(recommendation_for(10), Recommendation::Sell);
    assert_eq!(recommendation_for(9), Recommendation::StrongSell);
    assert_eq!(recommendation_for(-40), Recommendation::StrongSell);
}

#[test]
fn test_reasons_are_top_three_positive_signals() {
    let signals = vec![
        ScanSignal::positive("a", "strong signal", 25),
        ScanSignal::negative("b", "bad news", 30),
        ScanSignal::positive("c", "decent signal", 15),
        ScanSignal::positive("d", "weak signal", 5),
        ScanSignal::positive("e", "solid signal", 20),
    ];
    let reasons = summarize_reasons(&signals);
    assert_eq!(reasons, vec!["strong signal", "solid signal", "decent signal"]);
}

fn oversold_bundle() -> IndicatorBundle {
    let mut bundle = IndicatorBundle::new("TEST", 50.0);
    bundle.rsi = Some(RsiIndicator {
        value: 22.0,
        period: Some(14),
    });
    bundle
}

#[test]
fn test_oversold_rsi_splits_by_scan_family() {
    // An entry point for value scans, a broken trend for momentum ones.
    let (value_bonus, _) = technical_bonus(ScanType::Undervalued, &oversold_bundle());
    assert_eq!(value_bonus, 10);

    let (momentum_bonus, _) = technical_bonus(ScanType::Momentum, &oversold_bundle());
    assert_eq!(momentum_bonus, -5);
}

#[test]
fn test_empty_bundle_contributes_nothing() {
    let bundle = IndicatorBundle::new("TEST", 50.0);
    for scan_type in ScanType::all() {
        let (bonus, signals) = technical_bonus(scan_type, &bundle);
        assert_eq!(bonus, 0);
        assert!(signals.is_empty());
    }
}

#[test]
fn test_neutral_overall_trend_is_reported_without_weight() {
    let mut bundle = IndicatorBundle::new("TEST", 50.0);
    bundle.overall = Some(OverallSignal::Hold);
    let (bonus, signals) = technical_bonus(ScanType::Momentum, &bundle);
    assert_eq!(bonus, 0);
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].kind, SignalKind::Neutral);
    assert_eq!(signals[0].weight, 0);
}

#[test]
fn test_high_volume_rewards_momentum_more_than_value() {
    let mut bundle = IndicatorBundle::new("TEST", 50.0);
    bundle.volume_ratio = Some(2.5);
    let (momentum_bonus, _) = technical_bonus(ScanType::Momentum, &bundle);
    let (value_bonus, _) = technical_bonus(ScanType::Value, &bundle);
    assert_eq!(momentum_bonus, 10);
    assert_eq!(value_bonus, 5);
}

#[test]
fn test_reasons_empty_when_nothing_positive() {
    let signals = vec![ScanSignal::negative("a", "bad news", 10)];
    assert!(summarize_reasons(&signals).is_empty());
}
