//! Scan scoring: per-scan-type fundamental strategies plus the
//! technical bonus pass. Scores are plain sums of signed signal
//! weights, so re-scoring identical inputs always reproduces them.

pub mod strategies;
pub mod technical;

pub use strategies::{strategy_for, ScoringStrategy};
pub use technical::technical_bonus;

use crate::models::scan::{Recommendation, ScanSignal, SignalKind};

/// Map a final score onto a recommendation tier.
pub fn recommendation_for(score: i32) -> Recommendation {
    if score >= 70 {
        Recommendation::StrongBuy
    } else if score >= 50 {
        Recommendation::Buy
    } else if score >= 30 {
        Recommendation::Hold
    } else if score >= 10 {
        Recommendation::Sell
    } else {
        Recommendation::StrongSell
    }
}

/// The three highest-weight positive signals, for the displayable
/// reason summary.
pub fn summarize_reasons(signals: &[ScanSignal]) -> Vec<String> {
    let mut positive: Vec<&ScanSignal> = signals
        .iter()
        .filter(|s| s.kind == SignalKind::Positive)
        .collect();
    positive.sort_by(|a, b| b.weight.cmp(&a.weight));
    positive.iter().take(3).map(|s| s.message.clone()).collect()
}
