//! One scoring strategy per scan type.
//!
//! Every strategy is an additive function over quote fundamentals: each
//! observation contributes a signed weight and a readable message. No
//! multiplication, no hidden state.

use crate::models::market::Quote;
use crate::models::scan::{ScanSignal, ScanType};

pub trait ScoringStrategy: Send + Sync {
    fn scan_type(&self) -> ScanType;

    /// Fundamental score for one quote. Deterministic: identical quotes
    /// produce an identical score and signal order.
    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>);
}

/// Lookup for the strategy implementing a scan type.
pub fn strategy_for(scan_type: ScanType) -> Box<dyn ScoringStrategy> {
    match scan_type {
        ScanType::Undervalued => Box::new(UndervaluedStrategy),
        ScanType::Momentum => Box::new(MomentumStrategy),
        ScanType::Growth => Box::new(GrowthStrategy),
        ScanType::Value => Box::new(ValueStrategy),
        ScanType::Quality => Box::new(QualityStrategy),
        ScanType::Turnaround => Box::new(TurnaroundStrategy),
        ScanType::Breakout => Box::new(BreakoutStrategy),
        ScanType::PennyStock => Box::new(PennyStockStrategy),
        ScanType::CryptoMining => Box::new(CryptoMiningStrategy),
    }
}

/// Collector that keeps score and signal list in lockstep.
struct Signals {
    total: i32,
    list: Vec<ScanSignal>,
}

impl Signals {
    fn new() -> Self {
        Self {
            total: 0,
            list: Vec::new(),
        }
    }

    fn plus(&mut self, category: &str, message: String, weight: i32) {
        self.total += weight;
        self.list.push(ScanSignal::positive(category, message, weight));
    }

    fn minus(&mut self, category: &str, message: String, weight: i32) {
        let signal = ScanSignal::negative(category, message, weight);
        self.total += signal.weight;
        self.list.push(signal);
    }

    fn into_parts(self) -> (i32, Vec<ScanSignal>) {
        (self.total, self.list)
    }
}

pub struct UndervaluedStrategy;

impl ScoringStrategy for UndervaluedStrategy {
    fn scan_type(&self) -> ScanType {
        ScanType::Undervalued
    }

    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>) {
        let mut signals = Signals::new();

        if let Some(pe) = quote.pe_ratio {
            if pe > 0.0 && pe < 10.0 {
                signals.plus("valuation", format!("Deeply discounted P/E of {:.1}", pe), 25);
            } else if pe > 0.0 && pe < 15.0 {
                signals.plus("valuation", format!("Low P/E of {:.1}", pe), 15);
            } else if pe > 30.0 {
                signals.minus("valuation", format!("Rich P/E of {:.1}", pe), 15);
            }
        }

        if let Some(pb) = quote.pb_ratio {
            if pb > 0.0 && pb < 1.0 {
                signals.plus("valuation", format!("Trading below book value (P/B {:.2})", pb), 20);
            } else if pb > 0.0 && pb < 2.0 {
                signals.plus("valuation", format!("Modest P/B of {:.2}", pb), 10);
            } else if pb > 5.0 {
                signals.minus("valuation", format!("High P/B of {:.2}", pb), 10);
            }
        }

        if let Some(yield_pct) = quote.dividend_yield {
            if yield_pct > 3.0 {
                signals.plus("dividend", format!("Dividend yield {:.1}% pays to wait", yield_pct), 15);
            }
        }

        if let Some(position) = quote.week52_position() {
            if position < 0.3 {
                signals.plus(
                    "range",
                    format!("Near 52-week low ({:.0}% of range)", position * 100.0),
                    15,
                );
            }
        }

        signals.into_parts()
    }
}

pub struct MomentumStrategy;

impl ScoringStrategy for MomentumStrategy {
    fn scan_type(&self) -> ScanType {
        ScanType::Momentum
    }

    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>) {
        let mut signals = Signals::new();

        if let Some(change) = quote.change_percent() {
            if change > 3.0 {
                signals.plus("momentum", format!("Up {:.1}% today", change), 20);
            } else if change > 1.0 {
                signals.plus("momentum", format!("Up {:.1}% today", change), 10);
            } else if change < 0.0 {
                signals.minus("momentum", format!("Down {:.1}% today", change.abs()), 15);
            }
        }

        if let Some(ratio) = quote.volume_ratio() {
            if ratio > 2.0 {
                signals.plus("volume", format!("Volume {:.1}x average", ratio), 20);
            } else if ratio > 1.5 {
                signals.plus("volume", format!("Volume {:.1}x average", ratio), 10);
            }
        }

        if let Some(position) = quote.week52_position() {
            if position > 0.8 {
                signals.plus(
                    "range",
                    format!("Strength near 52-week high ({:.0}% of range)", position * 100.0),
                    15,
                );
            } else if position < 0.3 {
                signals.minus("range", "Stuck near 52-week low".to_string(), 10);
            }
        }

        signals.into_parts()
    }
}

pub struct GrowthStrategy;

impl ScoringStrategy for GrowthStrategy {
    fn scan_type(&self) -> ScanType {
        ScanType::Growth
    }

    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>) {
        let mut signals = Signals::new();

        if let Some(position) = quote.week52_position() {
            if position > 0.6 {
                signals.plus(
                    "range",
                    format!("Sustained uptrend ({:.0}% of 52-week range)", position * 100.0),
                    15,
                );
            }
        }

        if let Some(beta) = quote.beta {
            if beta > 1.2 {
                signals.plus("profile", format!("High-growth profile (beta {:.2})", beta), 10);
            }
        }

        if let Some(ps) = quote.ps_ratio {
            if ps > 0.0 && ps < 5.0 {
                signals.plus("valuation", format!("Reasonable P/S of {:.1}", ps), 10);
            } else if ps > 15.0 {
                signals.minus("valuation", format!("Stretched P/S of {:.1}", ps), 10);
            }
        }

        if let Some(pe) = quote.pe_ratio {
            if pe > 60.0 {
                signals.minus("valuation", format!("Very rich P/E of {:.1}", pe), 10);
            }
        }

        if let Some(change) = quote.change_percent() {
            if change > 2.0 {
                signals.plus("momentum", format!("Up {:.1}% today", change), 10);
            }
        }

        signals.into_parts()
    }
}

pub struct ValueStrategy;

impl ScoringStrategy for ValueStrategy {
    fn scan_type(&self) -> ScanType {
        ScanType::Value
    }

    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>) {
        let mut signals = Signals::new();

        if let Some(pe) = quote.pe_ratio {
            if pe > 0.0 && pe < 12.0 {
                signals.plus("valuation", format!("Value P/E of {:.1}", pe), 20);
            } else if pe > 25.0 {
                signals.minus("valuation", format!("P/E {:.1} above value territory", pe), 10);
            }
        }

        if let Some(pb) = quote.pb_ratio {
            if pb > 0.0 && pb < 1.5 {
                signals.plus("valuation", format!("Low P/B of {:.2}", pb), 20);
            }
        }

        if let Some(yield_pct) = quote.dividend_yield {
            if yield_pct > 4.0 {
                signals.plus("dividend", format!("Generous dividend yield {:.1}%", yield_pct), 20);
            } else if yield_pct > 2.0 {
                signals.plus("dividend", format!("Dividend yield {:.1}%", yield_pct), 10);
            }
        } else {
            signals.minus("dividend", "No dividend".to_string(), 5);
        }

        if let Some(cap) = quote.market_cap {
            if cap > 10e9 {
                signals.plus("size", "Large cap stability".to_string(), 10);
            }
        }

        if let Some(position) = quote.week52_position() {
            if position < 0.4 {
                signals.plus("range", "Priced in the lower half of its range".to_string(), 10);
            }
        }

        signals.into_parts()
    }
}

pub struct QualityStrategy;

impl ScoringStrategy for QualityStrategy {
    fn scan_type(&self) -> ScanType {
        ScanType::Quality
    }

    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>) {
        let mut signals = Signals::new();

        if let Some(cap) = quote.market_cap {
            if cap > 50e9 {
                signals.plus("size", "Mega-cap franchise".to_string(), 20);
            } else if cap > 10e9 {
                signals.plus("size", "Large cap".to_string(), 10);
            }
        }

        if let Some(beta) = quote.beta {
            if (0.5..=1.2).contains(&beta) {
                signals.plus("profile", format!("Steady beta of {:.2}", beta), 15);
            } else if beta > 2.0 {
                signals.minus("profile", format!("Volatile beta of {:.2}", beta), 15);
            }
        }

        if let Some(pe) = quote.pe_ratio {
            if (8.0..=25.0).contains(&pe) {
                signals.plus("valuation", format!("Sensible P/E of {:.1}", pe), 15);
            }
        }

        if let Some(yield_pct) = quote.dividend_yield {
            if yield_pct > 1.0 {
                signals.plus("dividend", format!("Pays a {:.1}% dividend", yield_pct), 10);
            }
        }

        signals.into_parts()
    }
}

pub struct TurnaroundStrategy;

impl ScoringStrategy for TurnaroundStrategy {
    fn scan_type(&self) -> ScanType {
        ScanType::Turnaround
    }

    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>) {
        let mut signals = Signals::new();

        if let Some(position) = quote.week52_position() {
            if position < 0.2 {
                signals.plus(
                    "range",
                    format!("Beaten down to {:.0}% of its 52-week range", position * 100.0),
                    25,
                );
            } else if position > 0.5 {
                signals.minus("range", "Already recovered past mid-range".to_string(), 10);
            }
        }

        if let Some(change) = quote.change_percent() {
            if change > 2.0 {
                signals.plus("momentum", format!("Bounce underway, up {:.1}% today", change), 15);
            }
        }

        if let Some(ratio) = quote.volume_ratio() {
            if ratio > 1.5 {
                signals.plus("volume", format!("Interest returning, volume {:.1}x", ratio), 10);
            }
        }

        if let Some(pb) = quote.pb_ratio {
            if pb > 0.0 && pb < 1.0 {
                signals.plus("valuation", format!("Below book value (P/B {:.2})", pb), 15);
            }
        }

        signals.into_parts()
    }
}

pub struct BreakoutStrategy;

impl ScoringStrategy for BreakoutStrategy {
    fn scan_type(&self) -> ScanType {
        ScanType::Breakout
    }

    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>) {
        let mut signals = Signals::new();

        if let Some(position) = quote.week52_position() {
            if position > 0.95 {
                signals.plus("range", "Pressing its 52-week high".to_string(), 25);
            } else if position > 0.85 {
                signals.plus("range", "Approaching its 52-week high".to_string(), 10);
            }
        }

        if let Some(ratio) = quote.volume_ratio() {
            if ratio > 2.0 {
                signals.plus("volume", format!("Breakout volume {:.1}x average", ratio), 20);
            } else if ratio < 0.8 {
                signals.minus("volume", "Volume too thin for a breakout".to_string(), 10);
            }
        }

        if let Some(change) = quote.change_percent() {
            if change > 2.0 {
                signals.plus("momentum", format!("Up {:.1}% today", change), 15);
            }
        }

        if let Some(beta) = quote.beta {
            if beta > 1.0 {
                signals.plus("profile", format!("Beta {:.2} amplifies the move", beta), 5);
            }
        }

        signals.into_parts()
    }
}

pub struct PennyStockStrategy;

impl ScoringStrategy for PennyStockStrategy {
    fn scan_type(&self) -> ScanType {
        ScanType::PennyStock
    }

    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>) {
        let mut signals = Signals::new();

        if quote.price < 1.0 {
            signals.plus("price", format!("Sub-dollar price ${:.2}", quote.price), 15);
        } else if quote.price < 5.0 {
            signals.plus("price", format!("Penny range price ${:.2}", quote.price), 10);
        } else {
            signals.minus("price", format!("${:.2} is above penny territory", quote.price), 30);
        }

        if let Some(ratio) = quote.volume_ratio() {
            if ratio > 2.0 {
                signals.plus("volume", format!("Speculative volume {:.1}x average", ratio), 20);
            }
        }

        if let Some(change) = quote.change_percent() {
            if change > 5.0 {
                signals.plus("momentum", format!("Up {:.1}% today", change), 20);
            } else if change < -5.0 {
                signals.minus("momentum", format!("Down {:.1}% today", change.abs()), 15);
            }
        }

        if let Some(cap) = quote.market_cap {
            if cap < 300e6 {
                signals.plus("size", "Micro cap with room to rerate".to_string(), 10);
            }
        }

        signals.into_parts()
    }
}

pub struct CryptoMiningStrategy;

impl ScoringStrategy for CryptoMiningStrategy {
    fn scan_type(&self) -> ScanType {
        ScanType::CryptoMining
    }

    fn score(&self, quote: &Quote) -> (i32, Vec<ScanSignal>) {
        let mut signals = Signals::new();

        let descriptor = format!(
            "{} {}",
            quote.sector.as_deref().unwrap_or_default(),
            quote.industry.as_deref().unwrap_or_default()
        )
        .to_lowercase();
        if descriptor.contains("crypto")
            || descriptor.contains("mining")
            || descriptor.contains("blockchain")
        {
            signals.plus("sector", "Direct crypto-mining exposure".to_string(), 20);
        } else if descriptor.contains("technology") {
            signals.plus("sector", "Adjacent technology exposure".to_string(), 5);
        }

        if let Some(change) = quote.change_percent() {
            if change > 3.0 {
                signals.plus("momentum", format!("Up {:.1}% today", change), 15);
            } else if change < -3.0 {
                signals.minus("momentum", format!("Down {:.1}% today", change.abs()), 10);
            }
        }

        if let Some(ratio) = quote.volume_ratio() {
            if ratio > 1.5 {
                signals.plus("volume", format!("Volume {:.1}x average", ratio), 15);
            }
        }

        if let Some(beta) = quote.beta {
            if beta > 1.5 {
                signals.plus("profile", format!("High beta of {:.2}", beta), 10);
            }
        }

        signals.into_parts()
    }
}
