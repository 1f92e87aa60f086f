use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::compliance::ComplianceResult;
use crate::models::market::Quote;

/// Named investment strategy driving universe selection and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanType {
    Undervalued,
    Momentum,
    Growth,
    Value,
    Quality,
    Turnaround,
    Breakout,
    PennyStock,
    CryptoMining,
}

impl ScanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undervalued => "undervalued",
            Self::Momentum => "momentum",
            Self::Growth => "growth",
            Self::Value => "value",
            Self::Quality => "quality",
            Self::Turnaround => "turnaround",
            Self::Breakout => "breakout",
            Self::PennyStock => "penny_stock",
            Self::CryptoMining => "crypto_mining",
        }
    }

    pub fn all() -> [ScanType; 9] {
        [
            Self::Undervalued,
            Self::Momentum,
            Self::Growth,
            Self::Value,
            Self::Quality,
            Self::Turnaround,
            Self::Breakout,
            Self::PennyStock,
            Self::CryptoMining,
        ]
    }
}

impl FromStr for ScanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undervalued" => Ok(Self::Undervalued),
            "momentum" => Ok(Self::Momentum),
            "growth" => Ok(Self::Growth),
            "value" => Ok(Self::Value),
            "quality" => Ok(Self::Quality),
            "turnaround" => Ok(Self::Turnaround),
            "breakout" => Ok(Self::Breakout),
            "penny_stock" => Ok(Self::PennyStock),
            "crypto_mining" => Ok(Self::CryptoMining),
            other => Err(format!("unknown scan type: {}", other)),
        }
    }
}

/// Caller-supplied filters applied before any scoring happens.
/// A stock failing any active filter is dropped outright.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanFilters {
    /// Country/market codes a candidate must belong to. Empty set is
    /// rejected by validation; `None` means no market filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markets: Option<HashSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_pe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_pb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_dividend_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sectors: Option<HashSet<String>>,
    /// Keep only Shariah-compliant candidates; switches the engine to the
    /// full two-part screen instead of the cheap tag.
    #[serde(default)]
    pub shariah_only: bool,
    /// Per-request cap on the result list; the engine takes the smaller
    /// of this and its configured limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Positive,
    Negative,
    Neutral,
}

/// One weighted scoring observation. The final score is the plain sum of
/// signal weights, so re-scoring the same quote reproduces it exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSignal {
    pub kind: SignalKind,
    pub category: String,
    pub message: String,
    pub weight: i32,
}

impl ScanSignal {
    pub fn positive(category: &str, message: impl Into<String>, weight: i32) -> Self {
        Self {
            kind: SignalKind::Positive,
            category: category.to_string(),
            message: message.into(),
            weight,
        }
    }

    pub fn negative(category: &str, message: impl Into<String>, weight: i32) -> Self {
        Self {
            kind: SignalKind::Negative,
            category: category.to_string(),
            message: message.into(),
            weight: -weight.abs(),
        }
    }

    pub fn neutral(category: &str, message: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Neutral,
            category: category.to_string(),
            message: message.into(),
            weight: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

/// One ranked scan hit. Built per run and discarded after the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub quote: Quote,
    pub score: i32,
    pub signals: Vec<ScanSignal>,
    pub recommendation: Recommendation,
    /// Top positive signal messages, for display.
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceResult>,
}

/// Per-run fetch accounting, surfaced for diagnostics. A run with zero
/// successful fetches returns an empty result list plus these counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanDiagnostics {
    pub requested: usize,
    pub fetched: usize,
    pub filtered_out: usize,
    pub scored_out: usize,
    /// Timeouts and per-symbol soft failures, skipped without retry.
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutput {
    pub scan_type: ScanType,
    pub results: Vec<ScanResult>,
    pub diagnostics: ScanDiagnostics,
}
