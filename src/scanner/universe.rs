//! Candidate universe selection.
//!
//! Each scan type starts from a static pool: the default pool is ordered
//! roughly by liquidity, the penny pool leans toward short, liquid
//! low-priced names, crypto mining is a curated list, and the Shariah
//! pool is biased toward technology and healthcare. Sampling is a
//! deterministic stride over the pool so back-to-back scans see the same
//! universe.

use tracing::{debug, info};

use crate::config::ScannerConfig;
use crate::models::scan::{ScanFilters, ScanType};
use crate::services::MarketDataService;

/// Liquidity-biased default pool.
const DEFAULT_POOL: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA", "BRK-B", "LLY", "AVGO",
    "JPM", "V", "UNH", "XOM", "MA", "JNJ", "PG", "HD", "COST", "ORCL",
    "MRK", "ABBV", "CVX", "CRM", "BAC", "AMD", "NFLX", "KO", "PEP", "TMO",
    "WMT", "ADBE", "LIN", "DIS", "MCD", "CSCO", "ABT", "WFC", "INTU", "QCOM",
    "CAT", "IBM", "GE", "AMAT", "VZ", "TXN", "CMCSA", "NOW", "PFE", "NKE",
    "UNP", "PM", "AXP", "COP", "HON", "T", "MS", "LOW", "SPGI", "UPS",
    "RTX", "GS", "NEE", "INTC", "BA", "ISRG", "SCHW", "BKNG", "ELV", "MDT",
    "PLD", "BLK", "TJX", "DE", "LMT", "SYK", "CB", "REGN", "ADP", "MMC",
    "CI", "VRTX", "AMT", "GILD", "ADI", "SBUX", "MDLZ", "ETN", "ZTS", "SO",
    "BSX", "MU", "BDX", "CME", "PANW", "DUK", "ITW", "CL", "SNPS", "EOG",
    "FDX", "CSX", "NOC", "WM", "APD", "HUM", "ORLY", "SHW", "MCK", "TGT",
    "EMR", "PSA", "ROP", "MAR", "AON", "GD", "PH", "NSC", "F", "GM",
];

/// Short, liquid names usually trading under $5.
const PENNY_POOL: &[&str] = &[
    "SIRI", "NOK", "PLTR", "SOFI", "BBD", "VALE", "ITUB", "GOLD", "SNAP", "LCID",
    "NIO", "GRAB", "AMC", "PLUG", "FCEL", "OPEN", "CHPT", "RIG", "TLRY", "SENS",
    "BITE", "GSAT", "DNN", "UUUU", "BTG", "NGD", "EGO", "IAG", "HL", "KGC",
    "AG", "EXK", "FSM", "SAND", "PAAS", "CDE", "SVM", "MUX", "TRX", "GROY",
];

/// Curated crypto-mining and adjacent infrastructure names.
const CRYPTO_MINING_POOL: &[&str] = &[
    "MARA", "RIOT", "CLSK", "HUT", "BITF", "CIFR", "WULF", "CORZ", "IREN", "BTBT",
    "HIVE", "CAN", "BTDR", "GREE", "SDIG", "COIN", "MSTR",
];

/// Tech/healthcare-biased pool for Shariah-filtered scans; conventional
/// finance is left out up front.
const SHARIAH_POOL: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "NVDA", "META", "ADBE", "CRM", "ORCL", "CSCO", "QCOM",
    "TXN", "AMAT", "ADI", "SNPS", "NOW", "INTU", "PANW", "MU", "LRCX", "KLAC",
    "JNJ", "LLY", "MRK", "ABBV", "TMO", "ABT", "MDT", "ISRG", "SYK", "BSX",
    "VRTX", "REGN", "GILD", "ZTS", "BDX", "ELV", "HUM", "DHR", "EW", "IDXX",
    "PG", "KO", "PEP", "CL", "MDLZ", "NKE", "MCD", "SBUX", "HD", "LOW",
];

pub struct UniverseSelector;

impl UniverseSelector {
    /// Pick the candidate symbols for one scan run.
    ///
    /// A sector filter that matches nothing falls back to the unfiltered
    /// sample instead of returning an empty universe.
    pub async fn select(
        scan_type: ScanType,
        filters: &ScanFilters,
        config: &ScannerConfig,
        market: &MarketDataService,
    ) -> Vec<String> {
        let pool: Vec<String> = match scan_type {
            ScanType::PennyStock => PENNY_POOL.iter().map(|s| s.to_string()).collect(),
            // Curated list, no sampling.
            ScanType::CryptoMining => {
                return CRYPTO_MINING_POOL.iter().map(|s| s.to_string()).collect()
            }
            _ if filters.shariah_only => {
                SHARIAH_POOL.iter().map(|s| s.to_string()).collect()
            }
            _ => DEFAULT_POOL.iter().map(|s| s.to_string()).collect(),
        };

        let sample = stride_sample(&pool, config.universe_sample_size);

        let Some(sectors) = filters.sectors.as_ref().filter(|s| !s.is_empty()) else {
            return sample;
        };

        let keywords: Vec<String> = sectors.iter().map(|s| s.to_lowercase()).collect();
        let mut matched = Vec::new();
        for symbol in &sample {
            if let Some(profile) = market.profile(symbol).await {
                let descriptor = format!(
                    "{} {}",
                    profile.sector.as_deref().unwrap_or_default(),
                    profile.industry.as_deref().unwrap_or_default()
                )
                .to_lowercase();
                if keywords.iter().any(|kw| descriptor.contains(kw)) {
                    matched.push(symbol.clone());
                }
            }
        }

        if matched.is_empty() {
            info!(
                scan_type = scan_type.as_str(),
                "sector filter matched nothing, falling back to unfiltered sample"
            );
            return sample;
        }
        debug!(
            scan_type = scan_type.as_str(),
            matched = matched.len(),
            sampled = sample.len(),
            "sector-filtered universe"
        );
        matched
    }
}

/// Deterministic spread over the pool: take every k-th symbol until
/// `size` are collected.
fn stride_sample(pool: &[String], size: usize) -> Vec<String> {
    if pool.len() <= size || size == 0 {
        return pool.to_vec();
    }
    let stride = pool.len() / size;
    pool.iter()
        .step_by(stride.max(1))
        .take(size)
        .cloned()
        .collect()
}
