//! Scan orchestration: universe selection, fundamental fetch and
//! filtering, compliance tagging, scoring, technical enrichment of the
//! top candidates, and the final ranked assembly.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::compliance;
use crate::config::ScannerConfig;
use crate::error::ScanError;
use crate::indicators::compute_indicators;
use crate::models::compliance::{BusinessScreening, ComplianceResult, ComplianceStatus};
use crate::models::market::{HistoryRange, Quote};
use crate::models::scan::{
    ScanDiagnostics, ScanFilters, ScanOutput, ScanResult, ScanSignal, ScanType,
};
use crate::scanner::{filters, universe::UniverseSelector};
use crate::scoring::{recommendation_for, strategy_for, summarize_reasons, technical_bonus};
use crate::services::{MarketDataProvider, MarketDataService};

struct Candidate {
    /// Position in the fetched batch; the documented ranking tie-break.
    order: usize,
    quote: Quote,
    compliance: ComplianceResult,
    score: i32,
    signals: Vec<ScanSignal>,
}

/// The scanner core. Holds the shared market-data service, so concurrent
/// scans warm each other's caches; no per-scan isolation exists or is
/// wanted.
pub struct Scanner {
    market: Arc<MarketDataService>,
    config: ScannerConfig,
}

impl Scanner {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: ScannerConfig) -> Self {
        let market = Arc::new(MarketDataService::new(provider, &config));
        Self { market, config }
    }

    pub fn with_service(market: Arc<MarketDataService>, config: ScannerConfig) -> Self {
        Self { market, config }
    }

    pub fn market(&self) -> Arc<MarketDataService> {
        self.market.clone()
    }

    /// Run one scan.
    ///
    /// Per-symbol failures are tallied in the diagnostics and never abort
    /// the run; the only scan-level failures are invalid filters and an
    /// empty candidate universe.
    pub async fn run_scan(
        &self,
        scan_type: ScanType,
        filters: &ScanFilters,
    ) -> Result<ScanOutput, ScanError> {
        filters::validate(filters)?;

        let symbols =
            UniverseSelector::select(scan_type, filters, &self.config, &self.market).await;
        if symbols.is_empty() {
            return Err(ScanError::EmptyUniverse(scan_type.as_str().to_string()));
        }

        let mut diagnostics = ScanDiagnostics {
            requested: symbols.len(),
            ..Default::default()
        };

        let outcome = self.market.quotes_batch(&symbols).await;
        diagnostics.fetched = outcome.quotes.len();
        diagnostics.skipped = outcome.skipped;
        diagnostics.failed = outcome.failed;

        let survivors: Vec<(usize, Quote)> = outcome
            .quotes
            .into_iter()
            .enumerate()
            .filter(|(_, quote)| {
                let keep = filters::passes(filters, quote);
                if !keep {
                    diagnostics.filtered_out += 1;
                }
                keep
            })
            .collect();

        let mut candidates = self
            .score_candidates(scan_type, filters, survivors, &mut diagnostics)
            .await;

        // Fundamental rank, descending; ties resolve to fetch order.
        candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.order.cmp(&b.order)));

        self.enrich_top_candidates(scan_type, &mut candidates).await;

        // Re-rank after the bonus pass, same tie-break.
        candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.order.cmp(&b.order)));

        let limit = filters
            .limit
            .map_or(self.config.result_limit, |l| l.min(self.config.result_limit));
        candidates.truncate(limit);

        let results: Vec<ScanResult> = candidates
            .into_iter()
            .map(|c| ScanResult {
                recommendation: recommendation_for(c.score),
                reasons: summarize_reasons(&c.signals),
                quote: c.quote,
                score: c.score,
                signals: c.signals,
                compliance: Some(c.compliance),
            })
            .collect();

        info!(
            scan_type = scan_type.as_str(),
            requested = diagnostics.requested,
            fetched = diagnostics.fetched,
            results = results.len(),
            skipped = diagnostics.skipped,
            failed = diagnostics.failed,
            "scan complete"
        );

        Ok(ScanOutput {
            scan_type,
            results,
            diagnostics,
        })
    }

    /// Compliance tag plus fundamental score; drops anything non-positive.
    async fn score_candidates(
        &self,
        scan_type: ScanType,
        filters: &ScanFilters,
        survivors: Vec<(usize, Quote)>,
        diagnostics: &mut ScanDiagnostics,
    ) -> Vec<Candidate> {
        let strategy = strategy_for(scan_type);
        let mut candidates = Vec::with_capacity(survivors.len());

        for (order, quote) in survivors {
            let compliance = if filters.shariah_only {
                match self.full_compliance(&quote.symbol).await {
                    Some(result) => result,
                    None => {
                        // No profile to screen against: fail closed.
                        diagnostics.filtered_out += 1;
                        continue;
                    }
                }
            } else {
                quick_tag(&quote)
            };

            if filters.shariah_only && compliance.status != ComplianceStatus::Compliant {
                diagnostics.filtered_out += 1;
                continue;
            }

            let (score, signals) = strategy.score(&quote);
            if score <= self.config.min_fundamental_score {
                diagnostics.scored_out += 1;
                continue;
            }

            candidates.push(Candidate {
                order,
                quote,
                compliance,
                score,
                signals,
            });
        }

        debug!(
            scan_type = scan_type.as_str(),
            candidates = candidates.len(),
            scored_out = diagnostics.scored_out,
            "fundamental pass complete"
        );
        candidates
    }

    async fn full_compliance(&self, symbol: &str) -> Option<ComplianceResult> {
        let profile = self.market.profile(symbol).await?;
        let financials = self.market.financials(symbol).await;
        Some(compliance::full_screen(&profile, financials.as_ref()))
    }

    /// Fetch history and apply the technical bonus for the top-ranked
    /// candidates only; indicator computation plus the extra round-trip
    /// is the most expensive step, so the bound trades precision for cost.
    async fn enrich_top_candidates(&self, scan_type: ScanType, candidates: &mut [Candidate]) {
        let top_n = self.config.technical_top_n.min(candidates.len());
        if top_n == 0 {
            return;
        }

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_batches));
        let fetches = candidates[..top_n].iter().map(|c| {
            let market = self.market.clone();
            let symbol = c.quote.symbol.clone();
            let semaphore = semaphore.clone();
            async move {
                // Closed only on runtime shutdown.
                let _permit = semaphore.acquire().await.ok()?;
                let bars = market.history(&symbol, HistoryRange::SixMonths).await;
                if bars.is_empty() {
                    warn!(symbol = %symbol, "no history, skipping technical pass");
                    return None;
                }
                Some(compute_indicators(&symbol, &bars))
            }
        });

        let bundles = join_all(fetches).await;
        for (candidate, bundle) in candidates[..top_n].iter_mut().zip(bundles) {
            let Some(bundle) = bundle else { continue };
            let (bonus, mut signals) = technical_bonus(scan_type, &bundle);
            candidate.score += bonus;
            candidate.signals.append(&mut signals);
        }
    }
}

/// Cheap compliance tag from the quote's own sector/industry; the full
/// ratio screen is reserved for Shariah-filtered scans.
fn quick_tag(quote: &Quote) -> ComplianceResult {
    let passed = compliance::quick_check(quote.sector.as_deref(), quote.industry.as_deref());
    ComplianceResult {
        status: if passed {
            ComplianceStatus::Unknown
        } else {
            ComplianceStatus::NonCompliant
        },
        business: BusinessScreening {
            passed,
            concerns: Vec::new(),
            halal_percentage: if passed { 100.0 } else { 0.0 },
        },
        financial: None,
        purification_ratio: None,
    }
}
