//! tickscan: a market scanner and technical-indicator engine.
//!
//! The pipeline runs universe selection, batched cached quote fetches,
//! filtering, compliance tagging, per-scan-type fundamental scoring,
//! technical enrichment of the top candidates, and a final ranked
//! assembly. Upstream market-data clients stay behind the
//! [`services::MarketDataProvider`] trait.

pub mod cache;
pub mod compliance;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod scanner;
pub mod scoring;
pub mod services;

pub use config::ScannerConfig;
pub use error::ScanError;
pub use indicators::compute_indicators;
pub use scanner::Scanner;
