//! Error taxonomy for the scanner core.
//!
//! Per-symbol problems during a scan are tallied, not raised; these
//! variants cover the cases that do surface to a caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Network or HTTP failure talking to an upstream source. Callers
    /// degrade to stale cache or skip the symbol.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Filter combination rejected before any fetch occurs.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// Universe selection produced no candidates; the only way a whole
    /// scan fails.
    #[error("no candidates for scan type {0}")]
    EmptyUniverse(String),
}
