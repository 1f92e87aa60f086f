//! Unit tests for filter validation and the pre-score pass

use std::collections::HashSet;

use tickscan::error::ScanError;
use tickscan::models::market::Quote;
use tickscan::models::scan::ScanFilters;
use tickscan::scanner::filters::{passes, validate};

fn sample_quote() -> Quote {
    let mut quote = Quote::new("AAPL", 180.0);
    quote.market_cap = Some(2.8e12);
    quote.pe_ratio = Some(28.0);
    quote.pb_ratio = Some(45.0);
    quote.dividend_yield = Some(0.5);
    quote.sector = Some("Technology".to_string());
    quote.country = Some("US".to_string());
    quote
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(validate(&ScanFilters::default()).is_ok());
}

#[test]
fn test_validate_rejects_empty_market_set() {
    let filters = ScanFilters {
        markets: Some(HashSet::new()),
        ..Default::default()
    };
    assert!(matches!(
        validate(&filters),
        Err(ScanError::InvalidFilter(_))
    ));
}

#[test]
fn test_validate_rejects_inverted_price_range() {
    let filters = ScanFilters {
        min_price: Some(100.0),
        max_price: Some(10.0),
        ..Default::default()
    };
    assert!(matches!(
        validate(&filters),
        Err(ScanError::InvalidFilter(_))
    ));
}

#[test]
fn test_validate_rejects_inverted_market_cap_range() {
    let filters = ScanFilters {
        min_market_cap: Some(1e12),
        max_market_cap: Some(1e9),
        ..Default::default()
    };
    assert!(validate(&filters).is_err());
}

#[test]
fn test_validate_rejects_zero_limit() {
    let filters = ScanFilters {
        limit: Some(0),
        ..Default::default()
    };
    assert!(validate(&filters).is_err());
}

#[test]
fn test_passes_with_no_active_filters() {
    assert!(passes(&ScanFilters::default(), &sample_quote()));
}

#[test]
fn test_passes_price_band() {
    let filters = ScanFilters {
        min_price: Some(100.0),
        max_price: Some(200.0),
        ..Default::default()
    };
    assert!(passes(&filters, &sample_quote()));

    let cheap = Quote::new("PNY", 3.0);
    assert!(!passes(&filters, &cheap));
}

#[test]
fn test_passes_market_filter_matches_country() {
    let filters = ScanFilters {
        markets: Some(HashSet::from(["US".to_string()])),
        ..Default::default()
    };
    assert!(passes(&filters, &sample_quote()));

    let filters = ScanFilters {
        markets: Some(HashSet::from(["JP".to_string()])),
        ..Default::default()
    };
    assert!(!passes(&filters, &sample_quote()));
}

#[test]
fn test_missing_field_fails_active_numeric_filter() {
    // The quote has no P/E, so any P/E filter drops it.
    let bare = Quote::new("BARE", 50.0);
    let filters = ScanFilters {
        max_pe: Some(100.0),
        ..Default::default()
    };
    assert!(!passes(&filters, &bare));

    // Same for dividend yield and market cap.
    let filters = ScanFilters {
        min_dividend_yield: Some(0.1),
        ..Default::default()
    };
    assert!(!passes(&filters, &bare));

    let filters = ScanFilters {
        min_market_cap: Some(1e6),
        ..Default::default()
    };
    assert!(!passes(&filters, &bare));
}

#[test]
fn test_missing_country_fails_market_filter() {
    let mut quote = sample_quote();
    quote.country = None;
    let filters = ScanFilters {
        markets: Some(HashSet::from(["US".to_string()])),
        ..Default::default()
    };
    assert!(!passes(&filters, &quote));
}

#[test]
fn test_sector_filter_matches_substring_case_insensitive() {
    let filters = ScanFilters {
        sectors: Some(HashSet::from(["tech".to_string()])),
        ..Default::default()
    };
    assert!(passes(&filters, &sample_quote()));

    let filters = ScanFilters {
        sectors: Some(HashSet::from(["Energy".to_string()])),
        ..Default::default()
    };
    assert!(!passes(&filters, &sample_quote()));
}

#[test]
fn test_dividend_yield_floor() {
    let filters = ScanFilters {
        min_dividend_yield: Some(2.0),
        ..Default::default()
    };
    assert!(!passes(&filters, &sample_quote()));

    let mut payer = sample_quote();
    payer.dividend_yield = Some(4.5);
    assert!(passes(&filters, &payer));
}
