//! Filter validation and the short-circuit pre-score pass.

use crate::error::ScanError;
use crate::models::market::Quote;
use crate::models::scan::ScanFilters;

/// Reject impossible filter combinations before any fetch happens.
pub fn validate(filters: &ScanFilters) -> Result<(), ScanError> {
    if let Some(markets) = &filters.markets {
        if markets.is_empty() {
            return Err(ScanError::InvalidFilter(
                "at least one market must be selected".to_string(),
            ));
        }
    }
    if let (Some(min), Some(max)) = (filters.min_price, filters.max_price) {
        if min > max {
            return Err(ScanError::InvalidFilter(format!(
                "min price {} exceeds max price {}",
                min, max
            )));
        }
    }
    if let (Some(min), Some(max)) = (filters.min_market_cap, filters.max_market_cap) {
        if min > max {
            return Err(ScanError::InvalidFilter(
                "min market cap exceeds max market cap".to_string(),
            ));
        }
    }
    if let Some(limit) = filters.limit {
        if limit == 0 {
            return Err(ScanError::InvalidFilter(
                "result limit must be positive".to_string(),
            ));
        }
    }
    Ok(())
}

/// True when the quote survives every active filter. Short-circuit: the
/// first failing filter drops the stock, no partial credit.
pub fn passes(filters: &ScanFilters, quote: &Quote) -> bool {
    if let Some(markets) = &filters.markets {
        match &quote.country {
            Some(country) if markets.contains(country) => {}
            _ => return false,
        }
    }
    if let Some(min) = filters.min_price {
        if quote.price < min {
            return false;
        }
    }
    if let Some(max) = filters.max_price {
        if quote.price > max {
            return false;
        }
    }
    if let Some(min) = filters.min_market_cap {
        if quote.market_cap.map_or(true, |cap| cap < min) {
            return false;
        }
    }
    if let Some(max) = filters.max_market_cap {
        if quote.market_cap.map_or(true, |cap| cap > max) {
            return false;
        }
    }
    if let Some(min) = filters.min_pe {
        if quote.pe_ratio.map_or(true, |pe| pe < min) {
            return false;
        }
    }
    if let Some(max) = filters.max_pe {
        if quote.pe_ratio.map_or(true, |pe| pe > max) {
            return false;
        }
    }
    if let Some(min) = filters.min_pb {
        if quote.pb_ratio.map_or(true, |pb| pb < min) {
            return false;
        }
    }
    if let Some(max) = filters.max_pb {
        if quote.pb_ratio.map_or(true, |pb| pb > max) {
            return false;
        }
    }
    if let Some(min) = filters.min_dividend_yield {
        if quote.dividend_yield.map_or(true, |y| y < min) {
            return false;
        }
    }
    if let Some(sectors) = &filters.sectors {
        if !sectors.is_empty() {
            let sector = quote.sector.as_deref().unwrap_or_default().to_lowercase();
            if !sectors.iter().any(|s| sector.contains(&s.to_lowercase())) {
                return false;
            }
        }
    }
    true
}
