//! Shariah compliance screening: business-activity check plus the four
//! AAOIFI-style financial ratio screens.

use crate::models::compliance::{
    BusinessScreening, ComplianceResult, ComplianceStatus, FinancialScreening,
};
use crate::models::market::{CompanyProfile, RawFinancials};

/// Business activities that fail screening outright.
const HARAM_KEYWORDS: [&str; 8] = [
    "alcohol",
    "tobacco",
    "gambling",
    "casino",
    "adult entertainment",
    "pork",
    "brewer",
    "distiller",
];

/// Conventional finance terms; acceptable only alongside "islamic".
const FINANCIAL_KEYWORDS: [&str; 4] = ["bank", "banking", "insurance", "financial"];

const DEBT_RATIO_LIMIT: f64 = 0.33;
const INTEREST_INCOME_LIMIT: f64 = 0.05;
const RECEIVABLES_LIMIT: f64 = 0.45;
const CASH_RATIO_LIMIT: f64 = 0.33;

/// Conservative prefilter on sector/industry alone.
///
/// Fail-closed: a candidate with no sector and no industry is rejected
/// rather than waved through.
pub fn quick_check(sector: Option<&str>, industry: Option<&str>) -> bool {
    let combined = format!(
        "{} {}",
        sector.unwrap_or_default(),
        industry.unwrap_or_default()
    )
    .to_lowercase();

    if combined.trim().is_empty() {
        return false;
    }

    if HARAM_KEYWORDS.iter().any(|kw| combined.contains(kw)) {
        return false;
    }

    let conventional_finance = FINANCIAL_KEYWORDS.iter().any(|kw| combined.contains(kw));
    if conventional_finance && !combined.contains("islamic") {
        return false;
    }

    true
}

/// Full two-part screen over profile and raw financials.
pub fn full_screen(
    profile: &CompanyProfile,
    financials: Option<&RawFinancials>,
) -> ComplianceResult {
    let business = screen_business(profile);

    if !business.passed {
        return ComplianceResult {
            status: ComplianceStatus::NonCompliant,
            business,
            financial: financials.and_then(|f| screen_financials(f, profile.market_cap)),
            purification_ratio: financials.and_then(purification_ratio),
        };
    }

    let financial = financials.and_then(|f| screen_financials(f, profile.market_cap));
    let status = match &financial {
        Some(screen) if screen.all_passed() => ComplianceStatus::Compliant,
        Some(screen) if screen.any_passed() => ComplianceStatus::Doubtful,
        Some(_) => ComplianceStatus::NonCompliant,
        // Business passes but there is no ratio evidence either way.
        None => ComplianceStatus::Unknown,
    };

    ComplianceResult {
        status,
        business,
        financial,
        purification_ratio: financials.and_then(purification_ratio),
    }
}

fn screen_business(profile: &CompanyProfile) -> BusinessScreening {
    let industry_ok = quick_check(profile.sector.as_deref(), profile.industry.as_deref());

    let mut concerns = Vec::new();
    if !industry_ok {
        concerns.push(format!(
            "industry screening failed: {} / {}",
            profile.sector.as_deref().unwrap_or("unknown"),
            profile.industry.as_deref().unwrap_or("unknown"),
        ));
    }

    let summary = profile
        .business_summary
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let mut halal_percentage = 100.0;
    for keyword in HARAM_KEYWORDS {
        if summary.contains(keyword) {
            concerns.push(format!("business summary mentions {}", keyword));
            halal_percentage = (halal_percentage - 20.0_f64).max(0.0);
        }
    }

    BusinessScreening {
        passed: concerns.is_empty(),
        concerns,
        halal_percentage,
    }
}

/// The four ratio screens against market cap. A missing numerator reads
/// as zero (passes); a missing market cap means no verdict at all.
fn screen_financials(
    financials: &RawFinancials,
    market_cap: Option<f64>,
) -> Option<FinancialScreening> {
    let market_cap = market_cap.filter(|&m| m > 0.0)?;

    let debt_ratio = financials.total_debt.map(|d| d / market_cap);
    let receivables_ratio = financials.receivables.map(|r| r / market_cap);
    let cash_ratio = match (financials.cash, financials.short_term_investments) {
        (None, None) => None,
        (cash, sti) => Some((cash.unwrap_or(0.0) + sti.unwrap_or(0.0)) / market_cap),
    };
    let interest_income_ratio = match (financials.interest_income, financials.total_revenue) {
        (Some(interest), Some(revenue)) if revenue > 0.0 => Some(interest / revenue),
        _ => None,
    };

    Some(FinancialScreening {
        debt_ratio_passed: debt_ratio.map_or(true, |r| r <= DEBT_RATIO_LIMIT),
        interest_income_passed: interest_income_ratio
            .map_or(true, |r| r <= INTEREST_INCOME_LIMIT),
        receivables_passed: receivables_ratio.map_or(true, |r| r <= RECEIVABLES_LIMIT),
        cash_ratio_passed: cash_ratio.map_or(true, |r| r <= CASH_RATIO_LIMIT),
        debt_ratio,
        interest_income_ratio,
        receivables_ratio,
        cash_ratio,
    })
}

/// Share of revenue that is interest income, as a percentage.
fn purification_ratio(financials: &RawFinancials) -> Option<f64> {
    let interest = financials.interest_income?;
    let revenue = financials.total_revenue?;
    if revenue <= 0.0 {
        return None;
    }
    Some(interest / revenue * 100.0)
}
