use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    Doubtful,
    Unknown,
}

/// Business-activity half of the screen: industry check plus keyword scan
/// of the business summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessScreening {
    pub passed: bool,
    /// Matched haram keywords, one entry per concern.
    pub concerns: Vec<String>,
    /// Starts at 100, reduced 20 per matched keyword, floored at 0.
    pub halal_percentage: f64,
}

/// Financial-ratio half of the screen. Each ratio is pass/fail on its own;
/// raw ratios are reported alongside for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialScreening {
    pub debt_ratio_passed: bool,
    pub interest_income_passed: bool,
    pub receivables_passed: bool,
    pub cash_ratio_passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_income_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivables_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_ratio: Option<f64>,
}

impl FinancialScreening {
    pub fn all_passed(&self) -> bool {
        self.debt_ratio_passed
            && self.interest_income_passed
            && self.receivables_passed
            && self.cash_ratio_passed
    }

    pub fn any_passed(&self) -> bool {
        self.debt_ratio_passed
            || self.interest_income_passed
            || self.receivables_passed
            || self.cash_ratio_passed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub status: ComplianceStatus,
    pub business: BusinessScreening,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial: Option<FinancialScreening>,
    /// Share of income attributable to interest, as a percentage of
    /// revenue; the portion of any dividend conventionally donated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purification_ratio: Option<f64>,
}
