use serde::{Deserialize, Serialize};

/// Thresholds applied by the eligibility rule table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    pub minimum_age: i32,
    /// Minimum savings in UF.
    pub minimum_savings: f64,
    /// Highest social vulnerability percentile that still qualifies.
    pub maximum_vulnerability: u8,
}

impl EligibilityPolicy {
    pub const STANDARD: Self = Self {
        minimum_age: 18,
        minimum_savings: 4.0,
        maximum_vulnerability: 70,
    };
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Fixed subsidy terms granted once every rule passes. Amounts are in UF.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenefitTerms {
    pub monthly_amount: f64,
    pub maximum_total: f64,
    pub max_years: u8,
}

impl BenefitTerms {
    pub const STANDARD: Self = Self {
        monthly_amount: 4.2,
        maximum_total: 170.0,
        max_years: 8,
    };
}

impl Default for BenefitTerms {
    fn default() -> Self {
        Self::STANDARD
    }
}
