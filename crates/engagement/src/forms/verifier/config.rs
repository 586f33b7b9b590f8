use serde::{Deserialize, Serialize};

/// Minimum gross income for the prior month that satisfies the income prong.
pub const MINIMUM_MONTHLY_INCOME: f64 = 580.0;

/// Minimum combined qualifying hours that satisfy the hours prong.
pub const MINIMUM_TOTAL_HOURS: f64 = 80.0;

/// Eligibility thresholds handed to the verifier at construction so tests can
/// exercise alternate cutoffs without global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    pub minimum_monthly_income: f64,
    pub minimum_total_hours: f64,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            minimum_monthly_income: MINIMUM_MONTHLY_INCOME,
            minimum_total_hours: MINIMUM_TOTAL_HOURS,
        }
    }
}
