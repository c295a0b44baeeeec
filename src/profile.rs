//! User investment profile

use serde::{Deserialize, Serialize};

/// Share of the total balance suggested as a savings target
pub const RECOMMENDED_SAVINGS_RATE: f64 = 0.20;

/// Snapshot of a user's investments and habits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProfile {
    pub total_balance: f64,
    pub savings_allocation: f64,
    pub stock_allocation: f64,
    /// "conservative", "moderate", or "aggressive"
    pub risk_tolerance: String,
    pub monthly_savings: f64,
    /// "20s", "30s", "40s", "50s", "60+"
    pub age_group: String,
}

impl InvestmentProfile {
    /// Sample profile served until profiles come from account data
    pub fn demo() -> Self {
        Self {
            total_balance: 5_000.0,
            savings_allocation: 3_000.0,
            stock_allocation: 2_000.0,
            risk_tolerance: "moderate".to_string(),
            monthly_savings: 500.0,
            age_group: "30s".to_string(),
        }
    }

    pub fn recommended_savings(&self) -> f64 {
        self.total_balance * RECOMMENDED_SAVINGS_RATE
    }

    /// Profile plus the derived savings recommendation
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            profile: self.clone(),
            recommended_savings: self.recommended_savings(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    #[serde(flatten)]
    pub profile: InvestmentProfile,
    pub recommended_savings: f64,
}
