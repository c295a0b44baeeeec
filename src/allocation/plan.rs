//! Investment plan recommendation for a goal and horizon

use serde::Serialize;

use super::bands::{AllocationBand, AllocationDisplay};
use crate::error::{EngineError, Result};
use crate::tables::Tables;

/// Growth range quoted alongside every plan
pub const ESTIMATED_GROWTH_RATE: &str = "6-8% annually";

pub const KEY_STRATEGIES: [&str; 3] = [
    "Dollar-cost averaging",
    "Automatic rebalancing",
    "Tax-efficient investing",
];

pub const NEXT_STEPS: &str = "Review fund options, set up automatic transfers, monitor quarterly";

/// Recommended allocation and contribution plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentPlan {
    pub goal: String,
    /// Horizon exactly as given
    pub time_horizon: String,
    /// Horizon after normalization
    pub horizon_years: u32,
    pub current_amount: f64,
    pub monthly_investment: f64,
    pub annual_contribution: f64,
    pub allocation: AllocationBand,
    pub recommended_allocation: AllocationDisplay,
    pub estimated_growth_rate: &'static str,
    pub key_strategies: Vec<&'static str>,
    pub next_steps: &'static str,
}

impl InvestmentPlan {
    /// Build a plan from the goal, free-text horizon, and amounts
    pub fn build(
        tables: &Tables,
        goal: &str,
        time_horizon: &str,
        current_amount: f64,
        monthly_capacity: f64,
    ) -> Result<Self> {
        for (field, value) in [
            ("current_amount", current_amount),
            ("monthly_capacity", monthly_capacity),
        ] {
            if !value.is_finite() {
                return Err(EngineError::InvalidNumber {
                    field,
                    value: value.to_string(),
                });
            }
            if value < 0.0 {
                return Err(EngineError::out_of_range(field, value, "a non-negative amount"));
            }
        }

        let horizon_years = tables.horizons.normalize(time_horizon);
        let allocation = *tables.allocation.select(horizon_years);

        Ok(Self {
            goal: goal.to_string(),
            time_horizon: time_horizon.to_string(),
            horizon_years,
            current_amount,
            monthly_investment: monthly_capacity,
            annual_contribution: annual_contribution(monthly_capacity),
            recommended_allocation: allocation.display(),
            allocation,
            estimated_growth_rate: ESTIMATED_GROWTH_RATE,
            key_strategies: KEY_STRATEGIES.to_vec(),
            next_steps: NEXT_STEPS,
        })
    }
}

/// Twelve monthly deposits
pub fn annual_contribution(monthly: f64) -> f64 {
    monthly * 12.0
}
