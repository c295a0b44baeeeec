//! Closed-form compound growth projection
//!
//! FV = P(1+r)^n + PMT * [((1+r)^n - 1) / r]
//!
//! with r the monthly rate and n the number of months. Contributions are made
//! at the end of each month (ordinary annuity).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::report;

/// Longest supported projection horizon in years
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Monthly rates smaller than this in magnitude are treated as zero
pub const ZERO_RATE_EPSILON: f64 = 1e-12;

/// Inputs to a growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Lump sum invested at month 0
    pub initial_amount: f64,

    /// Deposit made at the end of every month
    pub monthly_contribution: f64,

    /// Expected annual return in percent (7.0 = 7%)
    pub annual_return_percent: f64,

    /// Projection horizon in whole years
    pub years: u32,
}

impl ProjectionInput {
    pub fn new(
        initial_amount: f64,
        monthly_contribution: f64,
        annual_return_percent: f64,
        years: u32,
    ) -> Self {
        Self {
            initial_amount,
            monthly_contribution,
            annual_return_percent,
            years,
        }
    }

    /// Check the input against the supported domain
    pub fn validate(&self) -> Result<()> {
        check_amount("initial_amount", self.initial_amount)?;
        check_amount("monthly_contribution", self.monthly_contribution)?;

        if !self.annual_return_percent.is_finite() {
            return Err(EngineError::InvalidNumber {
                field: "annual_return_percent",
                value: self.annual_return_percent.to_string(),
            });
        }
        if self.annual_return_percent <= -100.0 {
            return Err(EngineError::out_of_range(
                "annual_return_percent",
                self.annual_return_percent,
                "greater than -100",
            ));
        }
        if self.years > MAX_PROJECTION_YEARS {
            return Err(EngineError::out_of_range("years", self.years, "0 to 100"));
        }
        Ok(())
    }

    /// Monthly compounding rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_percent / 100.0 / 12.0
    }

    /// Number of monthly compounding periods
    pub fn months(&self) -> u32 {
        self.years * 12
    }

    /// Initial amount plus every monthly deposit
    pub fn total_contributed(&self) -> f64 {
        self.initial_amount + self.monthly_contribution * self.months() as f64
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(EngineError::out_of_range(field, value, "a non-negative amount"));
    }
    Ok(())
}

/// Outcome of a growth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub annual_return_percent: f64,
    pub years: u32,
    pub total_contributed: f64,
    pub projected_total: f64,
    pub projected_earnings: f64,
    /// Earnings as a percentage of the projected total (0 when total <= 0)
    pub earnings_share_percent: f64,
}

impl ProjectionResult {
    /// e.g. "55.5% of total is earnings"
    pub fn summary_line(&self) -> String {
        format!(
            "{} of total is earnings",
            report::percent(self.earnings_share_percent)
        )
    }
}

/// Future value of a single lump sum after `months` periods at `monthly_rate`
pub fn lump_sum_future_value(amount: f64, monthly_rate: f64, months: u32) -> f64 {
    amount * (1.0 + monthly_rate).powf(months as f64)
}

/// Future value of level end-of-month deposits (ordinary annuity)
pub fn annuity_future_value(payment: f64, monthly_rate: f64, months: u32) -> f64 {
    let n = months as f64;
    if monthly_rate.abs() < ZERO_RATE_EPSILON {
        return payment * n;
    }
    payment * (((1.0 + monthly_rate).powf(n) - 1.0) / monthly_rate)
}

/// Project the future value of a lump sum plus monthly contributions
pub fn project_growth(input: &ProjectionInput) -> Result<ProjectionResult> {
    input.validate()?;

    let r = input.monthly_rate();
    let n = input.months();

    let fv_lump = lump_sum_future_value(input.initial_amount, r, n);
    let fv_annuity = annuity_future_value(input.monthly_contribution, r, n);

    let total = fv_lump + fv_annuity;
    if !total.is_finite() {
        return Err(EngineError::out_of_range(
            "projected_total",
            total,
            "a finite amount",
        ));
    }

    let total_contributed = input.total_contributed();
    let earnings = total - total_contributed;
    let earnings_share_percent = if total > 0.0 {
        earnings / total * 100.0
    } else {
        0.0
    };

    log::debug!(
        "projected {:.2} over {} months at {:.6} monthly",
        total,
        n,
        r
    );

    Ok(ProjectionResult {
        initial_amount: input.initial_amount,
        monthly_contribution: input.monthly_contribution,
        annual_return_percent: input.annual_return_percent,
        years: input.years,
        total_contributed,
        projected_total: total,
        projected_earnings: earnings,
        earnings_share_percent,
    })
}
