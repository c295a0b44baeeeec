//! Month-by-month accumulation and year-end schedules
//!
//! The iterative roll-forward is the reference the closed form is checked
//! against; it also produces the per-year breakdown shown to users.

use serde::{Deserialize, Serialize};

use super::growth::ProjectionInput;
use crate::error::Result;

/// Balances at the end of one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Initial amount plus deposits made through this year
    pub contributed_to_date: f64,

    /// End-of-year balance
    pub balance: f64,

    /// Growth earned so far (balance - contributed)
    pub earnings_to_date: f64,

    /// Growth earned during this year alone
    pub earnings_this_year: f64,
}

/// Roll the balance forward one month at a time and return the final balance.
/// Each month applies `(1 + r)` compounding and then adds the deposit.
pub fn simulate_monthly(input: &ProjectionInput) -> Result<f64> {
    input.validate()?;

    let r = input.monthly_rate();
    let mut balance = input.initial_amount;
    for _month in 0..input.months() {
        balance = balance * (1.0 + r) + input.monthly_contribution;
    }
    Ok(balance)
}

/// Year-end balances for the whole horizon
pub fn yearly_schedule(input: &ProjectionInput) -> Result<Vec<ScheduleRow>> {
    input.validate()?;

    let r = input.monthly_rate();
    let mut rows = Vec::with_capacity(input.years as usize);
    let mut balance = input.initial_amount;
    let mut contributed = input.initial_amount;
    let mut prior_earnings = 0.0;

    for year in 1..=input.years {
        for _ in 0..12 {
            balance = balance * (1.0 + r) + input.monthly_contribution;
            contributed += input.monthly_contribution;
        }

        let earnings_to_date = balance - contributed;
        rows.push(ScheduleRow {
            year,
            contributed_to_date: contributed,
            balance,
            earnings_to_date,
            earnings_this_year: earnings_to_date - prior_earnings,
        });
        prior_earnings = earnings_to_date;
    }

    Ok(rows)
}
