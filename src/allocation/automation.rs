//! Draft of a recurring monthly investment
//!
//! Validates the request and computes the yearly total plus the confirmation
//! text shown before anything is scheduled. Creating the plan itself is the
//! banking service's job.

use chrono::NaiveDate;
use serde::Serialize;

use super::plan::annual_contribution;
use crate::error::{EngineError, Result};
use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    Savings,
    EtfPortfolio,
    Diversified,
}

impl InvestmentType {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "savings" => Some(InvestmentType::Savings),
            "etf_portfolio" => Some(InvestmentType::EtfPortfolio),
            "diversified" => Some(InvestmentType::Diversified),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            InvestmentType::Savings => "savings",
            InvestmentType::EtfPortfolio => "etf_portfolio",
            InvestmentType::Diversified => "diversified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Conservative,
    Moderate,
    Aggressive,
}

impl Strategy {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "conservative" => Some(Strategy::Conservative),
            "moderate" => Some(Strategy::Moderate),
            "aggressive" => Some(Strategy::Aggressive),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Strategy::Conservative => "conservative",
            Strategy::Moderate => "moderate",
            Strategy::Aggressive => "aggressive",
        }
    }
}

/// Validated recurring investment awaiting confirmation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutomatedPlanDraft {
    pub monthly_amount: f64,
    pub investment_type: InvestmentType,
    pub strategy: Strategy,
    pub start_date: NaiveDate,
    pub projected_annual: f64,
    pub projected_annual_display: String,
    /// Text the user confirms before the plan is created
    pub confirmation_summary: String,
}

impl AutomatedPlanDraft {
    pub fn new(
        monthly_amount: f64,
        investment_type: &str,
        strategy: &str,
        start_date: &str,
    ) -> Result<Self> {
        if !monthly_amount.is_finite() {
            return Err(EngineError::InvalidNumber {
                field: "monthly_amount",
                value: monthly_amount.to_string(),
            });
        }
        if monthly_amount <= 0.0 {
            return Err(EngineError::out_of_range(
                "monthly_amount",
                monthly_amount,
                "a positive amount",
            ));
        }

        let investment_type = InvestmentType::from_key(investment_type).ok_or_else(|| {
            EngineError::InvalidToolInput(format!(
                "investment_type must be savings, etf_portfolio, or diversified (got {:?})",
                investment_type
            ))
        })?;
        let strategy = Strategy::from_key(strategy).ok_or_else(|| {
            EngineError::InvalidToolInput(format!(
                "strategy must be conservative, moderate, or aggressive (got {:?})",
                strategy
            ))
        })?;
        let start_date = NaiveDate::parse_from_str(start_date.trim(), "%Y-%m-%d").map_err(|e| {
            EngineError::InvalidToolInput(format!("start_date {:?}: {}", start_date, e))
        })?;

        let projected_annual = annual_contribution(monthly_amount);
        let confirmation_summary = format!(
            "Set up automatic monthly investment of {} to {} with {} strategy",
            report::currency(monthly_amount),
            investment_type.key(),
            strategy.key()
        );

        Ok(Self {
            monthly_amount,
            investment_type,
            strategy,
            start_date,
            projected_annual,
            projected_annual_display: report::currency(projected_annual),
            confirmation_summary,
        })
    }
}
