//! Behavioral risk score from income, spending, and savings habits

use serde::Serialize;

use super::factors::{IncomeStability, SavingsConsistency, TransactionFrequency};
use super::tier::RiskTier;
use super::{RiskAssessment, ScoringModel};
use crate::error::{EngineError, Result};

/// Observed financial behavior. `None` marks an unrecognized answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BehavioralFactors {
    pub income_stability: Option<IncomeStability>,
    pub transaction_frequency: Option<TransactionFrequency>,
    pub savings_consistency: Option<SavingsConsistency>,
    /// Months of expenses covered by the emergency fund
    pub emergency_fund_months: f64,
}

impl BehavioralFactors {
    pub fn new(
        income_stability: IncomeStability,
        transaction_frequency: TransactionFrequency,
        savings_consistency: SavingsConsistency,
        emergency_fund_months: f64,
    ) -> Self {
        Self {
            income_stability: Some(income_stability),
            transaction_frequency: Some(transaction_frequency),
            savings_consistency: Some(savings_consistency),
            emergency_fund_months,
        }
    }

    /// Build from raw answer keys; unknown keys become `None`
    pub fn from_answers(
        income_stability: &str,
        transaction_frequency: &str,
        savings_consistency: &str,
        emergency_fund_months: f64,
    ) -> Self {
        Self {
            income_stability: IncomeStability::from_key(income_stability),
            transaction_frequency: TransactionFrequency::from_key(transaction_frequency),
            savings_consistency: SavingsConsistency::from_key(savings_consistency),
            emergency_fund_months,
        }
    }
}

/// Emergency fund adequacy component
pub fn emergency_fund_score(months: f64) -> Result<i32> {
    if !months.is_finite() {
        return Err(EngineError::InvalidNumber {
            field: "emergency_fund_months",
            value: months.to_string(),
        });
    }
    if months < 0.0 {
        return Err(EngineError::out_of_range(
            "emergency_fund_months",
            months,
            "a non-negative number of months",
        ));
    }

    Ok(if months >= 12.0 {
        20
    } else if months >= 6.0 {
        15
    } else if months >= 3.0 {
        10
    } else {
        5
    })
}

/// Four-tier mapping used by the behavioral model
pub fn behavioral_tier(score: i32) -> RiskTier {
    if score >= 70 {
        RiskTier::Aggressive
    } else if score >= 50 {
        RiskTier::ModerateToAggressive
    } else if score >= 35 {
        RiskTier::Moderate
    } else {
        RiskTier::Conservative
    }
}

/// Score observed behavior and map it to a tier
pub fn assess_behavior(factors: &BehavioralFactors) -> Result<RiskAssessment> {
    let mut score = emergency_fund_score(factors.emergency_fund_months)?;
    let mut unrecognized = Vec::new();

    match factors.income_stability {
        Some(stability) => score += stability.score(),
        None => unrecognized.push("income_stability"),
    }
    match factors.transaction_frequency {
        Some(frequency) => score += frequency.score(),
        None => unrecognized.push("transaction_frequency"),
    }
    match factors.savings_consistency {
        Some(consistency) => score += consistency.score(),
        None => unrecognized.push("savings_consistency"),
    }

    if !unrecognized.is_empty() {
        log::warn!(
            "behavioral score computed with unrecognized answers for {:?}",
            unrecognized
        );
    }

    Ok(RiskAssessment {
        model: ScoringModel::Behavioral,
        score,
        tier: behavioral_tier(score),
        unrecognized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_fund_bands() {
        assert_eq!(emergency_fund_score(0.0).unwrap(), 5);
        assert_eq!(emergency_fund_score(2.99).unwrap(), 5);
        assert_eq!(emergency_fund_score(3.0).unwrap(), 10);
        assert_eq!(emergency_fund_score(6.0).unwrap(), 15);
        assert_eq!(emergency_fund_score(11.5).unwrap(), 15);
        assert_eq!(emergency_fund_score(12.0).unwrap(), 20);
        assert_eq!(emergency_fund_score(48.0).unwrap(), 20);
        assert!(emergency_fund_score(-1.0).is_err());
        assert!(emergency_fund_score(f64::NAN).is_err());
    }

    #[test]
    fn test_score_range() {
        let lowest = BehavioralFactors::new(
            IncomeStability::Unstable,
            TransactionFrequency::High,
            SavingsConsistency::Inconsistent,
            0.0,
        );
        let highest = BehavioralFactors::new(
            IncomeStability::Stable,
            TransactionFrequency::Low,
            SavingsConsistency::Excellent,
            24.0,
        );
        let low = assess_behavior(&lowest).unwrap();
        let high = assess_behavior(&highest).unwrap();
        assert_eq!(low.score, 30);
        assert_eq!(low.tier, RiskTier::Conservative);
        assert_eq!(high.score, 110);
        assert_eq!(high.tier, RiskTier::Aggressive);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(behavioral_tier(70), RiskTier::Aggressive);
        assert_eq!(behavioral_tier(69), RiskTier::ModerateToAggressive);
        assert_eq!(behavioral_tier(50), RiskTier::ModerateToAggressive);
        assert_eq!(behavioral_tier(49), RiskTier::Moderate);
        assert_eq!(behavioral_tier(35), RiskTier::Moderate);
        assert_eq!(behavioral_tier(34), RiskTier::Conservative);
    }

    #[test]
    fn test_tier_functions_differ() {
        use crate::risk::questionnaire_tier;
        assert_eq!(behavioral_tier(45), RiskTier::Moderate);
        assert_eq!(questionnaire_tier(45), RiskTier::Moderate);
        assert_eq!(behavioral_tier(38), RiskTier::Moderate);
        assert_eq!(questionnaire_tier(38), RiskTier::Conservative);
        assert_eq!(behavioral_tier(75), RiskTier::Aggressive);
        assert_eq!(questionnaire_tier(75), RiskTier::ModerateToAggressive);
    }

    #[test]
    fn test_typical_saver() {
        let factors = BehavioralFactors::new(
            IncomeStability::Moderate,
            TransactionFrequency::Medium,
            SavingsConsistency::Moderate,
            4.0,
        );
        let assessment = assess_behavior(&factors).unwrap();
        assert_eq!(assessment.score, 28 + 15 + 15 + 10);
        assert_eq!(assessment.tier, RiskTier::ModerateToAggressive);
    }

    #[test]
    fn test_unrecognized_answers() {
        let factors = BehavioralFactors::from_answers("gig", "low", "sometimes", 1.0);
        let assessment = assess_behavior(&factors).unwrap();
        assert_eq!(assessment.score, 25 + 5);
        assert_eq!(
            assessment.unrecognized,
            vec!["income_stability", "savings_consistency"]
        );
        assert!(assessment.is_degraded());
    }
}
