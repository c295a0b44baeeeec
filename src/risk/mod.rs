//! Risk scoring
//!
//! Two additive models share the tier names but not the thresholds:
//! - **Questionnaire**: age + downturn comfort + experience, three tiers
//! - **Behavioral**: income stability + transaction frequency + savings
//!   consistency + emergency fund, four tiers (adds Aggressive)
//!
//! Both feed the same tier guidance table, which has no Aggressive row.

mod factors;
mod tier;
mod questionnaire;
mod behavioral;

pub use factors::{
    DownturnComfort, Experience, IncomeStability, SavingsConsistency, TransactionFrequency,
};
pub use tier::{RiskTier, TierGuidance};
pub use questionnaire::{
    age_score, assess_questionnaire, questionnaire_tier, QuestionnaireFactors, MAX_AGE,
};
pub use behavioral::{assess_behavior, behavioral_tier, emergency_fund_score, BehavioralFactors};

use serde::Serialize;

use crate::error::Result;

/// Which scoring model produced an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringModel {
    Questionnaire,
    Behavioral,
}

/// Score and tier from one of the scoring models
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub model: ScoringModel,
    pub score: i32,
    pub tier: RiskTier,
    /// Answers that were not recognized and contributed 0
    pub unrecognized: Vec<&'static str>,
}

impl RiskAssessment {
    /// True when some answers were not recognized and scored as 0
    pub fn is_degraded(&self) -> bool {
        !self.unrecognized.is_empty()
    }

    /// Attach the tier guidance, failing for tiers without a guidance row
    pub fn with_guidance(self) -> Result<RiskProfile> {
        let guidance = self.tier.guidance()?;
        Ok(RiskProfile {
            assessment: self,
            guidance,
        })
    }
}

/// Assessment together with its allocation ranges and strategies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskProfile {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub guidance: &'static TierGuidance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_profile_for_questionnaire() {
        let factors = QuestionnaireFactors::new(45, DownturnComfort::Neutral, Experience::Moderate);
        let profile = assess_questionnaire(&factors).unwrap().with_guidance().unwrap();
        assert_eq!(profile.assessment.score, 90);
        assert_eq!(profile.guidance.stocks, "70-80%");
    }

    #[test]
    fn test_profile_for_aggressive_behavior_fails() {
        let factors = BehavioralFactors::new(
            IncomeStability::Stable,
            TransactionFrequency::Low,
            SavingsConsistency::Moderate,
            6.0,
        );
        let assessment = assess_behavior(&factors).unwrap();
        assert_eq!(assessment.tier, RiskTier::Aggressive);
        assert!(matches!(
            assessment.with_guidance(),
            Err(EngineError::MissingTierGuidance(RiskTier::Aggressive))
        ));
    }

    #[test]
    fn test_profile_serializes_flat() {
        let factors = QuestionnaireFactors::new(30, DownturnComfort::Neutral, Experience::None);
        let profile = assess_questionnaire(&factors).unwrap().with_guidance().unwrap();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["score"], 90);
        assert_eq!(value["tier"], "Moderate-to-Aggressive");
        assert_eq!(value["model"], "questionnaire");
        assert_eq!(value["guidance"]["cash"], "5%");
    }
}
