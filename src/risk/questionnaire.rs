//! Questionnaire risk score: age, downturn comfort, and experience

use serde::Serialize;

use super::factors::{DownturnComfort, Experience};
use super::tier::RiskTier;
use super::{RiskAssessment, ScoringModel};
use crate::error::{EngineError, Result};

/// Highest age the questionnaire accepts
pub const MAX_AGE: u32 = 119;

/// Questionnaire answers. `None` marks an answer that was not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuestionnaireFactors {
    pub age: u32,
    pub downturn_comfort: Option<DownturnComfort>,
    pub experience: Option<Experience>,
}

impl QuestionnaireFactors {
    pub fn new(age: u32, downturn_comfort: DownturnComfort, experience: Experience) -> Self {
        Self {
            age,
            downturn_comfort: Some(downturn_comfort),
            experience: Some(experience),
        }
    }

    /// Build from raw answer keys; unknown keys become `None`
    pub fn from_answers(age: u32, downturn_comfort: &str, experience: &str) -> Self {
        Self {
            age,
            downturn_comfort: DownturnComfort::from_key(downturn_comfort),
            experience: Experience::from_key(experience),
        }
    }
}

/// Age component: younger investors have longer to recover
pub fn age_score(age: u32) -> Result<i32> {
    match age {
        0..=34 => Ok(70),
        35..=49 => Ok(50),
        50..=MAX_AGE => Ok(30),
        _ => Err(EngineError::out_of_range("age", age, "0 to 119")),
    }
}

/// Three-tier mapping used by the questionnaire.
/// Not the same thresholds as the behavioral model.
pub fn questionnaire_tier(score: i32) -> RiskTier {
    if score > 60 {
        RiskTier::ModerateToAggressive
    } else if score > 40 {
        RiskTier::Moderate
    } else {
        RiskTier::Conservative
    }
}

/// Score the questionnaire and map it to a tier
pub fn assess_questionnaire(factors: &QuestionnaireFactors) -> Result<RiskAssessment> {
    let mut score = age_score(factors.age)?;
    let mut unrecognized = Vec::new();

    match factors.downturn_comfort {
        Some(comfort) => score += comfort.score(),
        None => unrecognized.push("market_downturn_comfort"),
    }
    match factors.experience {
        Some(experience) => score += experience.score(),
        None => unrecognized.push("previous_experience"),
    }

    if !unrecognized.is_empty() {
        log::warn!(
            "questionnaire scored with unrecognized answers for {:?}",
            unrecognized
        );
    }

    Ok(RiskAssessment {
        model: ScoringModel::Questionnaire,
        score,
        tier: questionnaire_tier(score),
        unrecognized,
    })
}
