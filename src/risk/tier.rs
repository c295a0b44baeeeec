//! Risk tiers and the per-tier guidance table

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{EngineError, Result};

/// Named risk tolerance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskTier {
    Conservative,
    Moderate,
    ModerateToAggressive,
    Aggressive,
}

impl RiskTier {
    /// Display name, e.g. "Moderate-to-Aggressive"
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Conservative => "Conservative",
            RiskTier::Moderate => "Moderate",
            RiskTier::ModerateToAggressive => "Moderate-to-Aggressive",
            RiskTier::Aggressive => "Aggressive",
        }
    }

    /// Allocation ranges and strategies for this tier.
    ///
    /// The table has no Aggressive row; asking for one is an error rather than
    /// an empty allocation.
    pub fn guidance(&self) -> Result<&'static TierGuidance> {
        match self {
            RiskTier::Conservative => Ok(&CONSERVATIVE),
            RiskTier::Moderate => Ok(&MODERATE),
            RiskTier::ModerateToAggressive => Ok(&MODERATE_TO_AGGRESSIVE),
            RiskTier::Aggressive => Err(EngineError::MissingTierGuidance(*self)),
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RiskTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Suggested allocation ranges and strategies for a tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierGuidance {
    pub stocks: &'static str,
    pub bonds: &'static str,
    pub cash: &'static str,
    pub strategies: &'static [&'static str],
}

static CONSERVATIVE: TierGuidance = TierGuidance {
    stocks: "30-40%",
    bonds: "50-60%",
    cash: "10-20%",
    strategies: &[
        "Focus on bonds and dividend-paying stocks",
        "Monthly automated investing",
        "Rebalance annually",
    ],
};

static MODERATE: TierGuidance = TierGuidance {
    stocks: "50-60%",
    bonds: "30-40%",
    cash: "5-10%",
    strategies: &[
        "Mix of growth stocks and stable bonds",
        "Dollar-cost averaging",
        "Review quarterly",
    ],
};

static MODERATE_TO_AGGRESSIVE: TierGuidance = TierGuidance {
    stocks: "70-80%",
    bonds: "15-25%",
    cash: "5%",
    strategies: &[
        "Growth-focused with some international exposure",
        "Automatic reinvestment of dividends",
        "Stay the course during market dips",
    ],
};
