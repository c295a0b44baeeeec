//! Categorical answers feeding the risk scores
//!
//! Each answer is a closed enum carrying its score contribution. Raw strings
//! are mapped with `from_key`; an unknown key maps to `None`, which scores 0.

use serde::{Deserialize, Serialize};

/// Comfort with a 20% market drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownturnComfort {
    VeryUncomfortable,
    SomewhatUncomfortable,
    Neutral,
    Comfortable,
    VeryComfortable,
}

impl DownturnComfort {
    pub const ALL: [DownturnComfort; 5] = [
        DownturnComfort::VeryUncomfortable,
        DownturnComfort::SomewhatUncomfortable,
        DownturnComfort::Neutral,
        DownturnComfort::Comfortable,
        DownturnComfort::VeryComfortable,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            DownturnComfort::VeryUncomfortable => "very_uncomfortable",
            DownturnComfort::SomewhatUncomfortable => "somewhat_uncomfortable",
            DownturnComfort::Neutral => "neutral",
            DownturnComfort::Comfortable => "comfortable",
            DownturnComfort::VeryComfortable => "very_comfortable",
        }
    }

    pub fn score(&self) -> i32 {
        match self {
            DownturnComfort::VeryUncomfortable => 10,
            DownturnComfort::SomewhatUncomfortable => 25,
            DownturnComfort::Neutral => 40,
            DownturnComfort::Comfortable => 60,
            DownturnComfort::VeryComfortable => 75,
        }
    }
}

/// Prior investing experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    None,
    Minimal,
    Moderate,
    Extensive,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Experience::None,
        Experience::Minimal,
        Experience::Moderate,
        Experience::Extensive,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Experience::None => "none",
            Experience::Minimal => "minimal",
            Experience::Moderate => "moderate",
            Experience::Extensive => "extensive",
        }
    }

    pub fn score(&self) -> i32 {
        match self {
            Experience::None => -20,
            Experience::Minimal => -10,
            Experience::Moderate => 0,
            Experience::Extensive => 15,
        }
    }
}

/// How steady the user's income is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeStability {
    Unstable,
    Moderate,
    Stable,
}

impl IncomeStability {
    pub const ALL: [IncomeStability; 3] = [
        IncomeStability::Unstable,
        IncomeStability::Moderate,
        IncomeStability::Stable,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            IncomeStability::Unstable => "unstable",
            IncomeStability::Moderate => "moderate",
            IncomeStability::Stable => "stable",
        }
    }

    pub fn score(&self) -> i32 {
        match self {
            IncomeStability::Unstable => 15,
            IncomeStability::Moderate => 28,
            IncomeStability::Stable => 40,
        }
    }
}

/// How often the user spends.
/// Inverted scale: fewer transactions score higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionFrequency {
    High,
    Medium,
    Low,
}

impl TransactionFrequency {
    pub const ALL: [TransactionFrequency; 3] = [
        TransactionFrequency::High,
        TransactionFrequency::Medium,
        TransactionFrequency::Low,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            TransactionFrequency::High => "high",
            TransactionFrequency::Medium => "medium",
            TransactionFrequency::Low => "low",
        }
    }

    pub fn score(&self) -> i32 {
        match self {
            TransactionFrequency::High => 5,
            TransactionFrequency::Medium => 15,
            TransactionFrequency::Low => 25,
        }
    }
}

/// How regularly the user saves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsConsistency {
    Inconsistent,
    Moderate,
    Excellent,
}

impl SavingsConsistency {
    pub const ALL: [SavingsConsistency; 3] = [
        SavingsConsistency::Inconsistent,
        SavingsConsistency::Moderate,
        SavingsConsistency::Excellent,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            SavingsConsistency::Inconsistent => "inconsistent",
            SavingsConsistency::Moderate => "moderate",
            SavingsConsistency::Excellent => "excellent",
        }
    }

    pub fn score(&self) -> i32 {
        match self {
            SavingsConsistency::Inconsistent => 5,
            SavingsConsistency::Moderate => 15,
            SavingsConsistency::Excellent => 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for c in DownturnComfort::ALL {
            assert_eq!(DownturnComfort::from_key(c.key()), Some(c));
        }
        for e in Experience::ALL {
            assert_eq!(Experience::from_key(e.key()), Some(e));
        }
        for s in IncomeStability::ALL {
            assert_eq!(IncomeStability::from_key(s.key()), Some(s));
        }
        for f in TransactionFrequency::ALL {
            assert_eq!(TransactionFrequency::from_key(f.key()), Some(f));
        }
        for s in SavingsConsistency::ALL {
            assert_eq!(SavingsConsistency::from_key(s.key()), Some(s));
        }
    }

    #[test]
    fn test_keys_are_exact_match() {
        assert_eq!(DownturnComfort::from_key("Comfortable"), None);
        assert_eq!(DownturnComfort::from_key(" neutral"), None);
        assert_eq!(Experience::from_key("lots"), None);
        assert_eq!(TransactionFrequency::from_key(""), None);
    }

    #[test]
    fn test_score_tables() {
        let comfort: Vec<i32> = DownturnComfort::ALL.iter().map(|c| c.score()).collect();
        assert_eq!(comfort, vec![10, 25, 40, 60, 75]);

        let experience: Vec<i32> = Experience::ALL.iter().map(|e| e.score()).collect();
        assert_eq!(experience, vec![-20, -10, 0, 15]);

        assert_eq!(IncomeStability::Moderate.score(), 28);
        assert_eq!(TransactionFrequency::Low.score(), 25);
        assert_eq!(TransactionFrequency::High.score(), 5);
        assert_eq!(SavingsConsistency::Excellent.score(), 25);
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&DownturnComfort::VeryUncomfortable).unwrap();
        assert_eq!(json, "\"very_uncomfortable\"");
        let parsed: Experience = serde_json::from_str("\"extensive\"").unwrap();
        assert_eq!(parsed, Experience::Extensive);
    }
}
