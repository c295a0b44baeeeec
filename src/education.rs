//! Plain-language explanations of investing concepts

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    Etf,
    Dividend,
    Diversification,
    CompoundInterest,
    DollarCostAveraging,
}

impl Concept {
    pub const ALL: [Concept; 5] = [
        Concept::Etf,
        Concept::Dividend,
        Concept::Diversification,
        Concept::CompoundInterest,
        Concept::DollarCostAveraging,
    ];

    /// Case-insensitive lookup; spaces and dashes are read as underscores
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL.into_iter().find(|c| c.key() == normalized)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Concept::Etf => "etf",
            Concept::Dividend => "dividend",
            Concept::Diversification => "diversification",
            Concept::CompoundInterest => "compound_interest",
            Concept::DollarCostAveraging => "dollar_cost_averaging",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Concept::Etf => "An ETF (Exchange-Traded Fund) is a basket of stocks bundled together. \
                Instead of buying individual companies, you buy a small piece of many companies at once.",
            Concept::Dividend => "A dividend is a payment a company makes to its shareholders. \
                You get paid for holding the stock, on top of any change in its price.",
            Concept::Diversification => "Diversification means not putting all your eggs in one basket. \
                You spread money across different types of investments, industries, and risk levels.",
            Concept::CompoundInterest => "Compound interest is when your earnings make their own earnings. \
                Your money grows faster because you earn returns on past returns.",
            Concept::DollarCostAveraging => "Dollar-cost averaging means investing a fixed amount on a regular schedule \
                instead of trying to time the market, which averages out the price you pay over time.",
        }
    }
}

pub const KEY_POINTS: [&str; 3] = [
    "Understanding this concept helps you make better investment decisions",
    "Don't feel rushed - investing is a marathon, not a sprint",
    "Ask questions anytime - financial literacy is your superpower",
];

/// Explanation returned for a requested concept
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// The concept as requested, or its canonical key when recognized
    pub concept: String,
    pub explanation: String,
    pub key_points: Vec<&'static str>,
    pub recognized: bool,
}

/// Explain a concept, or list the known ones when it is not recognized
pub fn explain(concept: &str) -> Explanation {
    match Concept::from_key(concept) {
        Some(known) => Explanation {
            concept: known.key().to_string(),
            explanation: known.explanation().to_string(),
            key_points: KEY_POINTS.to_vec(),
            recognized: true,
        },
        None => {
            let known: Vec<&str> = Concept::ALL.iter().map(|c| c.key()).collect();
            Explanation {
                concept: concept.to_string(),
                explanation: format!(
                    "That concept isn't covered yet. Try asking about: {}.",
                    known.join(", ")
                ),
                key_points: Vec::new(),
                recognized: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_forgiving() {
        assert_eq!(Concept::from_key("ETF"), Some(Concept::Etf));
        assert_eq!(Concept::from_key("compound interest"), Some(Concept::CompoundInterest));
        assert_eq!(
            Concept::from_key("Dollar-Cost-Averaging"),
            Some(Concept::DollarCostAveraging)
        );
        assert_eq!(Concept::from_key("options"), None);
    }

    #[test]
    fn test_explain_known() {
        let e = explain("dividend");
        assert!(e.recognized);
        assert_eq!(e.concept, "dividend");
        assert_eq!(e.key_points.len(), 3);
    }

    #[test]
    fn test_explain_unknown_lists_concepts() {
        let e = explain("bonds ladder");
        assert!(!e.recognized);
        assert_eq!(e.concept, "bonds ladder");
        assert!(e.explanation.contains("compound_interest"));
        assert!(e.key_points.is_empty());
    }
}
