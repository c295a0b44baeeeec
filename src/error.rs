//! Error types for the investment engine

use crate::risk::RiskTier;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid numeric input for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("no allocation guidance defined for risk tier {0}")]
    MissingTierGuidance(RiskTier),

    #[error("invalid table: {0}")]
    InvalidTable(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid tool input: {0}")]
    InvalidToolInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn out_of_range(
        field: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        EngineError::OutOfRange {
            field,
            value: value.to_string(),
            expected,
        }
    }

    /// Whether the failure came from caller input rather than tables or I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidNumber { .. }
                | EngineError::OutOfRange { .. }
                | EngineError::InvalidToolInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::out_of_range("years", -3, "0 to 100");
        assert_eq!(err.to_string(), "years out of range: -3 (expected 0 to 100)");
        assert!(err.is_input_error());

        let err = EngineError::MissingTierGuidance(RiskTier::Aggressive);
        assert_eq!(
            err.to_string(),
            "no allocation guidance defined for risk tier Aggressive"
        );
        assert!(!err.is_input_error());
    }
}
