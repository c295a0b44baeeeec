//! Investment Engine - projections, allocation, and risk scoring for an investing assistant
//!
//! This library provides:
//! - Compound-growth projections of a lump sum plus monthly contributions
//! - Time-horizon allocation bands and investment plans
//! - Questionnaire and behavioral risk scoring with per-tier guidance
//! - A JSON tool boundary for the assistant
//! - Parallel scenario grids

pub mod error;
pub mod parse;
pub mod report;
pub mod projection;
pub mod allocation;
pub mod risk;
pub mod tables;
pub mod profile;
pub mod education;
pub mod scenario;
pub mod tools;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use tables::Tables;
pub use projection::{project_growth, yearly_schedule, ProjectionInput, ProjectionResult, ScheduleRow};
pub use allocation::{AllocationBand, AllocationTable, HorizonTable, InvestmentPlan};
pub use risk::{RiskAssessment, RiskProfile, RiskTier};
pub use scenario::{ScenarioGrid, ScenarioRunner};
pub use tools::{InvestmentTools, ToolName};
