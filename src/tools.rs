//! Tool boundary: JSON requests in, JSON responses out
//!
//! Requests use the loosely-typed shapes an assistant sends (amounts and rates
//! as strings). Responses carry both raw numbers and display strings.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::allocation::{AllocationBand, AllocationDisplay, AutomatedPlanDraft, InvestmentPlan};
use crate::education;
use crate::error::{EngineError, Result};
use crate::parse::{parse_whole, ParseCache};
use crate::profile::InvestmentProfile;
use crate::projection::{project_growth, ProjectionInput};
use crate::report;
use crate::risk::{
    assess_behavior, assess_questionnaire, BehavioralFactors, QuestionnaireFactors, RiskProfile,
    TierGuidance,
};
use crate::Tables;

/// Tools exposed to the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetInvestmentProfile,
    AnalyzeInvestmentRecommendations,
    CalculateInvestmentProjection,
    AssessInvestmentRiskProfile,
    AssessBehavioralRiskProfile,
    ExplainInvestmentConcept,
    DraftAutomatedInvesting,
}

impl ToolName {
    pub const ALL: [ToolName; 7] = [
        ToolName::GetInvestmentProfile,
        ToolName::AnalyzeInvestmentRecommendations,
        ToolName::CalculateInvestmentProjection,
        ToolName::AssessInvestmentRiskProfile,
        ToolName::AssessBehavioralRiskProfile,
        ToolName::ExplainInvestmentConcept,
        ToolName::DraftAutomatedInvesting,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolName::GetInvestmentProfile => "get_investment_profile",
            ToolName::AnalyzeInvestmentRecommendations => "analyze_investment_recommendations",
            ToolName::CalculateInvestmentProjection => "calculate_investment_projection",
            ToolName::AssessInvestmentRiskProfile => "assess_investment_risk_profile",
            ToolName::AssessBehavioralRiskProfile => "assess_behavioral_risk_profile",
            ToolName::ExplainInvestmentConcept => "explain_investment_concept",
            ToolName::DraftAutomatedInvesting => "draft_automated_investing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolName::GetInvestmentProfile => {
                "Get the user's current investment profile, risk tolerance, and financial situation"
            }
            ToolName::AnalyzeInvestmentRecommendations => {
                "Recommend an allocation and contribution plan for a goal and time horizon"
            }
            ToolName::CalculateInvestmentProjection => {
                "Calculate how much an investment could grow over time with compound interest"
            }
            ToolName::AssessInvestmentRiskProfile => {
                "Assess risk tolerance from age, comfort with market drops, and experience"
            }
            ToolName::AssessBehavioralRiskProfile => {
                "Assess risk tolerance from income stability, spending, savings, and emergency fund"
            }
            ToolName::ExplainInvestmentConcept => {
                "Explain investment concepts and strategies in simple, easy-to-understand language"
            }
            ToolName::DraftAutomatedInvesting => {
                "Prepare a recurring monthly investment for the user to confirm"
            }
        }
    }

    /// Whether the caller must confirm with the user before acting on the result
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, ToolName::DraftAutomatedInvesting)
    }
}

#[derive(Debug, Deserialize)]
struct RecommendationRequest {
    goal: String,
    time_horizon: String,
    current_amount: String,
    monthly_capacity: String,
}

#[derive(Debug, Deserialize)]
struct ProjectionRequest {
    initial_amount: String,
    monthly_addition: String,
    expected_return: String,
    years: String,
}

#[derive(Debug, Deserialize)]
struct QuestionnaireRequest {
    age: i64,
    #[serde(default)]
    years_to_retirement: Option<i64>,
    market_downturn_comfort: String,
    previous_experience: String,
}

#[derive(Debug, Deserialize)]
struct BehavioralRequest {
    income_stability: String,
    transaction_frequency: String,
    savings_consistency: String,
    emergency_fund_months: f64,
}

#[derive(Debug, Deserialize)]
struct ConceptRequest {
    concept: String,
}

#[derive(Debug, Deserialize)]
struct AutomationRequest {
    monthly_amount: String,
    investment_type: String,
    strategy: String,
    start_date: String,
}

/// Projection with display strings
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub total_contributed: f64,
    pub projected_total: f64,
    pub projected_earnings: f64,
    pub earnings_share_percent: f64,
    pub total_contributed_display: String,
    pub projected_total_display: String,
    pub projected_earnings_display: String,
    pub annual_return_rate: String,
    pub power_of_compounding: String,
}

/// Risk profile as returned to the assistant
#[derive(Debug, Serialize)]
pub struct RiskProfileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_to_retirement: Option<i64>,
    pub risk_score: i32,
    pub recommended_risk_level: String,
    pub allocation_suggestion: AllocationRanges,
    pub best_fit_strategies: Vec<&'static str>,
    /// Some answers were not recognized and contributed 0
    pub degraded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unrecognized_fields: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct AllocationRanges {
    pub stocks: &'static str,
    pub bonds: &'static str,
    pub cash: &'static str,
}

impl From<&TierGuidance> for AllocationRanges {
    fn from(guidance: &TierGuidance) -> Self {
        Self {
            stocks: guidance.stocks,
            bonds: guidance.bonds,
            cash: guidance.cash,
        }
    }
}

impl RiskProfileResponse {
    fn from_profile(profile: RiskProfile, age: Option<u32>, years_to_retirement: Option<i64>) -> Self {
        let degraded = profile.assessment.is_degraded();
        Self {
            age,
            years_to_retirement,
            risk_score: profile.assessment.score,
            recommended_risk_level: profile.assessment.tier.to_string(),
            allocation_suggestion: AllocationRanges::from(profile.guidance),
            best_fit_strategies: profile.guidance.strategies.to_vec(),
            degraded,
            unrecognized_fields: profile.assessment.unrecognized,
        }
    }
}

/// Plan as returned to the assistant
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub goal: String,
    pub time_horizon: String,
    pub horizon_years: u32,
    pub current_amount: f64,
    pub recommended_allocation: AllocationDisplay,
    pub allocation: AllocationBand,
    pub annual_contribution: f64,
    pub monthly_investment: f64,
    pub estimated_growth_rate: &'static str,
    pub key_strategies: Vec<&'static str>,
    pub next_steps: &'static str,
}

impl From<InvestmentPlan> for RecommendationResponse {
    fn from(plan: InvestmentPlan) -> Self {
        Self {
            goal: plan.goal,
            time_horizon: plan.time_horizon,
            horizon_years: plan.horizon_years,
            current_amount: plan.current_amount,
            recommended_allocation: plan.recommended_allocation,
            allocation: plan.allocation,
            annual_contribution: plan.annual_contribution,
            monthly_investment: plan.monthly_investment,
            estimated_growth_rate: plan.estimated_growth_rate,
            key_strategies: plan.key_strategies,
            next_steps: plan.next_steps,
        }
    }
}

/// Tool dispatcher owning the tables and the numeric parse cache
#[derive(Debug)]
pub struct InvestmentTools {
    tables: Tables,
    cache: ParseCache,
}

impl InvestmentTools {
    pub fn new(tables: Tables) -> Self {
        Self {
            tables,
            cache: ParseCache::new(),
        }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn cache(&self) -> &ParseCache {
        &self.cache
    }

    /// Run a tool by name
    pub fn call(&self, name: &str, input: Value) -> Result<Value> {
        let tool = ToolName::from_name(name).ok_or_else(|| EngineError::UnknownTool(name.to_string()))?;
        log::debug!("calling tool {}", tool.name());

        let output = match tool {
            ToolName::GetInvestmentProfile => to_value(InvestmentProfile::demo().summary())?,
            ToolName::AnalyzeInvestmentRecommendations => to_value(self.recommend(decode(input)?)?)?,
            ToolName::CalculateInvestmentProjection => to_value(self.project(decode(input)?)?)?,
            ToolName::AssessInvestmentRiskProfile => to_value(self.assess_questionnaire(decode(input)?)?)?,
            ToolName::AssessBehavioralRiskProfile => to_value(self.assess_behavior(decode(input)?)?)?,
            ToolName::ExplainInvestmentConcept => {
                let request: ConceptRequest = decode(input)?;
                to_value(education::explain(&request.concept))?
            }
            ToolName::DraftAutomatedInvesting => to_value(self.draft_automation(decode(input)?)?)?,
        };
        Ok(output)
    }

    fn recommend(&self, request: RecommendationRequest) -> Result<RecommendationResponse> {
        let current = self.cache.parse_decimal("current_amount", &request.current_amount)?;
        let monthly = self.cache.parse_decimal("monthly_capacity", &request.monthly_capacity)?;
        let plan = InvestmentPlan::build(
            &self.tables,
            &request.goal,
            &request.time_horizon,
            current,
            monthly,
        )?;
        Ok(plan.into())
    }

    fn project(&self, request: ProjectionRequest) -> Result<ProjectionResponse> {
        let input = ProjectionInput::new(
            self.cache.parse_decimal("initial_amount", &request.initial_amount)?,
            self.cache.parse_decimal("monthly_addition", &request.monthly_addition)?,
            self.cache.parse_decimal("expected_return", &request.expected_return)?,
            parse_whole("years", &request.years)?,
        );
        let result = project_growth(&input)?;

        Ok(ProjectionResponse {
            initial_investment: result.initial_amount,
            monthly_contribution: result.monthly_contribution,
            years: result.years,
            total_contributed: result.total_contributed,
            projected_total: result.projected_total,
            projected_earnings: result.projected_earnings,
            earnings_share_percent: result.earnings_share_percent,
            total_contributed_display: report::currency(result.total_contributed),
            projected_total_display: report::currency(result.projected_total),
            projected_earnings_display: report::currency(result.projected_earnings),
            annual_return_rate: report::percent(result.annual_return_percent),
            power_of_compounding: result.summary_line(),
        })
    }

    fn assess_questionnaire(&self, request: QuestionnaireRequest) -> Result<RiskProfileResponse> {
        let age = u32::try_from(request.age)
            .map_err(|_| EngineError::out_of_range("age", request.age, "0 to 119"))?;
        let factors = QuestionnaireFactors::from_answers(
            age,
            &request.market_downturn_comfort,
            &request.previous_experience,
        );
        let profile = assess_questionnaire(&factors)?.with_guidance()?;
        Ok(RiskProfileResponse::from_profile(
            profile,
            Some(age),
            request.years_to_retirement,
        ))
    }

    fn assess_behavior(&self, request: BehavioralRequest) -> Result<RiskProfileResponse> {
        let factors = BehavioralFactors::from_answers(
            &request.income_stability,
            &request.transaction_frequency,
            &request.savings_consistency,
            request.emergency_fund_months,
        );
        let profile = assess_behavior(&factors)?.with_guidance()?;
        Ok(RiskProfileResponse::from_profile(profile, None, None))
    }

    fn draft_automation(&self, request: AutomationRequest) -> Result<AutomatedPlanDraft> {
        let monthly = self.cache.parse_decimal("monthly_amount", &request.monthly_amount)?;
        AutomatedPlanDraft::new(
            monthly,
            &request.investment_type,
            &request.strategy,
            &request.start_date,
        )
    }
}

impl Default for InvestmentTools {
    fn default() -> Self {
        Self::new(Tables::default_tables())
    }
}

fn decode<T: DeserializeOwned>(input: Value) -> Result<T> {
    serde_json::from_value(input).map_err(|e| EngineError::InvalidToolInput(e.to_string()))
}

fn to_value<T: Serialize>(output: T) -> Result<Value> {
    Ok(serde_json::to_value(output)?)
}
