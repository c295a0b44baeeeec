//! End-to-end checks through the public API

use approx::assert_relative_eq;
use serde_json::json;

use investment_engine::allocation::allocation_for_horizon;
use investment_engine::report;
use investment_engine::risk::{
    assess_behavior, assess_questionnaire, BehavioralFactors, DownturnComfort, Experience,
    IncomeStability, QuestionnaireFactors, SavingsConsistency, TransactionFrequency,
};
use investment_engine::{
    project_growth, EngineError, InvestmentPlan, InvestmentTools, ProjectionInput, RiskTier,
    ScenarioGrid, ScenarioRunner, Tables,
};

#[test]
fn test_retirement_saver_projection() {
    let result = project_growth(&ProjectionInput::new(5_000.0, 500.0, 7.0, 20)).unwrap();

    assert_eq!(report::currency(result.total_contributed), "$125000.00");
    assert_eq!(report::currency(result.projected_total), "$280657.02");
    assert_eq!(report::currency(result.projected_earnings), "$155657.02");
    assert_relative_eq!(
        result.projected_total,
        result.total_contributed + result.projected_earnings,
        max_relative = 1e-12
    );
}

#[test]
fn test_flat_and_losing_years() {
    let flat = project_growth(&ProjectionInput::new(1_000.0, 100.0, 0.0, 10)).unwrap();
    assert_relative_eq!(flat.projected_total, 13_000.0, epsilon = 1e-9);
    assert_eq!(flat.projected_earnings, 0.0);

    let losing = project_growth(&ProjectionInput::new(10_000.0, 0.0, -5.0, 10)).unwrap();
    assert!(losing.projected_total < 10_000.0);
    assert!(losing.projected_earnings < 0.0);

    assert!(matches!(
        project_growth(&ProjectionInput::new(1_000.0, 0.0, -100.0, 5)),
        Err(EngineError::OutOfRange { .. })
    ));
}

#[test]
fn test_allocation_for_each_horizon_literal() {
    let cases = [
        ("1", 0.30),
        ("1-3", 0.30),
        ("3-5", 0.30),
        ("5", 0.30),
        ("10", 0.60),
        ("20", 0.80),
        ("20+", 0.80),
        ("someday", 0.60),
    ];
    for (horizon, stocks) in cases {
        let band = allocation_for_horizon(horizon);
        assert_eq!(band.stocks, stocks, "horizon {horizon}");
        assert_relative_eq!(band.total(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_plan_uses_loaded_tables() {
    let tables = Tables::from_csv().unwrap();
    let plan = InvestmentPlan::build(&tables, "house", "3-5", 2_000.0, 300.0).unwrap();
    assert_eq!(plan.horizon_years, 5);
    assert_eq!(plan.recommended_allocation.bonds, "50%");
    assert_eq!(plan.annual_contribution, 3_600.0);
}

#[test]
fn test_two_models_disagree_on_tiers() {
    let questionnaire = assess_questionnaire(&QuestionnaireFactors::new(
        28,
        DownturnComfort::Comfortable,
        Experience::Minimal,
    ))
    .unwrap();
    assert_eq!(questionnaire.score, 120);
    assert_eq!(questionnaire.tier, RiskTier::ModerateToAggressive);

    let behavior = assess_behavior(&BehavioralFactors::new(
        IncomeStability::Stable,
        TransactionFrequency::Medium,
        SavingsConsistency::Moderate,
        6.0,
    ))
    .unwrap();
    assert_eq!(behavior.score, 40 + 15 + 15 + 15);
    assert_eq!(behavior.tier, RiskTier::Aggressive);
    assert!(matches!(
        behavior.with_guidance(),
        Err(EngineError::MissingTierGuidance(RiskTier::Aggressive))
    ));
}

#[test]
fn test_tool_session() {
    let tools = InvestmentTools::new(Tables::default_tables());

    let profile = tools.call("get_investment_profile", json!({})).unwrap();
    assert_eq!(profile["risk_tolerance"], "moderate");

    let projection = tools
        .call(
            "calculate_investment_projection",
            json!({
                "initial_amount": "$5,000",
                "monthly_addition": "500",
                "expected_return": "7%",
                "years": "20"
            }),
        )
        .unwrap();
    assert_eq!(projection["projected_total_display"], "$280657.02");

    let risk = tools
        .call(
            "assess_investment_risk_profile",
            json!({
                "age": 40,
                "market_downturn_comfort": "neutral",
                "previous_experience": "none"
            }),
        )
        .unwrap();
    assert_eq!(risk["risk_score"], 50 + 40 - 20);
    assert_eq!(risk["recommended_risk_level"], "Moderate-to-Aggressive");

    let err = tools.call("sell_everything", json!({})).unwrap_err();
    assert!(matches!(err, EngineError::UnknownTool(_)));
    assert!(!err.is_input_error());
}

#[test]
fn test_scenario_grid_matches_single_projections() {
    let runner = ScenarioRunner::new();
    let grid = ScenarioGrid {
        initial_amount: 1_000.0,
        monthly_contribution: 100.0,
        annual_return_percents: vec![0.0, 5.0],
        years: vec![1, 10, 40],
    };
    let outcomes = runner.run_grid(&grid).unwrap();
    assert_eq!(outcomes.len(), 6);

    for (outcome, input) in outcomes.iter().zip(grid.inputs()) {
        let single = project_growth(&input).unwrap();
        assert_eq!(outcome.projection, single);
    }
}
