//! Investment Engine CLI
//!
//! Command-line interface for projections, allocation plans, and risk scoring

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use investment_engine::parse::{parse_decimal, parse_whole};
use investment_engine::report;
use investment_engine::risk::{
    assess_behavior, assess_questionnaire, BehavioralFactors, QuestionnaireFactors,
};
use investment_engine::{
    education, project_growth, yearly_schedule, InvestmentPlan, InvestmentTools, ProjectionInput,
    RiskAssessment, Tables,
};

#[derive(Parser, Debug)]
#[command(
    name = "investment_engine",
    about = "Growth projections, allocation plans, and risk scoring for new investors"
)]
struct Cli {
    #[arg(long, global = true, help = "Directory holding allocation_bands.csv and time_horizons.csv")]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a lump sum plus monthly contributions
    Project {
        #[arg(long, help = "Starting balance, e.g. 5000 or $5,000")]
        initial: String,
        #[arg(long, default_value = "0")]
        monthly: String,
        #[arg(long, help = "Expected annual return in percent, e.g. 7")]
        rate: String,
        #[arg(long)]
        years: String,
        #[arg(long, help = "Print a year-by-year balance schedule")]
        schedule: bool,
    },
    /// Recommend an allocation for a goal and time horizon
    Allocate {
        #[arg(long, help = "Horizon literal such as 1-3, 3-5, 10, 20+")]
        horizon: String,
        #[arg(long, default_value = "general investing")]
        goal: String,
        #[arg(long, default_value = "0")]
        current: String,
        #[arg(long, default_value = "0")]
        monthly: String,
    },
    /// Score the risk questionnaire
    Risk {
        #[arg(long)]
        age: u32,
        #[arg(long, help = "very_uncomfortable, somewhat_uncomfortable, neutral, comfortable, very_comfortable")]
        comfort: String,
        #[arg(long, help = "none, minimal, moderate, extensive")]
        experience: String,
    },
    /// Score observed financial behavior
    Behavioral {
        #[arg(long, help = "unstable, moderate, stable")]
        income: String,
        #[arg(long, help = "high, medium, low")]
        frequency: String,
        #[arg(long, help = "inconsistent, moderate, excellent")]
        savings: String,
        #[arg(long)]
        emergency_months: String,
    },
    /// Explain an investing concept
    Explain { concept: String },
    /// Call an assistant tool with a JSON input
    Tool {
        name: String,
        #[arg(long, default_value = "{}")]
        input: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let tables = match &cli.tables {
        Some(path) => Tables::from_csv_path(path)
            .with_context(|| format!("loading tables from {}", path.display()))?,
        None => Tables::default_tables(),
    };

    match cli.command {
        Command::Project {
            initial,
            monthly,
            rate,
            years,
            schedule,
        } => {
            let input = ProjectionInput::new(
                parse_decimal("initial_amount", &initial)?,
                parse_decimal("monthly_contribution", &monthly)?,
                parse_decimal("annual_return_percent", &rate)?,
                parse_whole("years", &years)?,
            );
            let result = project_growth(&input)?;

            println!("Projection ({} years at {}):", result.years, report::percent(result.annual_return_percent));
            println!("  Total contributed: {:>14}", report::currency(result.total_contributed));
            println!("  Projected total:   {:>14}", report::currency(result.projected_total));
            println!("  Earnings:          {:>14}", report::currency(result.projected_earnings));
            println!("  {}", result.summary_line());

            if schedule {
                println!();
                println!("{:>4} {:>14} {:>14} {:>14} {:>14}", "Year", "Contributed", "Balance", "Earnings", "This Year");
                println!("{}", "-".repeat(64));
                for row in yearly_schedule(&input)? {
                    println!(
                        "{:>4} {:>14} {:>14} {:>14} {:>14}",
                        row.year,
                        report::currency(row.contributed_to_date),
                        report::currency(row.balance),
                        report::currency(row.earnings_to_date),
                        report::currency(row.earnings_this_year),
                    );
                }
            }
        }
        Command::Allocate {
            horizon,
            goal,
            current,
            monthly,
        } => {
            if !tables.horizons.recognizes(&horizon) {
                log::warn!("horizon {:?} not recognized, using the default", horizon);
            }
            let plan = InvestmentPlan::build(
                &tables,
                &goal,
                &horizon,
                parse_decimal("current_amount", &current)?,
                parse_decimal("monthly_capacity", &monthly)?,
            )?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Risk {
            age,
            comfort,
            experience,
        } => {
            let factors = QuestionnaireFactors::from_answers(age, &comfort, &experience);
            print_assessment(assess_questionnaire(&factors)?)?;
        }
        Command::Behavioral {
            income,
            frequency,
            savings,
            emergency_months,
        } => {
            let factors = BehavioralFactors::from_answers(
                &income,
                &frequency,
                &savings,
                parse_decimal("emergency_fund_months", &emergency_months)?,
            );
            print_assessment(assess_behavior(&factors)?)?;
        }
        Command::Explain { concept } => {
            let explanation = education::explain(&concept);
            println!("{}", explanation.explanation);
            for point in &explanation.key_points {
                println!("  - {}", point);
            }
        }
        Command::Tool { name, input } => {
            let input: serde_json::Value =
                serde_json::from_str(&input).context("tool input must be JSON")?;
            let tools = InvestmentTools::new(tables);
            let output = tools.call(&name, input)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_assessment(assessment: RiskAssessment) -> Result<()> {
    println!("Risk score: {} ({})", assessment.score, assessment.tier);
    if assessment.is_degraded() {
        println!("  Unrecognized answers scored as 0: {}", assessment.unrecognized.join(", "));
    }

    let tier = assessment.tier;
    let profile = assessment
        .with_guidance()
        .with_context(|| format!("no allocation guidance for {}", tier))?;
    println!(
        "  Stocks {}  Bonds {}  Cash {}",
        profile.guidance.stocks, profile.guidance.bonds, profile.guidance.cash
    );
    for strategy in profile.guidance.strategies {
        println!("  - {}", strategy);
    }
    Ok(())
}
