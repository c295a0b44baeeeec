//! Run a grid of return rates × horizons and write the outcomes to CSV
//!
//! Example:
//!   scenario_grid --initial 5000 --monthly 500 --rates 4,7,10 --years 5,10,20,30

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use investment_engine::{ScenarioGrid, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "scenario_grid", about = "Project a grid of return rates and horizons")]
struct Args {
    #[arg(long)]
    initial: f64,
    #[arg(long, default_value_t = 0.0)]
    monthly: f64,
    #[arg(long, value_delimiter = ',', default_value = "4,6,8,10")]
    rates: Vec<f64>,
    #[arg(long, value_delimiter = ',', default_value = "5,10,20,30")]
    years: Vec<u32>,
    #[arg(long, help = "Directory holding allocation_bands.csv and time_horizons.csv")]
    tables: Option<PathBuf>,
    #[arg(long, default_value = "scenario_grid_output.csv")]
    output: PathBuf,
}

/// One CSV row per grid cell
#[derive(Debug, Serialize)]
struct GridRow {
    annual_return_percent: f64,
    years: u32,
    total_contributed: f64,
    projected_total: f64,
    projected_earnings: f64,
    earnings_share_percent: f64,
    stocks: f64,
    bonds: f64,
    cash: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = match &args.tables {
        Some(path) => ScenarioRunner::from_csv_path(path)
            .with_context(|| format!("loading tables from {}", path.display()))?,
        None => ScenarioRunner::new(),
    };

    let grid = ScenarioGrid {
        initial_amount: args.initial,
        monthly_contribution: args.monthly,
        annual_return_percents: args.rates,
        years: args.years,
    };

    let start = Instant::now();
    let outcomes = runner.run_grid(&grid)?;
    println!("Projected {} scenarios in {:?}", outcomes.len(), start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for outcome in &outcomes {
        let p = &outcome.projection;
        writer.serialize(GridRow {
            annual_return_percent: p.annual_return_percent,
            years: p.years,
            total_contributed: p.total_contributed,
            projected_total: p.projected_total,
            projected_earnings: p.projected_earnings,
            earnings_share_percent: p.earnings_share_percent,
            stocks: outcome.allocation.stocks,
            bonds: outcome.allocation.bonds,
            cash: outcome.allocation.cash,
        })?;
    }
    writer.flush()?;

    println!("Results written to: {}", args.output.display());
    Ok(())
}
