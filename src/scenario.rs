//! Scenario runner for batch projections
//!
//! Holds the lookup tables once, then runs many projections (for example a
//! grid of return rates against horizons) in parallel.

use rayon::prelude::*;
use serde::Serialize;

use crate::allocation::AllocationBand;
use crate::error::Result;
use crate::projection::{project_growth, ProjectionInput, ProjectionResult};
use crate::Tables;

/// Grid of return rates × horizons for one contribution pattern
#[derive(Debug, Clone)]
pub struct ScenarioGrid {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub annual_return_percents: Vec<f64>,
    pub years: Vec<u32>,
}

impl ScenarioGrid {
    /// Every (rate, years) combination, rates outermost
    pub fn inputs(&self) -> Vec<ProjectionInput> {
        self.annual_return_percents
            .iter()
            .flat_map(|&rate| {
                self.years.iter().map(move |&years| {
                    ProjectionInput::new(self.initial_amount, self.monthly_contribution, rate, years)
                })
            })
            .collect()
    }
}

/// One projected scenario with the allocation for its horizon
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub projection: ProjectionResult,
    pub allocation: AllocationBand,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
/// let outcomes = runner.run_grid(&grid)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    tables: Tables,
}

impl ScenarioRunner {
    /// Create runner with built-in tables
    pub fn new() -> Self {
        Self {
            tables: Tables::default_tables(),
        }
    }

    /// Create runner by loading tables from CSV files
    pub fn from_csv() -> Result<Self> {
        Ok(Self {
            tables: Tables::from_csv()?,
        })
    }

    /// Create runner from specific tables directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self {
            tables: Tables::from_csv_path(path)?,
        })
    }

    pub fn with_tables(tables: Tables) -> Self {
        Self { tables }
    }

    /// Project a single scenario
    pub fn run(&self, input: &ProjectionInput) -> Result<ScenarioOutcome> {
        let projection = project_growth(input)?;
        let allocation = *self.tables.allocation.select(input.years);
        Ok(ScenarioOutcome {
            projection,
            allocation,
        })
    }

    /// Project many scenarios in parallel, preserving input order.
    /// Each scenario succeeds or fails on its own.
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Vec<Result<ScenarioOutcome>> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    /// Project every grid cell; fails on the first invalid cell
    pub fn run_grid(&self, grid: &ScenarioGrid) -> Result<Vec<ScenarioOutcome>> {
        let inputs = grid.inputs();
        log::info!("running {} grid scenarios", inputs.len());
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
