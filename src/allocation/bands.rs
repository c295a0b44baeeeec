//! Stocks/bonds/cash bands keyed by time horizon

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::report;

const FRACTION_TOLERANCE: f64 = 1e-9;

/// One row of the allocation table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationBand {
    /// Inclusive upper bound on the horizon in years; `None` = no bound
    pub max_years: Option<u32>,
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
}

impl AllocationBand {
    pub const fn new(max_years: Option<u32>, stocks: f64, bonds: f64, cash: f64) -> Self {
        Self {
            max_years,
            stocks,
            bonds,
            cash,
        }
    }

    /// Whether a horizon of `years` falls at or under this band's bound
    pub fn accepts(&self, years: u32) -> bool {
        self.max_years.map_or(true, |max| years <= max)
    }

    pub fn total(&self) -> f64 {
        self.stocks + self.bonds + self.cash
    }

    /// Rendered shares, e.g. ("30%", "50%", "20%")
    pub fn display(&self) -> AllocationDisplay {
        AllocationDisplay {
            stocks: report::whole_percent(self.stocks),
            bonds: report::whole_percent(self.bonds),
            cash: report::whole_percent(self.cash),
        }
    }
}

/// Allocation shares formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationDisplay {
    pub stocks: String,
    pub bonds: String,
    pub cash: String,
}

/// Built-in bands: short horizons lean on bonds, long horizons on stocks
pub const DEFAULT_BANDS: [AllocationBand; 3] = [
    AllocationBand::new(Some(5), 0.30, 0.50, 0.20),
    AllocationBand::new(Some(15), 0.60, 0.30, 0.10),
    AllocationBand::new(None, 0.80, 0.15, 0.05),
];

/// Ordered allocation bands; the first band accepting a horizon wins.
///
/// Invariants checked on construction: at least one band, thresholds strictly
/// ascending, only the last band unbounded, fractions in [0, 1] summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationTable {
    bands: Vec<AllocationBand>,
}

impl AllocationTable {
    pub fn new(bands: Vec<AllocationBand>) -> Result<Self> {
        let Some(last) = bands.last() else {
            return Err(EngineError::InvalidTable(
                "allocation table has no bands".to_string(),
            ));
        };
        if last.max_years.is_some() {
            return Err(EngineError::InvalidTable(
                "last allocation band must be unbounded".to_string(),
            ));
        }

        let mut previous: Option<u32> = None;
        for (i, band) in bands.iter().enumerate() {
            for (name, value) in [("stocks", band.stocks), ("bonds", band.bonds), ("cash", band.cash)] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(EngineError::InvalidTable(format!(
                        "band {}: {} fraction {} outside [0, 1]",
                        i + 1,
                        name,
                        value
                    )));
                }
            }
            if (band.total() - 1.0).abs() > FRACTION_TOLERANCE {
                return Err(EngineError::InvalidTable(format!(
                    "band {}: fractions sum to {}, expected 1",
                    i + 1,
                    band.total()
                )));
            }

            if i + 1 < bands.len() {
                let Some(max) = band.max_years else {
                    return Err(EngineError::InvalidTable(format!(
                        "band {}: only the last band may be unbounded",
                        i + 1
                    )));
                };
                if previous.is_some_and(|p| max <= p) {
                    return Err(EngineError::InvalidTable(format!(
                        "band {}: threshold {} not above previous threshold",
                        i + 1,
                        max
                    )));
                }
                previous = Some(max);
            }
        }

        Ok(Self { bands })
    }

    /// Select the band for a horizon in years
    pub fn select(&self, years: u32) -> &AllocationBand {
        self.bands
            .iter()
            .find(|band| band.accepts(years))
            // construction guarantees an unbounded last band
            .unwrap_or(&self.bands[self.bands.len() - 1])
    }

    pub fn bands(&self) -> &[AllocationBand] {
        &self.bands
    }
}

impl Default for AllocationTable {
    fn default() -> Self {
        Self {
            bands: DEFAULT_BANDS.to_vec(),
        }
    }
}
