//! Horizon-based allocation, investment plans, and recurring investment drafts

mod bands;
mod horizon;
mod plan;
mod automation;

pub use bands::{AllocationBand, AllocationDisplay, AllocationTable, DEFAULT_BANDS};
pub use horizon::{normalize_horizon, HorizonTable, DEFAULT_HORIZONS, DEFAULT_HORIZON_YEARS};
pub use plan::{annual_contribution, InvestmentPlan, ESTIMATED_GROWTH_RATE, KEY_STRATEGIES};
pub use automation::{AutomatedPlanDraft, InvestmentType, Strategy};

/// Allocation for free-text horizon using the built-in tables
pub fn allocation_for_horizon(horizon: &str) -> AllocationBand {
    DEFAULT_BANDS
        .iter()
        .find(|band| band.accepts(normalize_horizon(horizon)))
        .copied()
        .unwrap_or(DEFAULT_BANDS[DEFAULT_BANDS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_plus_selects_stock_heavy_band() {
        let band = allocation_for_horizon("20+");
        assert_eq!((band.stocks, band.bonds, band.cash), (0.80, 0.15, 0.05));
    }

    #[test]
    fn test_matches_table_selection() {
        let table = AllocationTable::default();
        for text in ["1", "3-5", "10", "20", "unknown"] {
            assert_eq!(allocation_for_horizon(text), *table.select(normalize_horizon(text)));
        }
    }
}
