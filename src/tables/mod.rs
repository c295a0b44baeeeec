//! Lookup tables for allocation bands and horizon literals

pub mod loader;

pub use loader::LoadedTables;

use std::path::Path;

use crate::allocation::{AllocationTable, HorizonTable, DEFAULT_HORIZON_YEARS};
use crate::error::Result;

/// Container for all lookup tables. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    pub allocation: AllocationTable,
    pub horizons: HorizonTable,
}

impl Tables {
    /// Built-in tables
    pub fn default_tables() -> Self {
        Self {
            allocation: AllocationTable::default(),
            horizons: HorizonTable::default(),
        }
    }

    /// Load tables from CSV files in the default location (data/tables/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_TABLES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedTables::load_from(path)?;
        Self::from_loaded(loaded)
    }

    /// Validate raw loaded tables
    pub fn from_loaded(loaded: LoadedTables) -> Result<Self> {
        Ok(Self {
            allocation: AllocationTable::new(loaded.allocation_bands)?,
            horizons: HorizonTable::new(loaded.time_horizons, DEFAULT_HORIZON_YEARS),
        })
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::default_tables()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::AllocationBand;
    use crate::error::EngineError;
    use std::collections::HashMap;

    #[test]
    fn test_csv_tables_match_built_in() {
        let from_csv = Tables::from_csv().unwrap();
        assert_eq!(from_csv, Tables::default_tables());
    }

    #[test]
    fn test_invalid_loaded_bands_rejected() {
        let loaded = LoadedTables {
            allocation_bands: vec![AllocationBand::new(Some(5), 0.5, 0.5, 0.5)],
            time_horizons: HashMap::new(),
        };
        assert!(matches!(
            Tables::from_loaded(loaded),
            Err(EngineError::InvalidTable(_))
        ));
    }
}
