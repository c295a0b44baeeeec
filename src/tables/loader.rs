//! CSV-based table loader
//!
//! Loads allocation bands and horizon literals from CSV files in data/tables/

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::allocation::AllocationBand;
use crate::error::Result;

/// Default path to tables directory
pub const DEFAULT_TABLES_PATH: &str = "data/tables";

pub const ALLOCATION_BANDS_FILE: &str = "allocation_bands.csv";
pub const TIME_HORIZONS_FILE: &str = "time_horizons.csv";

/// Row of allocation_bands.csv; an empty max_years marks the open-ended band
#[derive(Debug, Deserialize)]
struct BandRow {
    max_years: Option<u32>,
    stocks: f64,
    bonds: f64,
    cash: f64,
}

/// Row of time_horizons.csv
#[derive(Debug, Deserialize)]
struct HorizonRow {
    horizon: String,
    years: u32,
}

/// Load allocation bands in file order
pub fn load_allocation_bands(path: &Path) -> Result<Vec<AllocationBand>> {
    let file = File::open(path.join(ALLOCATION_BANDS_FILE))?;
    read_allocation_bands(file)
}

/// Read allocation bands from any reader
pub fn read_allocation_bands<R: Read>(reader: R) -> Result<Vec<AllocationBand>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut bands = Vec::new();

    for result in csv_reader.deserialize() {
        let row: BandRow = result?;
        bands.push(AllocationBand::new(row.max_years, row.stocks, row.bonds, row.cash));
    }

    Ok(bands)
}

/// Load horizon literals as text -> years
pub fn load_time_horizons(path: &Path) -> Result<HashMap<String, u32>> {
    let file = File::open(path.join(TIME_HORIZONS_FILE))?;
    read_time_horizons(file)
}

/// Read horizon literals from any reader
pub fn read_time_horizons<R: Read>(reader: R) -> Result<HashMap<String, u32>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut horizons = HashMap::new();

    for result in csv_reader.deserialize() {
        let row: HorizonRow = result?;
        horizons.insert(row.horizon.trim().to_string(), row.years);
    }

    Ok(horizons)
}

/// Raw table contents before validation
pub struct LoadedTables {
    pub allocation_bands: Vec<AllocationBand>,
    pub time_horizons: HashMap<String, u32>,
}

impl LoadedTables {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_TABLES_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("loading tables from {}", path.display());
        Ok(Self {
            allocation_bands: load_allocation_bands(path)?,
            time_horizons: load_time_horizons(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_tables() {
        let result = LoadedTables::load_default();
        assert!(result.is_ok(), "Failed to load tables: {:?}", result.err());

        let tables = result.unwrap();
        assert_eq!(tables.allocation_bands.len(), 3);
        assert_eq!(tables.allocation_bands[0].max_years, Some(5));
        assert_eq!(tables.allocation_bands[2].max_years, None);
        assert_eq!(tables.time_horizons.get("20+"), Some(&20));
        assert_eq!(tables.time_horizons.len(), 7);
    }

    #[test]
    fn test_read_bands_from_string() {
        let data = "max_years,stocks,bonds,cash\n3,0.2,0.6,0.2\n,0.7,0.2,0.1\n";
        let bands = read_allocation_bands(data.as_bytes()).unwrap();
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].max_years, Some(3));
        assert_eq!(bands[1].max_years, None);
        assert_eq!(bands[1].stocks, 0.7);
    }

    #[test]
    fn test_read_rejects_malformed_rows() {
        let data = "max_years,stocks,bonds,cash\nfive,0.2,0.6,0.2\n";
        assert!(read_allocation_bands(data.as_bytes()).is_err());

        let data = "horizon,years\n20+,twenty\n";
        assert!(read_time_horizons(data.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_directory() {
        assert!(LoadedTables::load_from(Path::new("does/not/exist")).is_err());
    }
}
