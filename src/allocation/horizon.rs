//! Time horizon normalization
//!
//! Horizons arrive as free text ("5", "3-5", "20+"). Known literals map to a
//! year count; everything else falls back to 10 years.

use serde::Serialize;
use std::collections::HashMap;

/// Years assumed for an unrecognized horizon
pub const DEFAULT_HORIZON_YEARS: u32 = 10;

/// Built-in horizon literals
pub const DEFAULT_HORIZONS: [(&str, u32); 7] = [
    ("1", 2),
    ("1-3", 2),
    ("5", 5),
    ("3-5", 5),
    ("10", 10),
    ("20", 20),
    ("20+", 20),
];

/// Exact-match lookup from horizon text to years
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorizonTable {
    entries: HashMap<String, u32>,
    fallback_years: u32,
}

impl HorizonTable {
    pub fn new(entries: HashMap<String, u32>, fallback_years: u32) -> Self {
        Self {
            entries,
            fallback_years,
        }
    }

    /// Map horizon text to a year count (whitespace is trimmed first)
    pub fn normalize(&self, horizon: &str) -> u32 {
        match self.entries.get(horizon.trim()) {
            Some(&years) => years,
            None => {
                log::debug!(
                    "unrecognized horizon {:?}, assuming {} years",
                    horizon,
                    self.fallback_years
                );
                self.fallback_years
            }
        }
    }

    /// Whether the text is a known horizon literal
    pub fn recognizes(&self, horizon: &str) -> bool {
        self.entries.contains_key(horizon.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HorizonTable {
    fn default() -> Self {
        let entries = DEFAULT_HORIZONS
            .iter()
            .map(|&(text, years)| (text.to_string(), years))
            .collect();
        Self::new(entries, DEFAULT_HORIZON_YEARS)
    }
}

/// Normalize with the built-in table
pub fn normalize_horizon(horizon: &str) -> u32 {
    DEFAULT_HORIZONS
        .iter()
        .find(|(text, _)| *text == horizon.trim())
        .map(|&(_, years)| years)
        .unwrap_or(DEFAULT_HORIZON_YEARS)
}
