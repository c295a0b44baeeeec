//! Numeric parsing for loosely-typed tool inputs
//!
//! Amounts and rates arrive as strings ("5000", "$5,000", "7%"). Anything that
//! does not parse to a finite number is rejected rather than read as zero.
//!
//! `ParseCache` memoizes successful parses of identical literals. It is purely
//! an optimization: results are the same with or without it.

use crate::error::{EngineError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Default number of distinct literals kept by a `ParseCache`
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Parse a decimal amount or rate.
///
/// Accepts surrounding whitespace, one leading `$`, one trailing `%`, and `,`
/// thousands separators.
pub fn parse_decimal(field: &'static str, text: &str) -> Result<f64> {
    let invalid = || EngineError::InvalidNumber {
        field,
        value: text.to_string(),
    };

    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let cleaned: String = trimmed.chars().filter(|&c| c != ',').collect();
    let value: f64 = cleaned.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Parse a whole, non-negative count (e.g. years)
pub fn parse_whole(field: &'static str, text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| EngineError::InvalidNumber {
        field,
        value: text.to_string(),
    })?;
    if value < 0 {
        return Err(EngineError::out_of_range(field, value, "a non-negative whole number"));
    }
    u32::try_from(value).map_err(|_| EngineError::out_of_range(field, value, "at most 4294967295"))
}

/// Bounded, thread-safe memo of decimal parses
#[derive(Debug)]
pub struct ParseCache {
    entries: RwLock<HashMap<String, f64>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ParseCache {
    /// Create a cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache holding at most `capacity` literals
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Parse `text`, serving repeated literals from the cache.
    /// Failed parses are never cached.
    pub fn parse_decimal(&self, field: &'static str, text: &str) -> Result<f64> {
        if let Ok(entries) = self.entries.read() {
            if let Some(&value) = entries.get(text) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                log::debug!("parse cache hit for {field}: {text:?}");
                return Ok(value);
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let value = parse_decimal(field, text)?;

        // Poisoned lock: skip the memo, keep the parsed value
        if let Ok(mut entries) = self.entries.write() {
            if entries.len() < self.capacity {
                entries.insert(text.to_string(), value);
            }
        }
        Ok(value)
    }

    /// Number of cached literals
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Get cache hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits() + self.misses();
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }

    /// Drop all entries and reset statistics
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new()
    }
}
