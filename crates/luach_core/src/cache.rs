//! Read-through memo cache for computed day sets.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use luach_types::{GeoCoordinate, LuachError, ZmanimSet};

/// Coordinates are rounded to four decimals (about 11 m).
const PRECISION: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    date: NaiveDate,
    lat: i64,
    lng: i64,
}

impl CacheKey {
    pub fn new(date: NaiveDate, location: &GeoCoordinate) -> Self {
        Self {
            date,
            lat: (location.lat * PRECISION).round() as i64,
            lng: (location.lng * PRECISION).round() as i64,
        }
    }
}

/// Concurrent misses may compute twice; the first stored value wins, so
/// every reader sees the same set.
#[derive(Debug)]
pub struct ZmanimCache {
    capacity: usize,
    entries: RwLock<HashMap<CacheKey, ZmanimSet>>,
}

impl ZmanimCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(HashMap::with_capacity(capacity.min(1024))),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |m| m.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &CacheKey) -> Option<ZmanimSet> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    /// Returns the cached set or computes, stores and returns it.
    /// Errors are not cached.
    pub fn get_or_try_insert<F>(&self, key: CacheKey, compute: F) -> Result<ZmanimSet, LuachError>
    where
        F: FnOnce() -> Result<ZmanimSet, LuachError>,
    {
        if let Some(hit) = self.get(&key) {
            log::debug!("zmanim cache hit for {}", key.date);
            return Ok(hit);
        }
        log::debug!("zmanim cache miss for {}", key.date);
        let computed = compute()?;

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            // Full: start over.
            entries.clear();
        }
        Ok(entries.entry(key).or_insert(computed).clone())
    }

    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(|e| e.into_inner()).clear();
    }
}
