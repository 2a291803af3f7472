//! Station registry service for O(1) station metadata lookups
//!
//! Builds the station index from the weather-station metadata feed and
//! answers lookups by station identifier. The index is built once per load
//! and is read-only afterwards.

use crate::app::models::{Station, StationRecord};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

pub mod metadata;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::LoadStats;
pub use parser::{parse_station_feed, parse_station_record};

/// Station index keyed by station identifier
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Station metadata indexed by station id for O(1) lookups
    pub(crate) stations: HashMap<String, Station>,
}

impl StationRegistry {
    /// Create a new empty station registry
    pub fn new() -> Self {
        Self {
            stations: HashMap::new(),
        }
    }

    /// Build the index from raw feed records
    ///
    /// Duplicate identifiers are not an error: the last record wins.
    /// Numeric fields that are not numbers become NaN.
    pub fn from_records(records: &[StationRecord]) -> (Self, LoadStats) {
        let start_time = Instant::now();
        let mut registry = Self::new();
        let mut stats = LoadStats::new();

        for record in records {
            stats.records_read += 1;

            let station = parse_station_record(record);
            if !station.latitude.is_finite() || !station.longitude.is_finite() {
                stats.non_numeric_coordinates += 1;
                debug!(
                    "Station {} has non-numeric coordinates ({}, {})",
                    station.id, record.station_latitude, record.station_longitude
                );
            }

            if let Some(previous) = registry.stations.insert(station.id.clone(), station) {
                stats.duplicates_replaced += 1;
                debug!(
                    "Duplicate station id {}: replacing '{}' with later record",
                    previous.id, previous.name
                );
            }
        }

        stats.stations_loaded = registry.stations.len();
        stats.load_duration = start_time.elapsed();

        info!("Station registry built: {}", stats.summary());

        (registry, stats)
    }

    /// Get station metadata by identifier (O(1) lookup)
    pub fn get_station(&self, station_id: &str) -> Option<&Station> {
        self.stations.get(station_id)
    }

    /// Check if a station exists in the registry
    pub fn contains_station(&self, station_id: &str) -> bool {
        self.stations.contains_key(station_id)
    }

    /// Get the total number of stations in the registry
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
