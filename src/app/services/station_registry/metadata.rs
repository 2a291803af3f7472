//! Station registry load statistics

/// Statistics about building the station registry
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of feed records read
    pub records_read: usize,

    /// Number of distinct stations in the index
    pub stations_loaded: usize,

    /// Records that replaced an earlier record with the same id
    pub duplicates_replaced: usize,

    /// Records whose latitude or longitude did not parse
    pub non_numeric_coordinates: usize,

    /// Time taken to build the index
    pub load_duration: std::time::Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of records that were superseded by a later duplicate
    pub fn duplicate_rate(&self) -> f64 {
        if self.records_read == 0 {
            0.0
        } else {
            (self.duplicates_replaced as f64 / self.records_read as f64) * 100.0
        }
    }

    /// Get a summary string of the build
    pub fn summary(&self) -> String {
        format!(
            "Read {} records, indexed {} stations ({} duplicates replaced, {:.1}%; {} with non-numeric coordinates) in {:.3}s",
            self.records_read,
            self.stations_loaded,
            self.duplicates_replaced,
            self.duplicate_rate(),
            self.non_numeric_coordinates,
            self.load_duration.as_secs_f64()
        )
    }
}
