//! Join statistics and result structures

use super::ObservationSet;

/// Counters collected while joining rainfall with wind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinStats {
    /// Rainfall records read
    pub rain_records: usize,
    /// Wind records indexed
    pub wind_records: usize,
    /// Rainfall records that found their wind record
    pub matched: usize,
    /// Rainfall records with no wind record at the same station and time
    pub unmatched_wind: usize,
    /// Observations whose station is not in the registry
    pub unresolved_stations: usize,
    /// Rainfall records dropped because their timestamp did not parse
    pub unparseable_timestamps: usize,
    /// Observations emitted
    pub observations: usize,
}

impl JoinStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of rainfall records that found a wind match
    pub fn match_rate(&self) -> f64 {
        if self.rain_records == 0 {
            0.0
        } else {
            (self.matched as f64 / self.rain_records as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Join Summary: {} rain x {} wind -> {} observations | \
             Matched: {:.1}% | Unmatched wind: {} | Unresolved stations: {} | \
             Bad timestamps: {}",
            self.rain_records,
            self.wind_records,
            self.observations,
            self.match_rate(),
            self.unmatched_wind,
            self.unresolved_stations,
            self.unparseable_timestamps
        )
    }
}

/// Output of one join run
#[derive(Debug, Clone)]
pub struct JoinResult {
    pub observations: ObservationSet,
    pub stats: JoinStats,
}

impl JoinResult {
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
