//! Cleaning of combined hourly observation rows

use crate::app::models::{CityObservation, CombinedRecord};
use crate::app::services::field_parsers::{compose_combined_time, parse_leading_or_zero};
use crate::config::CleaningConfig;
use tracing::{debug, info};

/// Rows dropped while cleaning, by reason
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningStats {
    pub rows_read: usize,
    pub rows_kept: usize,
    /// Date or hour blank
    pub missing_fields: usize,
    /// Hour, precipitation or wind speed equal to a leaked header value
    pub sentinel_rows: usize,
    /// Date and hour present but not a valid time
    pub unparseable_times: usize,
}

impl CleaningStats {
    pub fn dropped(&self) -> usize {
        self.missing_fields + self.sentinel_rows + self.unparseable_times
    }

    pub fn summary(&self) -> String {
        format!(
            "Cleaning Summary: {} rows -> {} kept | Missing date/hour: {} | Sentinel: {} | Bad times: {}",
            self.rows_read,
            self.rows_kept,
            self.missing_fields,
            self.sentinel_rows,
            self.unparseable_times
        )
    }
}

/// Cleaned rows plus the counters collected on the way
#[derive(Debug, Clone)]
pub struct CleaningResult {
    pub observations: Vec<CityObservation>,
    pub stats: CleaningStats,
}

fn is_sentinel_row(record: &CombinedRecord, config: &CleaningConfig) -> bool {
    record.hour.trim() == config.hour_sentinel
        || record.precipitation.trim() == config.precipitation_sentinel
        || record.wind_speed.trim() == config.wind_speed_sentinel
}

/// Clean combined rows into city observations
///
/// Precipitation and wind speed read their leading number and fall back to
/// zero. Input order is kept.
pub fn clean_combined_records(records: &[CombinedRecord], config: &CleaningConfig) -> CleaningResult {
    let mut stats = CleaningStats {
        rows_read: records.len(),
        ..CleaningStats::default()
    };
    let mut observations = Vec::with_capacity(records.len());

    for record in records {
        if record.date.trim().is_empty() || record.hour.trim().is_empty() {
            stats.missing_fields += 1;
            continue;
        }

        if is_sentinel_row(record, config) {
            stats.sentinel_rows += 1;
            continue;
        }

        let Some(time) = compose_combined_time(&record.date, &record.hour) else {
            stats.unparseable_times += 1;
            debug!(
                "Dropping combined row of station {}: invalid time '{}' '{}'",
                record.station, record.date, record.hour
            );
            continue;
        };

        observations.push(CityObservation {
            station: record.station.trim().to_string(),
            time,
            precipitation_mm: parse_leading_or_zero(&record.precipitation),
            wind_speed_ms: parse_leading_or_zero(&record.wind_speed),
        });
    }

    stats.rows_kept = observations.len();
    info!("{}", stats.summary());

    CleaningResult {
        observations,
        stats,
    }
}
