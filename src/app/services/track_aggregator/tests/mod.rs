//! Tests for typhoon track aggregation


use crate::app::models::TrackRecord;
use crate::app::services::track_aggregator::TrackAggregator;
use crate::config::TrackPlotConfig;

/// Create a track record at `day`/`hour` of October 2024
pub fn create_track_record(typhoon_id: &str, day: u32, hour: u32, lon: f64, lat: f64) -> TrackRecord {
    TrackRecord {
        typhoon_id: typhoon_id.to_string(),
        year: "2024".to_string(),
        month: "10".to_string(),
        day: day.to_string(),
        hour: hour.to_string(),
        longitude: lon.to_string(),
        latitude: lat.to_string(),
        wind_speed: "45".to_string(),
        pressure: "940".to_string(),
        level: "強烈颱風".to_string(),
    }
}

/// Aggregator with the default 1000x800 plot and 100px margins
pub fn create_test_aggregator() -> TrackAggregator {
    TrackAggregator::from_config(&TrackPlotConfig::default())
}
