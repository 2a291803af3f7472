//! Tests for the rainfall/wind join engine

pub mod engine_tests;

use crate::app::models::{RainRecord, StationRecord, WindRecord};
use crate::app::services::observation_join::ObservationJoiner;
use crate::app::services::station_registry::StationRegistry;
use crate::config::JoinConfig;
use std::sync::Arc;

pub fn create_rain_record(
    station: &str,
    typhoon_id: &str,
    typhoon_name: &str,
    end_time: &str,
    precipitation: &str,
) -> RainRecord {
    RainRecord {
        station: station.to_string(),
        typhoon_id: typhoon_id.to_string(),
        typhoon_name: typhoon_name.to_string(),
        acc_end_time: end_time.to_string(),
        acc_precipitation: precipitation.to_string(),
    }
}

pub fn create_wind_record(station: &str, time: &str, speed: &str, direction: &str) -> WindRecord {
    WindRecord {
        station: station.to_string(),
        obs_time: time.to_string(),
        max_wind_speed: speed.to_string(),
        max_wind_direction: direction.to_string(),
    }
}

/// Registry holding Banqiao (466880) and Taipei (466920)
pub fn create_test_registry() -> Arc<StationRegistry> {
    let records = vec![
        StationRecord {
            station_id: "466880".to_string(),
            station_name: "板橋".to_string(),
            station_latitude: "24.9976".to_string(),
            station_longitude: "121.4420".to_string(),
            station_altitude: "9.7".to_string(),
            county_name: "新北市".to_string(),
        },
        StationRecord {
            station_id: "466920".to_string(),
            station_name: "臺北".to_string(),
            station_latitude: "25.0377".to_string(),
            station_longitude: "121.5149".to_string(),
            station_altitude: "6.3".to_string(),
            county_name: "臺北市".to_string(),
        },
    ];
    Arc::new(StationRegistry::from_records(&records).0)
}

pub fn create_test_joiner() -> ObservationJoiner {
    ObservationJoiner::new(create_test_registry(), JoinConfig::default())
}
