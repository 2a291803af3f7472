//! Tests for city observation cleaning and drill-down


use crate::app::models::{City, CityObservation, CombinedRecord, TrackPoint, Typhoon};
use crate::app::services::track_aggregator::TyphoonSet;
use chrono::{NaiveDate, NaiveDateTime};

pub fn create_combined_record(
    station: &str,
    date: &str,
    hour: &str,
    precipitation: &str,
    wind_speed: &str,
) -> CombinedRecord {
    CombinedRecord {
        station: station.to_string(),
        date: date.to_string(),
        hour: hour.to_string(),
        precipitation: precipitation.to_string(),
        wind_speed: wind_speed.to_string(),
    }
}

/// 2024-10-`day` at `hour`:00
pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn create_city_observation(station: &str, time: NaiveDateTime, precip: f64, wind: f64) -> CityObservation {
    CityObservation {
        station: station.to_string(),
        time,
        precipitation_mm: precip,
        wind_speed_ms: wind,
    }
}

pub fn create_city(name: &str, station_id: &str) -> City {
    City {
        name: name.to_string(),
        longitude: 121.5,
        latitude: 25.03,
        station_id: station_id.to_string(),
    }
}

/// Typhoon with one fix per given time
pub fn create_typhoon(id: &str, times: &[NaiveDateTime]) -> Typhoon {
    let points = times
        .iter()
        .map(|&time| TrackPoint {
            typhoon_id: id.to_string(),
            time,
            longitude: 121.0,
            latitude: 24.0,
            wind_speed: 40.0,
            pressure: 950.0,
            level: "中度颱風".to_string(),
        })
        .collect();
    Typhoon::new(id, points)
}

/// T1 covers Oct 1 00:00 to Oct 2 00:00, T2 covers Oct 5 00:00 to Oct 5 12:00
pub fn create_test_trajectories() -> TyphoonSet {
    TyphoonSet::new(vec![
        create_typhoon("T1", &[at(1, 0), at(1, 12), at(2, 0)]),
        create_typhoon("T2", &[at(5, 0), at(5, 12)]),
    ])
}
