//! Tests for view selection state


use crate::app::models::{Observation, TrackPoint, Typhoon};
use crate::app::services::observation_join::ObservationSet;
use crate::app::services::track_aggregator::TyphoonSet;
use chrono::{NaiveDate, NaiveDateTime};

/// 2024-10-`day` at `hour`:00
pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn create_observation(typhoon_name: &str, station: &str, timestamp: NaiveDateTime) -> Observation {
    Observation {
        typhoon_id: format!("ID-{}", typhoon_name),
        typhoon_name: typhoon_name.to_string(),
        station_id: station.to_string(),
        site: None,
        acc_precipitation: 1.0,
        max_wind_speed: 2.0,
        max_wind_direction: 0.0,
        timestamp,
    }
}

/// NOUL observed on Oct 1 at 00, 03, 06; KRATHON on Oct 2 at 00 and 12
pub fn create_test_observations() -> ObservationSet {
    ObservationSet::new(vec![
        create_observation("NOUL", "466880", at(1, 0)),
        create_observation("NOUL", "466920", at(1, 0)),
        create_observation("NOUL", "466880", at(1, 3)),
        create_observation("KRATHON", "466880", at(2, 12)),
        create_observation("NOUL", "466880", at(1, 6)),
        create_observation("KRATHON", "466880", at(2, 0)),
    ])
}

fn create_typhoon(id: &str, times: &[NaiveDateTime]) -> Typhoon {
    let points = times
        .iter()
        .map(|&time| TrackPoint {
            typhoon_id: id.to_string(),
            time,
            longitude: 121.0,
            latitude: 24.0,
            wind_speed: 40.0,
            pressure: 950.0,
            level: "颱風".to_string(),
        })
        .collect();
    Typhoon::new(id, points)
}

/// T1 spans 3 days, T2 spans 1 day, T3 has no retained fix
pub fn create_test_typhoons() -> TyphoonSet {
    TyphoonSet::new(vec![
        create_typhoon("T1", &[at(1, 0), at(2, 0), at(4, 0)]),
        create_typhoon("T2", &[at(10, 0), at(10, 12), at(11, 0)]),
        create_typhoon("T3", &[]),
    ])
}
