//! Shared test utilities and fixtures for station registry tests

use crate::app::models::StationRecord;


/// Create a raw feed record with the given fields
pub fn create_station_record(
    id: &str,
    name: &str,
    lat: &str,
    lon: &str,
    county: &str,
) -> StationRecord {
    StationRecord {
        station_id: id.to_string(),
        station_name: name.to_string(),
        station_latitude: lat.to_string(),
        station_longitude: lon.to_string(),
        station_altitude: "10.0".to_string(),
        county_name: county.to_string(),
    }
}

/// A small feed in the nested open-data layout
pub fn create_station_feed_json() -> String {
    r#"{
  "cwaopendata": {
    "resources": {
      "resource": {
        "data": {
          "stationsStatus": {
            "station": [
              {
                "StationID": "466880",
                "StationName": "板橋",
                "StationLatitude": "24.9976",
                "StationLongitude": "121.4420",
                "StationAltitude": "9.7",
                "CountyName": "新北市"
              },
              {
                "StationID": "466920",
                "StationName": "臺北",
                "StationLatitude": 25.0377,
                "StationLongitude": 121.5149,
                "StationAltitude": 6.3,
                "CountyName": "臺北市"
              }
            ]
          }
        }
      }
    }
  }
}"#
    .to_string()
}
