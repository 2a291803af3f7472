//! Station record parsing from the metadata feed
//!
//! The feed is a JSON document that nests the station list under
//! `cwaopendata.resources.resource.data.stationsStatus.station`. Numeric
//! fields arrive as text and are parsed leniently.

use crate::app::models::{Station, StationRecord};
use crate::app::services::field_parsers::parse_numeric_or_nan;
use crate::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StationFeed {
    cwaopendata: OpenData,
}

#[derive(Debug, Deserialize)]
struct OpenData {
    resources: Resources,
}

#[derive(Debug, Deserialize)]
struct Resources {
    resource: Resource,
}

#[derive(Debug, Deserialize)]
struct Resource {
    data: ResourceData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceData {
    stations_status: StationsStatus,
}

#[derive(Debug, Deserialize)]
struct StationsStatus {
    #[serde(default)]
    station: Vec<StationRecord>,
}

/// Parse the station metadata feed into raw station records
///
/// A bare JSON array of station records is accepted as well.
pub fn parse_station_feed(json: &str, file_name: &str) -> Result<Vec<StationRecord>> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| Error::json_parsing(file_name, "Invalid JSON document", e))?;

    if value.is_array() {
        return serde_json::from_value(value)
            .map_err(|e| Error::json_parsing(file_name, "Invalid station list", e));
    }

    let feed: StationFeed = serde_json::from_value(value).map_err(|e| {
        Error::json_parsing(
            file_name,
            "Expected cwaopendata.resources.resource.data.stationsStatus.station",
            e,
        )
    })?;

    Ok(feed.cwaopendata.resources.resource.data.stations_status.station)
}

/// Convert one raw feed record into a station
pub fn parse_station_record(record: &StationRecord) -> Station {
    Station {
        id: record.station_id.trim().to_string(),
        name: record.station_name.trim().to_string(),
        latitude: parse_numeric_or_nan(&record.station_latitude),
        longitude: parse_numeric_or_nan(&record.station_longitude),
        altitude: parse_numeric_or_nan(&record.station_altitude),
        county: record.county_name.trim().to_string(),
    }
}
