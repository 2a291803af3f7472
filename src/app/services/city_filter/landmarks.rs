//! City landmarks on the track map

use crate::app::models::{City, CityRecord};
use crate::app::services::field_parsers::parse_numeric_or_nan;
use crate::app::services::track_aggregator::MercatorProjection;
use serde::Serialize;

/// A city with its projected plot position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityLandmark {
    pub city: City,
    pub x: f64,
    pub y: f64,
}

pub fn parse_city_record(record: &CityRecord) -> City {
    City {
        name: record.city.trim().to_string(),
        longitude: parse_numeric_or_nan(&record.longitude),
        latitude: parse_numeric_or_nan(&record.latitude),
        station_id: record.station.trim().to_string(),
    }
}

/// Project every city; cities with non-numeric coordinates are skipped
pub fn project_cities(cities: &[City], projection: &MercatorProjection) -> Vec<CityLandmark> {
    cities
        .iter()
        .filter(|city| city.longitude.is_finite() && city.latitude.is_finite())
        .map(|city| {
            let (x, y) = projection.project(city.longitude, city.latitude);
            CityLandmark {
                city: city.clone(),
                x,
                y,
            }
        })
        .collect()
}
