//! Per-city drill-down across the active typhoons

use crate::app::models::{City, CityObservation};
use crate::app::services::track_aggregator::TyphoonSet;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Padding applied to chart y-axis maxima
const AXIS_HEADROOM: f64 = 1.1;

/// Rows of one city's station inside one typhoon's window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TyphoonCityObservations {
    pub typhoon_id: String,
    /// First retained fix of the typhoon
    pub start: NaiveDateTime,
    /// Last retained fix of the typhoon
    pub end: NaiveDateTime,
    pub rows: Vec<CityObservation>,
}

impl TyphoonCityObservations {
    /// Fractional days from the typhoon's first fix, one per row
    pub fn day_offsets(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| (row.time - self.start).num_milliseconds() as f64 / 86_400_000.0)
            .collect()
    }

    /// Upper bound of the precipitation axis; a dry window still gets a unit axis
    pub fn precipitation_axis_max(&self) -> f64 {
        let max = self
            .rows
            .iter()
            .map(|row| row.precipitation_mm)
            .fold(0.0, f64::max);
        let max = if max == 0.0 { 1.0 } else { max };
        max * AXIS_HEADROOM
    }

    /// Upper bound of the wind speed axis
    pub fn wind_axis_max(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.wind_speed_ms)
            .fold(0.0, f64::max)
            * AXIS_HEADROOM
    }
}

/// Rows of one station whose time lies in `[start, end]`
pub fn filter_for_station_window<'a>(
    observations: &'a [CityObservation],
    station: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<&'a CityObservation> {
    let station = station.trim();
    observations
        .iter()
        .filter(|row| row.station == station && row.time >= start && row.time <= end)
        .collect()
}

/// Weather rows of a city for every active typhoon that has a trajectory
///
/// `trajectories` is the list the track map currently shows, brushed or
/// not. Typhoons with no rows in their window are left out; when none has
/// any, the city has no data to show.
pub fn city_details(
    city: &City,
    observations: &[CityObservation],
    trajectories: &TyphoonSet,
    active: &HashSet<String>,
) -> Result<Vec<TyphoonCityObservations>> {
    let mut details = Vec::new();

    for typhoon in trajectories.active(active) {
        let (Some(start), Some(end)) = (typhoon.first_time(), typhoon.last_time()) else {
            continue;
        };

        let rows: Vec<CityObservation> =
            filter_for_station_window(observations, &city.station_id, start, end)
                .into_iter()
                .cloned()
                .collect();

        if rows.is_empty() {
            debug!(
                "No rows for city {} within typhoon {} ({} to {})",
                city.name, typhoon.id, start, end
            );
            continue;
        }

        details.push(TyphoonCityObservations {
            typhoon_id: typhoon.id.clone(),
            start,
            end,
            rows,
        });
    }

    if details.is_empty() {
        return Err(Error::no_city_data(&city.name));
    }
    Ok(details)
}
