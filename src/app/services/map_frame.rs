//! Observation map frame for one instant
//!
//! Station markers are sized and shaded by accumulated rainfall and carry a
//! wind arrow whose length follows the maximum wind speed. Scale domains are
//! taken over the whole typhoon subset so markers stay comparable while
//! scrubbing through time.

use crate::app::models::Observation;
use crate::app::services::observation_join::ObservationSet;
use crate::app::services::track_aggregator::MercatorProjection;
use crate::constants::frame_scales::{RAIN_OPACITY, RAIN_RADIUS, WIND_ARROW_LENGTH};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Linear map of `[0, max]` onto `range`; a zero domain maps to the range midpoint
fn linear_scale(value: f64, max: f64, range: (f64, f64)) -> f64 {
    let t = if max == 0.0 { 0.5 } else { value / max };
    range.0 + t * (range.1 - range.0)
}

/// Square-root map of `[0, max]` onto `range`
fn sqrt_scale(value: f64, max: f64, range: (f64, f64)) -> f64 {
    linear_scale(value.sqrt(), max.sqrt(), range)
}

/// Domains of the frame's scales
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FrameScales {
    pub max_precipitation: f64,
    pub max_wind_speed: f64,
}

impl FrameScales {
    /// Maxima over a set of observations; NaN values are ignored
    pub fn from_observations<'a>(observations: impl IntoIterator<Item = &'a Observation>) -> Self {
        observations
            .into_iter()
            .fold(Self::default(), |scales, o| Self {
                max_precipitation: scales.max_precipitation.max(o.acc_precipitation),
                max_wind_speed: scales.max_wind_speed.max(o.max_wind_speed),
            })
    }

    pub fn rain_radius(&self, precipitation: f64) -> f64 {
        sqrt_scale(precipitation, self.max_precipitation, RAIN_RADIUS)
    }

    pub fn rain_opacity(&self, precipitation: f64) -> f64 {
        linear_scale(precipitation, self.max_precipitation, RAIN_OPACITY)
    }

    pub fn arrow_length(&self, wind_speed: f64) -> f64 {
        linear_scale(wind_speed, self.max_wind_speed, WIND_ARROW_LENGTH)
    }
}

/// One station drawn on the observation map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMarker {
    pub station_id: String,
    pub station_name: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
    pub acc_precipitation: f64,
    pub max_wind_speed: f64,
    pub max_wind_direction: f64,
    /// Tip of the wind arrow; direction is measured counter-clockwise from east
    pub arrow_end: (f64, f64),
}

/// Everything the observation map shows at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFrame {
    pub typhoon_name: String,
    pub instant: NaiveDateTime,
    pub scales: FrameScales,
    pub markers: Vec<StationMarker>,
    /// Observations at this instant with no known station position
    pub unplaced: usize,
}

impl MapFrame {
    pub fn build(
        data: &ObservationSet,
        typhoon_name: &str,
        instant: NaiveDateTime,
        projection: &MercatorProjection,
    ) -> Self {
        let scales = FrameScales::from_observations(data.for_typhoon(typhoon_name));
        let at_instant = data.at_instant(typhoon_name, instant);

        let markers: Vec<StationMarker> = at_instant
            .iter()
            .filter_map(|o| {
                let site = o.site.as_ref()?;
                let (x, y) = projection.project(site.longitude, site.latitude);
                let length = scales.arrow_length(o.max_wind_speed);
                let direction = o.max_wind_direction.to_radians();
                Some(StationMarker {
                    station_id: o.station_id.clone(),
                    station_name: site.station_name.clone(),
                    x,
                    y,
                    radius: scales.rain_radius(o.acc_precipitation),
                    opacity: scales.rain_opacity(o.acc_precipitation),
                    acc_precipitation: o.acc_precipitation,
                    max_wind_speed: o.max_wind_speed,
                    max_wind_direction: o.max_wind_direction,
                    arrow_end: (x + length * direction.cos(), y - length * direction.sin()),
                })
            })
            .collect();

        Self {
            typhoon_name: typhoon_name.to_string(),
            instant,
            scales,
            unplaced: at_instant.len() - markers.len(),
            markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::ObservationSite;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn create_observation(station: &str, hour: u32, rain: f64, wind: f64, dir: f64, placed: bool) -> Observation {
        Observation {
            typhoon_id: "T1".to_string(),
            typhoon_name: "NOUL".to_string(),
            station_id: station.to_string(),
            site: placed.then(|| ObservationSite {
                station_name: format!("站{}", station),
                latitude: 24.0,
                longitude: 123.0,
                county: "臺北市".to_string(),
            }),
            acc_precipitation: rain,
            max_wind_speed: wind,
            max_wind_direction: dir,
            timestamp: at(hour),
        }
    }

    fn projection() -> MercatorProjection {
        MercatorProjection::new((123.0, 24.0), 5500.0, (480.0, 250.0))
    }

    #[test]
    fn test_scales() {
        let scales = FrameScales {
            max_precipitation: 100.0,
            max_wind_speed: 20.0,
        };

        assert_eq!(scales.rain_radius(0.0), 2.0);
        assert_eq!(scales.rain_radius(100.0), 20.0);
        assert!((scales.rain_radius(25.0) - 11.0).abs() < 1e-9);
        assert!((scales.rain_opacity(50.0) - 0.575).abs() < 1e-9);
        assert_eq!(scales.arrow_length(10.0), 50.0);
    }

    #[test]
    fn test_zero_domain_maps_to_midpoint() {
        let scales = FrameScales::default();
        assert_eq!(scales.arrow_length(0.0), 50.0);
        assert_eq!(scales.rain_radius(0.0), 11.0);
    }

    #[test]
    fn test_frame_uses_typhoon_wide_maxima() {
        let data = ObservationSet::new(vec![
            create_observation("466920", 0, 10.0, 5.0, 0.0, true),
            create_observation("466920", 1, 40.0, 10.0, 90.0, true),
        ]);

        let frame = MapFrame::build(&data, "NOUL", at(0), &projection());

        assert_eq!(frame.scales.max_precipitation, 40.0);
        assert_eq!(frame.markers.len(), 1);
        let marker = &frame.markers[0];
        assert!((marker.x - 480.0).abs() < 1e-9);
        assert!((marker.y - 250.0).abs() < 1e-9);
        assert!((marker.radius - 11.0).abs() < 1e-9);
        // Due east, half length
        assert!((marker.arrow_end.0 - 530.0).abs() < 1e-9);
        assert!((marker.arrow_end.1 - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_arrow_points_north_for_ninety_degrees() {
        let data = ObservationSet::new(vec![create_observation("466920", 0, 1.0, 10.0, 90.0, true)]);

        let frame = MapFrame::build(&data, "NOUL", at(0), &projection());
        let marker = &frame.markers[0];

        assert!((marker.arrow_end.0 - 480.0).abs() < 1e-9);
        assert!((marker.arrow_end.1 - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_unplaced_observations_skipped() {
        let data = ObservationSet::new(vec![
            create_observation("466920", 0, 1.0, 1.0, 0.0, true),
            create_observation("C0X999", 0, 1.0, 1.0, 0.0, false),
        ]);

        let frame = MapFrame::build(&data, "NOUL", at(0), &projection());

        assert_eq!(frame.markers.len(), 1);
        assert_eq!(frame.unplaced, 1);
    }
}
