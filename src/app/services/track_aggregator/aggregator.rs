//! Track aggregation implementation

use super::TyphoonSet;
use super::projection::{MercatorProjection, PlotBounds};
use crate::app::models::{TrackPoint, TrackRecord, Typhoon};
use crate::app::services::field_parsers::{compose_track_time, parse_numeric_or_nan};
use crate::config::TrackPlotConfig;
use std::collections::HashMap;
use tracing::{debug, info};

/// Counters collected while aggregating tracks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackStats {
    /// Track records read
    pub records_read: usize,
    /// Fixes retained inside the plot
    pub points_kept: usize,
    /// Fixes projected outside the plot margins
    pub out_of_bounds: usize,
    /// Fixes whose date/time fields do not form a valid time
    pub unparseable_times: usize,
    /// Distinct typhoons seen
    pub typhoons: usize,
    /// Typhoons left with no retained fix
    pub empty_typhoons: usize,
}

impl TrackStats {
    pub fn summary(&self) -> String {
        format!(
            "Track Summary: {} fixes -> {} typhoons | Kept: {} | Out of bounds: {} | \
             Bad times: {} | Empty typhoons: {}",
            self.records_read,
            self.typhoons,
            self.points_kept,
            self.out_of_bounds,
            self.unparseable_times,
            self.empty_typhoons
        )
    }
}

/// Output of one aggregation run
#[derive(Debug, Clone)]
pub struct TrackResult {
    pub typhoons: TyphoonSet,
    pub stats: TrackStats,
}

/// Groups track fixes into per-typhoon trajectories clipped to the plot
#[derive(Debug, Clone)]
pub struct TrackAggregator {
    projection: MercatorProjection,
    bounds: PlotBounds,
}

impl TrackAggregator {
    pub fn new(projection: MercatorProjection, bounds: PlotBounds) -> Self {
        Self { projection, bounds }
    }

    pub fn from_config(config: &TrackPlotConfig) -> Self {
        Self::new(
            MercatorProjection::from_config(&config.projection, config.translate()),
            PlotBounds::from_config(config),
        )
    }

    pub fn projection(&self) -> &MercatorProjection {
        &self.projection
    }

    /// True when a fix at this position is drawn on the track map
    pub fn is_visible(&self, longitude: f64, latitude: f64) -> bool {
        let (x, y) = self.projection.project(longitude, latitude);
        self.bounds.contains(x, y)
    }

    pub fn aggregate(&self, records: &[TrackRecord]) -> TrackResult {
        let mut stats = TrackStats {
            records_read: records.len(),
            ..TrackStats::default()
        };
        let mut typhoons: Vec<Typhoon> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in records {
            let typhoon_id = record.typhoon_id.trim();
            let slot = *positions.entry(typhoon_id.to_string()).or_insert_with(|| {
                typhoons.push(Typhoon::new(typhoon_id, Vec::new()));
                typhoons.len() - 1
            });

            let Some(time) =
                compose_track_time(&record.year, &record.month, &record.day, &record.hour)
            else {
                stats.unparseable_times += 1;
                debug!(
                    "Dropping fix of typhoon {}: invalid time {}/{}/{} {}h",
                    typhoon_id, record.year, record.month, record.day, record.hour
                );
                continue;
            };

            let longitude = parse_numeric_or_nan(&record.longitude);
            let latitude = parse_numeric_or_nan(&record.latitude);
            if !self.is_visible(longitude, latitude) {
                stats.out_of_bounds += 1;
                continue;
            }

            typhoons[slot].points.push(TrackPoint {
                typhoon_id: typhoon_id.to_string(),
                time,
                longitude,
                latitude,
                wind_speed: parse_numeric_or_nan(&record.wind_speed),
                pressure: parse_numeric_or_nan(&record.pressure),
                level: record.level.trim().to_string(),
            });
            stats.points_kept += 1;
        }

        for typhoon in &mut typhoons {
            typhoon.points.sort_by_key(|p| p.time);
        }

        stats.typhoons = typhoons.len();
        stats.empty_typhoons = typhoons.iter().filter(|t| t.is_empty()).count();

        info!("{}", stats.summary());

        TrackResult {
            typhoons: TyphoonSet::new(typhoons),
            stats,
        }
    }
}
