//! Join engine implementation

use super::stats::{JoinResult, JoinStats};
use super::ObservationSet;
use crate::app::models::{Observation, ObservationSite, RainRecord, WindRecord};
use crate::app::services::field_parsers::{
    normalize_station_id, parse_numeric_or_nan, parse_numeric_or_zero, parse_observation_time,
};
use crate::app::services::station_registry::StationRegistry;
use crate::config::JoinConfig;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Joins rainfall and wind records into observations
#[derive(Debug, Clone)]
pub struct ObservationJoiner {
    registry: Arc<StationRegistry>,
    config: JoinConfig,
}

impl ObservationJoiner {
    pub fn new(registry: Arc<StationRegistry>, config: JoinConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Join every rainfall record with its wind record
    ///
    /// The output is sorted ascending by timestamp; records with equal
    /// timestamps keep their rainfall-file order.
    pub fn join(&self, rain: &[RainRecord], wind: &[WindRecord]) -> JoinResult {
        let mut stats = JoinStats::new();
        stats.rain_records = rain.len();
        stats.wind_records = wind.len();

        let wind_index = index_wind_records(wind);
        let mut observations = Vec::with_capacity(rain.len());

        for record in rain {
            let station_id = normalize_station_id(&record.station, self.config.station_id_prefix_len);

            let wind_match = wind_index
                .get(&(station_id.as_str(), record.acc_end_time.as_str()))
                .map(|&i| &wind[i]);

            let (max_wind_speed, max_wind_direction, time_text) = match wind_match {
                Some(w) => {
                    stats.matched += 1;
                    (
                        parse_numeric_or_zero(&w.max_wind_speed),
                        parse_numeric_or_zero(&w.max_wind_direction),
                        w.obs_time.as_str(),
                    )
                }
                None => {
                    stats.unmatched_wind += 1;
                    warn!(
                        "No wind data found for station {} at time {}",
                        station_id, record.acc_end_time
                    );
                    (0.0, 0.0, record.acc_end_time.as_str())
                }
            };

            let Some(timestamp) = parse_observation_time(time_text) else {
                stats.unparseable_timestamps += 1;
                debug!(
                    "Dropping rain record for station {}: unparseable timestamp '{}'",
                    station_id, time_text
                );
                continue;
            };

            let site = self.registry.get_station(&station_id).map(ObservationSite::from);
            if site.is_none() {
                stats.unresolved_stations += 1;
                debug!("Station {} not found in registry", station_id);
            }

            observations.push(Observation {
                typhoon_id: record.typhoon_id.trim().to_string(),
                typhoon_name: record.typhoon_name.trim().to_string(),
                station_id,
                site,
                acc_precipitation: parse_numeric_or_nan(&record.acc_precipitation),
                max_wind_speed,
                max_wind_direction,
                timestamp,
            });
        }

        let observations = ObservationSet::new(observations);
        stats.observations = observations.len();

        info!("{}", stats.summary());

        JoinResult {
            observations,
            stats,
        }
    }
}

/// Index wind records by (station, timestamp text), keeping the first occurrence
fn index_wind_records(wind: &[WindRecord]) -> HashMap<(&str, &str), usize> {
    let mut index = HashMap::with_capacity(wind.len());
    for (i, record) in wind.iter().enumerate() {
        if let Entry::Vacant(e) = index.entry((record.station.trim(), record.obs_time.as_str())) {
            e.insert(i);
        }
    }
    index
}
