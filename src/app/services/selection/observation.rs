//! Observation view: selected typhoon and scrub instant

use super::timeline::Timeline;
use super::view_state::ViewController;
use crate::app::models::{Observation, ObservationInputs};
use crate::app::services::map_frame::MapFrame;
use crate::app::services::observation_join::{JoinStats, ObservationJoiner, ObservationSet};
use crate::app::services::station_registry::{LoadStats, StationRegistry};
use crate::app::services::track_aggregator::MercatorProjection;
use crate::config::Config;
use crate::constants::OBSERVATION_PROJECTION_TRANSLATE;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::{debug, warn};

/// User interaction on the observation view
#[derive(Debug, Clone, PartialEq)]
pub enum ObservationEvent {
    /// Pick a typhoon from the menu
    SelectTyphoon(String),
    /// Drag the timeline handle to a raw instant
    ScrubTo(NaiveDateTime),
}

/// Selected typhoon and the instant the map shows
///
/// `selected_instant` is always one of the selected typhoon's observation
/// times, or `None` when that typhoon has no observations.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSelection {
    pub selected_typhoon: String,
    pub selected_instant: Option<NaiveDateTime>,
}

impl ObservationSelection {
    /// Opening selection; falls back to the first typhoon when the default is absent
    pub fn initial(data: &ObservationSet, default_typhoon: &str) -> Self {
        let name = if data.contains_typhoon(default_typhoon) {
            default_typhoon
        } else {
            match data.typhoon_names().first() {
                Some(&first) => {
                    warn!(
                        "Default typhoon {} not in the data, opening {} instead",
                        default_typhoon, first
                    );
                    first
                }
                None => default_typhoon,
            }
        };

        Self {
            selected_typhoon: name.to_string(),
            selected_instant: Timeline::for_typhoon(data, name).first(),
        }
    }

    /// Selection of a typhoon at its earliest observation
    pub fn for_typhoon(data: &ObservationSet, typhoon_name: &str) -> Result<Self> {
        if !data.contains_typhoon(typhoon_name) {
            return Err(Error::unknown_typhoon(typhoon_name));
        }
        Ok(Self {
            selected_typhoon: typhoon_name.to_string(),
            selected_instant: Timeline::for_typhoon(data, typhoon_name).first(),
        })
    }

    pub fn apply(&self, event: &ObservationEvent, data: &ObservationSet) -> Result<Self> {
        match event {
            ObservationEvent::SelectTyphoon(name) => Self::for_typhoon(data, name),
            ObservationEvent::ScrubTo(instant) => Ok(Self {
                selected_typhoon: self.selected_typhoon.clone(),
                selected_instant: self.timeline(data).snap(*instant),
            }),
        }
    }

    /// Re-anchor the selection after the data changed underneath it
    ///
    /// The typhoon is kept when still present and the instant is clamped to
    /// the nearest remaining observation time.
    pub fn reconcile(&self, data: &ObservationSet) -> Self {
        if !data.contains_typhoon(&self.selected_typhoon) {
            debug!(
                "Typhoon {} no longer present, resetting selection",
                self.selected_typhoon
            );
            return Self::initial(data, &self.selected_typhoon);
        }

        let timeline = self.timeline(data);
        let selected_instant = match self.selected_instant {
            Some(instant) => timeline.snap(instant),
            None => timeline.first(),
        };
        Self {
            selected_typhoon: self.selected_typhoon.clone(),
            selected_instant,
        }
    }

    pub fn timeline(&self, data: &ObservationSet) -> Timeline {
        Timeline::for_typhoon(data, &self.selected_typhoon)
    }

    /// Observations of the selected typhoon at the selected instant
    pub fn current_observations<'a>(&self, data: &'a ObservationSet) -> Vec<&'a Observation> {
        match self.selected_instant {
            Some(instant) => data.at_instant(&self.selected_typhoon, instant),
            None => Vec::new(),
        }
    }
}

/// Loaded observation view
#[derive(Debug, Clone)]
pub struct ObservationView {
    pub registry: Arc<StationRegistry>,
    pub data: ObservationSet,
    pub selection: ObservationSelection,
    pub station_stats: LoadStats,
    pub join_stats: JoinStats,
    projection: MercatorProjection,
}

impl ObservationView {
    /// Build the view from its complete raw inputs
    pub fn build(inputs: &ObservationInputs, config: &Config) -> Self {
        let (registry, station_stats) = StationRegistry::from_records(&inputs.stations);
        let registry = Arc::new(registry);

        let joiner = ObservationJoiner::new(Arc::clone(&registry), config.join.clone());
        let result = joiner.join(&inputs.rain, &inputs.wind);

        let selection =
            ObservationSelection::initial(&result.observations, &config.selection.default_typhoon);
        let projection = MercatorProjection::from_config(
            &config.plot.observation_projection,
            OBSERVATION_PROJECTION_TRANSLATE,
        );

        Self {
            registry,
            data: result.observations,
            selection,
            station_stats,
            join_stats: result.stats,
            projection,
        }
    }

    /// Typhoon menu entries in order of first appearance
    pub fn typhoon_menu(&self) -> Vec<&str> {
        self.data.typhoon_names()
    }

    pub fn timeline(&self) -> Timeline {
        self.selection.timeline(&self.data)
    }

    /// Map frame at the selected instant
    pub fn frame(&self) -> Option<MapFrame> {
        let instant = self.selection.selected_instant?;
        Some(MapFrame::build(
            &self.data,
            &self.selection.selected_typhoon,
            instant,
            &self.projection,
        ))
    }
}

impl ViewController for ObservationView {
    type Event = ObservationEvent;

    fn handle(&mut self, event: ObservationEvent) -> Result<()> {
        self.selection = self.selection.apply(&event, &self.data)?;
        Ok(())
    }
}
