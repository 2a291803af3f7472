//! Track view: active typhoons and the brushed time range

use super::view_state::ViewController;
use crate::app::models::{BrushRange, City, CityObservation, TrackInputs};
use crate::app::services::city_filter::{
    CityLandmark, CleaningStats, TyphoonCityObservations, city_details, clean_combined_records,
    parse_city_record, project_cities,
};
use crate::app::services::track_aggregator::{TrackAggregator, TrackStats, TyphoonSet};
use crate::config::{CheckboxDefault, Config, SelectionConfig};
use crate::constants::DEFAULT_TIME_SPAN_DAYS;
use crate::{Error, Result};
use chrono::Duration;
use std::collections::HashSet;
use tracing::debug;

/// User interaction on the track view
#[derive(Debug, Clone, PartialEq)]
pub enum TrackEvent {
    /// Flip one typhoon's checkbox
    Toggle(String),
    SelectAll,
    SelectNone,
    /// Drag a range on the timeline, in offsets from each typhoon's first fix
    Brush(BrushRange),
    ClearBrush,
}

/// Active typhoons, the full timeline span and an optional brush
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSelection {
    pub active: HashSet<String>,
    pub brush: Option<BrushRange>,
    /// Longest first-to-last span of the active typhoons
    pub span: Duration,
}

/// Full span for an active set, the configured default when nothing qualifies
fn active_span(typhoons: &TyphoonSet, active: &HashSet<String>, config: &SelectionConfig) -> Duration {
    typhoons
        .max_active_span(active)
        .or_else(|| Duration::try_days(config.default_span_days))
        .unwrap_or_else(|| Duration::days(DEFAULT_TIME_SPAN_DAYS))
}

impl TrackSelection {
    pub fn initial(typhoons: &TyphoonSet, config: &SelectionConfig) -> Self {
        let active: HashSet<String> = match config.checkbox_default {
            CheckboxDefault::AllOff => HashSet::new(),
            CheckboxDefault::AllOn => typhoons.ids().into_iter().map(String::from).collect(),
        };
        Self {
            span: active_span(typhoons, &active, config),
            active,
            brush: None,
        }
    }

    /// Selection after a change of the active set
    ///
    /// The span is recomputed. An existing brush survives unless nothing is
    /// left active, in which case the timeline returns to its full span.
    fn with_active(&self, active: HashSet<String>, typhoons: &TyphoonSet, config: &SelectionConfig) -> Self {
        let brush = if active.is_empty() { None } else { self.brush };
        Self {
            span: active_span(typhoons, &active, config),
            active,
            brush,
        }
    }

    pub fn apply(&self, event: &TrackEvent, typhoons: &TyphoonSet, config: &SelectionConfig) -> Result<Self> {
        match event {
            TrackEvent::Toggle(id) => {
                if typhoons.get(id).is_none() {
                    return Err(Error::unknown_typhoon(id));
                }
                let mut active = self.active.clone();
                if !active.remove(id) {
                    active.insert(id.clone());
                }
                debug!("Toggled typhoon {}: {} active", id, active.len());
                Ok(self.with_active(active, typhoons, config))
            }
            TrackEvent::SelectAll => {
                let active = typhoons.ids().into_iter().map(String::from).collect();
                Ok(self.with_active(active, typhoons, config))
            }
            TrackEvent::SelectNone => Ok(self.with_active(HashSet::new(), typhoons, config)),
            TrackEvent::Brush(range) => Ok(Self {
                brush: Some(*range),
                ..self.clone()
            }),
            TrackEvent::ClearBrush => Ok(Self {
                brush: None,
                ..self.clone()
            }),
        }
    }

    pub fn is_active(&self, typhoon_id: &str) -> bool {
        self.active.contains(typhoon_id)
    }

    pub fn is_brushed(&self) -> bool {
        self.brush.is_some()
    }

    /// Range the timeline axis shows: the brush, or zero to the full span
    pub fn effective_range(&self) -> BrushRange {
        self.brush
            .unwrap_or_else(|| BrushRange::new(Duration::zero(), self.span))
    }

    /// Span in fractional days
    pub fn span_days(&self) -> f64 {
        self.span.num_milliseconds() as f64 / 86_400_000.0
    }

    /// Trajectories the map shows under this selection
    pub fn visible(&self, typhoons: &TyphoonSet) -> TyphoonSet {
        typhoons.visible(&self.active, self.brush.as_ref())
    }
}

/// Loaded track view
#[derive(Debug, Clone)]
pub struct TrackView {
    pub typhoons: TyphoonSet,
    pub cities: Vec<City>,
    pub landmarks: Vec<CityLandmark>,
    pub city_observations: Vec<CityObservation>,
    pub selection: TrackSelection,
    pub track_stats: TrackStats,
    pub cleaning_stats: CleaningStats,
    config: SelectionConfig,
}

impl TrackView {
    /// Build the view from its complete raw inputs
    pub fn build(inputs: &TrackInputs, config: &Config) -> Self {
        let aggregator = TrackAggregator::from_config(&config.plot.track);
        let tracks = aggregator.aggregate(&inputs.tracks);

        let cities: Vec<City> = inputs.cities.iter().map(parse_city_record).collect();
        let landmarks = project_cities(&cities, aggregator.projection());

        let cleaned = clean_combined_records(&inputs.combined, &config.cleaning);
        let selection = TrackSelection::initial(&tracks.typhoons, &config.selection);

        Self {
            typhoons: tracks.typhoons,
            cities,
            landmarks,
            city_observations: cleaned.observations,
            selection,
            track_stats: tracks.stats,
            cleaning_stats: cleaned.stats,
            config: config.selection.clone(),
        }
    }

    pub fn visible(&self) -> TyphoonSet {
        self.selection.visible(&self.typhoons)
    }

    pub fn find_city(&self, name: &str) -> Option<&City> {
        let name = name.trim();
        self.cities.iter().find(|city| city.name == name)
    }

    /// Weather rows of a city for the active, possibly brushed, typhoons
    pub fn city_details(&self, city_name: &str) -> Result<Vec<TyphoonCityObservations>> {
        let city = self
            .find_city(city_name)
            .ok_or_else(|| Error::data_validation(format!("Unknown city: {}", city_name)))?;
        city_details(
            city,
            &self.city_observations,
            &self.visible(),
            &self.selection.active,
        )
    }
}

impl ViewController for TrackView {
    type Event = TrackEvent;

    fn handle(&mut self, event: TrackEvent) -> Result<()> {
        self.selection = self.selection.apply(&event, &self.typhoons, &self.config)?;
        Ok(())
    }
}
