//! Time-sorted observation collection and its derived views

use crate::app::models::Observation;
use chrono::NaiveDateTime;
use std::collections::HashSet;

/// Observations sorted ascending by timestamp
///
/// Built once per load and never mutated; every view is a fresh filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSet {
    observations: Vec<Observation>,
}

impl ObservationSet {
    /// Sort the observations (stable) and wrap them
    pub fn new(mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|o| o.timestamp);
        Self { observations }
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Distinct typhoon names in order of first appearance
    pub fn typhoon_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.observations
            .iter()
            .map(|o| o.typhoon_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn contains_typhoon(&self, typhoon_name: &str) -> bool {
        self.observations
            .iter()
            .any(|o| o.typhoon_name == typhoon_name)
    }

    /// Observations of one typhoon, still time-sorted
    pub fn for_typhoon(&self, typhoon_name: &str) -> Vec<&Observation> {
        self.observations
            .iter()
            .filter(|o| o.typhoon_name == typhoon_name)
            .collect()
    }

    /// Observations of one typhoon taken exactly at `instant`
    pub fn at_instant(&self, typhoon_name: &str, instant: NaiveDateTime) -> Vec<&Observation> {
        self.observations
            .iter()
            .filter(|o| o.typhoon_name == typhoon_name && o.timestamp == instant)
            .collect()
    }

    /// Distinct timestamps of one typhoon, ascending
    pub fn timestamps_for(&self, typhoon_name: &str) -> Vec<NaiveDateTime> {
        let mut timestamps: Vec<NaiveDateTime> = self
            .observations
            .iter()
            .filter(|o| o.typhoon_name == typhoon_name)
            .map(|o| o.timestamp)
            .collect();
        timestamps.dedup();
        timestamps
    }

    /// True when adjacent timestamps never decrease
    pub fn is_sorted(&self) -> bool {
        self.observations
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
