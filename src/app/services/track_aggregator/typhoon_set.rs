//! Typhoon trajectories and their derived views

use crate::app::models::{BrushRange, Typhoon};
use chrono::Duration;
use std::collections::HashSet;

/// Typhoons in first-seen order, each track ascending by time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TyphoonSet {
    typhoons: Vec<Typhoon>,
}

impl TyphoonSet {
    pub fn new(typhoons: Vec<Typhoon>) -> Self {
        Self { typhoons }
    }

    pub fn as_slice(&self) -> &[Typhoon] {
        &self.typhoons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Typhoon> {
        self.typhoons.iter()
    }

    pub fn len(&self) -> usize {
        self.typhoons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.typhoons.is_empty()
    }

    pub fn get(&self, typhoon_id: &str) -> Option<&Typhoon> {
        self.typhoons.iter().find(|t| t.id == typhoon_id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.typhoons.iter().map(|t| t.id.as_str()).collect()
    }

    /// Only the typhoons whose id is in `active`
    pub fn active(&self, active: &HashSet<String>) -> Vec<&Typhoon> {
        self.typhoons
            .iter()
            .filter(|t| active.contains(&t.id))
            .collect()
    }

    /// Longest first-to-last span among the active typhoons
    ///
    /// Typhoons with no retained fix do not count. `None` when nothing
    /// qualifies.
    pub fn max_active_span(&self, active: &HashSet<String>) -> Option<Duration> {
        self.active(active)
            .into_iter()
            .filter_map(Typhoon::duration)
            .max()
    }

    /// Trajectories restricted to a brushed range
    ///
    /// Offsets are taken from each typhoon's own first fix. Every typhoon
    /// is returned, possibly with an empty track.
    pub fn brushed(&self, range: &BrushRange) -> TyphoonSet {
        let typhoons = self
            .typhoons
            .iter()
            .map(|typhoon| {
                let points = match typhoon.first_time() {
                    Some(first) => typhoon
                        .points
                        .iter()
                        .filter(|p| range.contains(p.time - first))
                        .cloned()
                        .collect(),
                    None => Vec::new(),
                };
                Typhoon::new(typhoon.id.clone(), points)
            })
            .collect();
        TyphoonSet::new(typhoons)
    }

    /// Trajectories for display: brushed when a range is set, inactive ones emptied
    pub fn visible(&self, active: &HashSet<String>, range: Option<&BrushRange>) -> TyphoonSet {
        let base = match range {
            Some(range) => self.brushed(range),
            None => self.clone(),
        };
        let typhoons = base
            .typhoons
            .into_iter()
            .map(|typhoon| {
                if active.contains(&typhoon.id) {
                    typhoon
                } else {
                    Typhoon::new(typhoon.id, Vec::new())
                }
            })
            .collect();
        TyphoonSet::new(typhoons)
    }
}

impl<'a> IntoIterator for &'a TyphoonSet {
    type Item = &'a Typhoon;
    type IntoIter = std::slice::Iter<'a, Typhoon>;

    fn into_iter(self) -> Self::IntoIter {
        self.typhoons.iter()
    }
}
