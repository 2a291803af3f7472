//! Observation timeline and scrub snapping

use crate::app::services::observation_join::ObservationSet;
use chrono::{NaiveDate, NaiveDateTime};

/// Timestamp in a sorted slice closest to `instant`
///
/// On an exact tie between two neighbours the earlier one wins.
pub fn nearest_timestamp(sorted: &[NaiveDateTime], instant: NaiveDateTime) -> Option<NaiveDateTime> {
    let idx = sorted.partition_point(|t| *t < instant);
    let before = idx.checked_sub(1).and_then(|i| sorted.get(i)).copied();
    let after = sorted.get(idx).copied();

    match (before, after) {
        (Some(b), Some(a)) => {
            if instant - b <= a - instant {
                Some(b)
            } else {
                Some(a)
            }
        }
        (Some(b), None) => Some(b),
        (None, a) => a,
    }
}

/// Distinct observation times of one typhoon, ascending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    timestamps: Vec<NaiveDateTime>,
}

impl Timeline {
    pub fn new(mut timestamps: Vec<NaiveDateTime>) -> Self {
        timestamps.sort();
        timestamps.dedup();
        Self { timestamps }
    }

    pub fn for_typhoon(data: &ObservationSet, typhoon_name: &str) -> Self {
        Self::new(data.timestamps_for(typhoon_name))
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn first(&self) -> Option<NaiveDateTime> {
        self.timestamps.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDateTime> {
        self.timestamps.last().copied()
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.timestamps.binary_search(&instant).is_ok()
    }

    /// Calendar days covered, one tick each
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self.timestamps.iter().map(|t| t.date()).collect();
        days.dedup();
        days
    }

    /// Snap a scrub position to the nearest observation time
    pub fn snap(&self, instant: NaiveDateTime) -> Option<NaiveDateTime> {
        nearest_timestamp(&self.timestamps, instant)
    }
}
