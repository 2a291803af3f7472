//! Typhoon track aggregation
//!
//! Turns best-track fixes into per-typhoon trajectories: each fix gets one
//! timestamp from its year/month/day/hour fields, fixes are grouped by
//! typhoon identifier (groups keep the order in which typhoons first
//! appear), each group is sorted by time, and fixes that project outside
//! the track map's plotting area are discarded.
//!
//! A typhoon whose every fix falls outside the plot is still reported, with
//! an empty track.

pub mod aggregator;
pub mod projection;
pub mod typhoon_set;

#[cfg(test)]
pub mod tests;

pub use aggregator::{TrackAggregator, TrackResult, TrackStats};
pub use projection::{MercatorProjection, PlotBounds};
pub use typhoon_set::TyphoonSet;
