//! Rainfall and wind join engine
//!
//! Merges per-typhoon accumulated rainfall with the maximum-wind readings
//! of the same station and time, enriches the result with station metadata
//! and produces one time-sorted observation sequence.
//!
//! # Join rules
//!
//! - The rainfall station identifier is truncated to its first six
//!   characters to strip suffix annotations.
//! - Station identifiers on both sides are compared with surrounding
//!   whitespace trimmed. Timestamp text is not trimmed.
//! - The wind record must carry that identifier and the *identical*
//!   timestamp text. There is no tolerance window, so a wind feed that
//!   writes `2024-10-01 00:00:00` never matches rain written as
//!   `2024-10-01 00:00`. This is fragile, and it is kept as-is; unmatched
//!   joins are logged and counted in [`JoinStats::unmatched_wind`].
//! - When several wind records qualify the first one in file order wins.
//! - Unmatched rainfall still yields an observation with zero wind.
//! - Unknown stations leave the observation's site block empty.

pub mod engine;
pub mod observation_set;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use engine::ObservationJoiner;
pub use observation_set::ObservationSet;
pub use stats::{JoinResult, JoinStats};
