//! Time-window selection for the observation and track views
//!
//! Each view owns its loaded data and one selection value. User
//! interaction arrives as events; a transition is a pure function of the
//! current selection, the event and the view's data, and either yields the
//! next selection or an error that leaves the current one untouched.
//!
//! Views sit inside a [`ViewState`], which rejects every event until all of
//! the view's inputs have loaded.

pub mod observation;
pub mod timeline;
pub mod track;
pub mod view_state;

#[cfg(test)]
pub mod tests;

pub use observation::{ObservationEvent, ObservationSelection, ObservationView};
pub use timeline::{Timeline, nearest_timestamp};
pub use track::{TrackEvent, TrackSelection, TrackView};
pub use view_state::{ViewController, ViewState};
