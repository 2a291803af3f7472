//! City observation filtering and drill-down
//!
//! The combined hourly file is cleaned once per load: rows missing their
//! date or hour, rows carrying a leaked header value, and rows whose time
//! does not parse are dropped and counted. Clicking a city then filters the
//! cleaned rows to the city's station and to each active typhoon's
//! first-to-last window.

pub mod cleaning;
pub mod details;
pub mod landmarks;

#[cfg(test)]
pub mod tests;

pub use cleaning::{CleaningResult, CleaningStats, clean_combined_records};
pub use details::{TyphoonCityObservations, city_details, filter_for_station_window};
pub use landmarks::{CityLandmark, parse_city_record, project_cities};
