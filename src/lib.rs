//! Typhoon Tracks Library
//!
//! Data pipeline behind the Taiwan typhoon visualizations: it loads the
//! station, rainfall, wind, track, city and combined-observation datasets,
//! joins them in memory and derives the collections a map, timeline or
//! chart consumes.
//!
//! This library provides tools for:
//! - Building a station index from the weather-station metadata feed
//! - Joining rainfall and wind readings into time-sorted observations
//! - Grouping track fixes into per-typhoon trajectories clipped to the plot
//! - Cleaning combined hourly observations and drilling down per city
//! - Holding the user's selection as an explicit, pure state machine
//!
//! Rendering is out of scope: everything here is plain data in, data out.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod city_filter;
        pub mod field_parsers;
        pub mod map_frame;
        pub mod observation_join;
        pub mod selection;
        pub mod station_registry;
        pub mod track_aggregator;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CityObservation, Observation, Station, TrackPoint, Typhoon};
pub use config::Config;

/// Result type alias for the typhoon pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset loading and pipeline operations
///
/// Missing join keys and malformed rows are not errors: they are logged and
/// counted in the stats structures of the service that met them.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// JSON parsing error
    #[error("JSON parsing error in file '{file}': {message}")]
    JsonParsing {
        file: String,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// One of the inputs of a view could not be loaded
    #[error("Failed to load dataset '{dataset}': {reason}")]
    DatasetLoad { dataset: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Typhoon name or identifier not present in the loaded data
    #[error("Unknown typhoon: {typhoon}")]
    UnknownTyphoon { typhoon: String },

    /// No weather rows for the clicked city within any active typhoon
    #[error("No weather data available for {city}")]
    NoCityData { city: String },

    /// Interaction attempted before the view finished loading
    #[error("View is not ready: {state}")]
    ViewNotReady { state: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON parsing error with context
    pub fn json_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::JsonParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a dataset load error
    pub fn dataset_load(dataset: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DatasetLoad {
            dataset: dataset.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an unknown typhoon error
    pub fn unknown_typhoon(typhoon: impl Into<String>) -> Self {
        Self::UnknownTyphoon {
            typhoon: typhoon.into(),
        }
    }

    /// Create a "no data for this city" error
    pub fn no_city_data(city: impl Into<String>) -> Self {
        Self::NoCityData { city: city.into() }
    }

    /// Create a view-not-ready error
    pub fn view_not_ready(state: impl Into<String>) -> Self {
        Self::ViewNotReady {
            state: state.into(),
        }
    }

    /// True for load failures, which disable interaction until resolved
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::CsvParsing { .. }
                | Self::JsonParsing { .. }
                | Self::DatasetLoad { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonParsing {
            file: "unknown".to_string(),
            message: "JSON parsing failed".to_string(),
            source: error,
        }
    }
}
