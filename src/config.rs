//! Configuration management and validation.
//!
//! Provides the configuration for dataset locations, plot geometry, join
//! and cleaning rules, and the initial selection. Values are layered:
//! built-in defaults, then an optional JSON file, then environment
//! variables, then command-line flags.

use crate::app::models::DatasetKind;
use crate::constants::{
    self, APP_NAME, CITY_FILE, COMBINED_FILE, CONFIG_FILE_NAME, DEFAULT_DATA_DIR,
    DEFAULT_TIME_SPAN_DAYS, DEFAULT_TYPHOON_NAME, ENV_DATA_DIR, ENV_DEFAULT_TYPHOON, RAIN_FILE,
    STATION_ID_PREFIX_LEN, STATIONS_FILE, TRACK_FILE, WIND_FILE, sentinels,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locations of the input datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding every dataset file
    pub data_dir: PathBuf,
    pub stations_file: String,
    pub rain_file: String,
    pub wind_file: String,
    pub track_file: String,
    pub city_file: String,
    pub combined_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            stations_file: STATIONS_FILE.to_string(),
            rain_file: RAIN_FILE.to_string(),
            wind_file: WIND_FILE.to_string(),
            track_file: TRACK_FILE.to_string(),
            city_file: CITY_FILE.to_string(),
            combined_file: COMBINED_FILE.to_string(),
        }
    }
}

impl DataConfig {
    /// Full path of one dataset
    pub fn path(&self, kind: DatasetKind) -> PathBuf {
        let file = match kind {
            DatasetKind::Stations => &self.stations_file,
            DatasetKind::Rain => &self.rain_file,
            DatasetKind::Wind => &self.wind_file,
            DatasetKind::Track => &self.track_file,
            DatasetKind::City => &self.city_file,
            DatasetKind::Combined => &self.combined_file,
        };
        self.data_dir.join(file)
    }
}

/// Plot margins in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Mercator projection parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Longitude, latitude in degrees mapped to `translate`
    pub center: (f64, f64),
    pub scale: f64,
    /// Pixel position of the center; `None` means the plot's middle
    pub translate: Option<(f64, f64)>,
}

/// Track map geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackPlotConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub projection: ProjectionConfig,
}

impl Default for TrackPlotConfig {
    fn default() -> Self {
        Self {
            width: constants::TRACK_PLOT_WIDTH,
            height: constants::TRACK_PLOT_HEIGHT,
            margin: Margin::uniform(constants::TRACK_PLOT_MARGIN),
            projection: ProjectionConfig {
                center: constants::TRACK_PROJECTION_CENTER,
                scale: constants::TRACK_PROJECTION_SCALE,
                translate: None,
            },
        }
    }
}

impl TrackPlotConfig {
    /// Projection translate, falling back to the plot's middle
    pub fn translate(&self) -> (f64, f64) {
        self.projection
            .translate
            .unwrap_or((self.width / 2.0, self.height / 2.0))
    }
}

/// Geometry of both maps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub track: TrackPlotConfig,
    pub observation_projection: ProjectionConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            track: TrackPlotConfig::default(),
            observation_projection: ProjectionConfig {
                center: constants::OBSERVATION_PROJECTION_CENTER,
                scale: constants::OBSERVATION_PROJECTION_SCALE,
                translate: Some(constants::OBSERVATION_PROJECTION_TRANSLATE),
            },
        }
    }
}

/// Rainfall/wind join rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    /// Characters of the rainfall station id kept before matching
    pub station_id_prefix_len: usize,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            station_id_prefix_len: STATION_ID_PREFIX_LEN,
        }
    }
}

/// Sentinel values marking leaked header rows in the combined file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    pub hour_sentinel: String,
    pub precipitation_sentinel: String,
    pub wind_speed_sentinel: String,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            hour_sentinel: sentinels::OBS_HOUR.to_string(),
            precipitation_sentinel: sentinels::PRECIPITATION.to_string(),
            wind_speed_sentinel: sentinels::WIND_SPEED.to_string(),
        }
    }
}

/// Initial state of the per-typhoon checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckboxDefault {
    /// Every typhoon starts unselected
    AllOff,
    /// Every typhoon starts selected
    AllOn,
}

/// Initial selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Typhoon name shown when the observation view opens
    pub default_typhoon: String,
    pub checkbox_default: CheckboxDefault,
    /// Timeline span when no typhoon is active
    pub default_span_days: i64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_typhoon: DEFAULT_TYPHOON_NAME.to_string(),
            checkbox_default: CheckboxDefault::AllOff,
            default_span_days: DEFAULT_TIME_SPAN_DAYS,
        }
    }
}

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub plot: PlotConfig,
    pub join: JoinConfig,
    pub cleaning: CleaningConfig,
    pub selection: SelectionConfig,
}

impl Config {
    /// Default config file location (`<config dir>/typhoon-tracks/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a configuration file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file '{}'", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            Error::json_parsing(path.display().to_string(), "Invalid configuration", e)
        })
    }

    /// Defaults, then the config file if given, then the environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through a lookup function
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides data directory: {}", ENV_DATA_DIR, data_dir);
            self.data.data_dir = PathBuf::from(data_dir);
        }
        if let Some(typhoon) = lookup(ENV_DEFAULT_TYPHOON).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides default typhoon: {}", ENV_DEFAULT_TYPHOON, typhoon);
            self.selection.default_typhoon = typhoon;
        }
    }

    /// Check the configuration for values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        let track = &self.plot.track;
        if track.width <= 0.0 || track.height <= 0.0 {
            return Err(Error::configuration(format!(
                "Track plot size must be positive, got {}x{}",
                track.width, track.height
            )));
        }
        if track.margin.left + track.margin.right >= track.width
            || track.margin.top + track.margin.bottom >= track.height
        {
            return Err(Error::configuration(
                "Track plot margins leave no drawable area",
            ));
        }
        for (name, projection) in [
            ("track", &track.projection),
            ("observation", &self.plot.observation_projection),
        ] {
            if !(projection.scale > 0.0) {
                return Err(Error::configuration(format!(
                    "The {} projection scale must be positive, got {}",
                    name, projection.scale
                )));
            }
            if projection.center.1.abs() >= 90.0 {
                return Err(Error::configuration(format!(
                    "The {} projection center latitude must be inside (-90, 90), got {}",
                    name, projection.center.1
                )));
            }
        }
        if self.join.station_id_prefix_len == 0 {
            return Err(Error::configuration(
                "Station id prefix length must be at least 1",
            ));
        }
        if self.selection.default_span_days <= 0
            || chrono::Duration::try_days(self.selection.default_span_days).is_none()
        {
            return Err(Error::configuration(format!(
                "Default time span must be a positive number of days in range, got {}",
                self.selection.default_span_days
            )));
        }
        Ok(())
    }

    /// Use a different data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data.data_dir = data_dir.into();
        self
    }

    /// Use a different initial typhoon
    pub fn with_default_typhoon(mut self, typhoon: impl Into<String>) -> Self {
        self.selection.default_typhoon = typhoon.into();
        self
    }

    /// Start with every typhoon checkbox selected or unselected
    pub fn with_checkbox_default(mut self, checkbox_default: CheckboxDefault) -> Self {
        self.selection.checkbox_default = checkbox_default;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.join.station_id_prefix_len, 6);
        assert_eq!(config.selection.checkbox_default, CheckboxDefault::AllOff);
        assert_eq!(config.plot.track.translate(), (500.0, 400.0));
    }

    #[test]
    fn test_dataset_paths() {
        let config = Config::default().with_data_dir("/srv/typhoon");
        assert_eq!(
            config.data.path(DatasetKind::Track),
            PathBuf::from("/srv/typhoon/track_info.csv")
        );
        assert_eq!(
            config.data.path(DatasetKind::Stations),
            PathBuf::from("/srv/typhoon/stations.json")
        );
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_DATA_DIR, "/tmp/data"),
            (ENV_DEFAULT_TYPHOON, "山陀兒(KRATHON)"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.data_dir, PathBuf::from("/tmp/data"));
        assert_eq!(config.selection.default_typhoon, "山陀兒(KRATHON)");
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"join": {"station_id_prefix_len": 5}, "selection": {"checkbox_default": "AllOn"}}"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.join.station_id_prefix_len, 5);
        assert_eq!(config.selection.checkbox_default, CheckboxDefault::AllOn);
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.plot.track.margin = Margin::uniform(600.0);
        assert!(matches!(config.validate(), Err(Error::Configuration { .. })));

        let mut config = Config::default();
        config.join.station_id_prefix_len = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.plot.observation_projection.scale = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.selection.default_span_days = 1_000_000_000_000_000;
        assert!(matches!(config.validate(), Err(Error::Configuration { .. })));

        let mut config = Config::default();
        config.selection.default_span_days = 0;
        assert!(config.validate().is_err());
    }
}
