//! Application constants for the typhoon pipeline
//!
//! Column names of the source datasets, sentinel values, timestamp formats
//! and the default plotting geometry.

// =============================================================================
// Dataset File Names
// =============================================================================

/// Weather-station metadata feed (JSON)
pub const STATIONS_FILE: &str = "stations.json";

/// Per-typhoon accumulated rainfall per station (CSV)
pub const RAIN_FILE: &str = "rain_statistics.csv";

/// Per-station maximum wind observations (CSV)
pub const WIND_FILE: &str = "wind_statistics.csv";

/// Typhoon best-track fixes (CSV)
pub const TRACK_FILE: &str = "track_info.csv";

/// City landmarks with their reference station (CSV)
pub const CITY_FILE: &str = "city.csv";

/// Combined hourly precipitation and wind per station (CSV)
pub const COMBINED_FILE: &str = "combined_data_all.csv";

/// Default data directory relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

// =============================================================================
// Source Column Names
// =============================================================================

/// Columns of the rainfall, wind and combined CSV files
pub mod columns {
    /// Station identifier, shared by rain, wind, city and combined files
    pub const STATION: &str = "測站";
    /// Simplified-script spelling seen in some exports
    pub const STATION_ALT: &str = "测站";

    pub const TYPHOON_ID: &str = "颱風編號";
    pub const TYPHOON_NAME: &str = "颱風名稱";
    pub const ACC_END_TIME: &str = "累積結束時間";
    pub const ACC_PRECIPITATION: &str = "累積雨量";

    pub const OBS_TIME: &str = "觀測時間";
    pub const MAX_WIND_SPEED: &str = "最大風風速";
    pub const MAX_WIND_DIRECTION: &str = "最大風風向";

    pub const YEAR: &str = "年";
    pub const MONTH: &str = "月";
    pub const DAY: &str = "日";
    pub const HOUR: &str = "時";
    pub const LONGITUDE: &str = "經度";
    pub const LATITUDE: &str = "緯度";
    pub const TRACK_WIND_SPEED: &str = "最大風速";
    pub const CENTRAL_PRESSURE: &str = "中心氣壓";
    pub const LEVEL: &str = "階級";

    pub const DATE: &str = "日期";
    pub const OBS_HOUR: &str = "觀測時間(hour)";
    pub const PRECIPITATION_MM: &str = "降水量(mm)";
    pub const WIND_SPEED_MS: &str = "風速(m/s)";
}

// =============================================================================
// Cleaning and Join Constants
// =============================================================================

/// Literal values left behind when a second header row was read as data
pub mod sentinels {
    pub const OBS_HOUR: &str = "Obs0.1ime";
    pub const PRECIPITATION: &str = "Precp";
    pub const WIND_SPEED: &str = "WS";
}

/// Station identifiers in the rainfall file carry suffix annotations
pub const STATION_ID_PREFIX_LEN: usize = 6;

/// Timestamp format of rainfall and wind records
pub const OBSERVATION_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Accepted date formats of the combined observation file
pub const COMBINED_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

// =============================================================================
// Selection Defaults
// =============================================================================

/// Typhoon shown when the observation view first opens
pub const DEFAULT_TYPHOON_NAME: &str = "紅霞(NOUL)";

/// Timeline span in days when no typhoon is active
pub const DEFAULT_TIME_SPAN_DAYS: i64 = 7;

// =============================================================================
// Plot Geometry
// =============================================================================

/// Track map viewport
pub const TRACK_PLOT_WIDTH: f64 = 1000.0;
pub const TRACK_PLOT_HEIGHT: f64 = 800.0;
pub const TRACK_PLOT_MARGIN: f64 = 100.0;
pub const TRACK_PROJECTION_CENTER: (f64, f64) = (121.0, 24.0);
pub const TRACK_PROJECTION_SCALE: f64 = 4000.0;

/// Observation map projection (translate left at the d3 default)
pub const OBSERVATION_PROJECTION_CENTER: (f64, f64) = (123.0, 24.0);
pub const OBSERVATION_PROJECTION_SCALE: f64 = 5500.0;
pub const OBSERVATION_PROJECTION_TRANSLATE: (f64, f64) = (480.0, 250.0);

/// Map frame scale ranges
pub mod frame_scales {
    pub const RAIN_RADIUS: (f64, f64) = (2.0, 20.0);
    pub const RAIN_OPACITY: (f64, f64) = (0.3, 0.85);
    pub const WIND_ARROW_LENGTH: (f64, f64) = (0.0, 100.0);
}

// =============================================================================
// Logging
// =============================================================================

/// Default log level for the CLI
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the data directory
pub const ENV_DATA_DIR: &str = "TYPHOON_DATA_DIR";

/// Environment variable overriding the default typhoon
pub const ENV_DEFAULT_TYPHOON: &str = "TYPHOON_DEFAULT_TYPHOON";

/// Application name used for the config directory
pub const APP_NAME: &str = "typhoon-tracks";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";
