//! Data models for the typhoon pipeline
//!
//! Two families of types live here: the raw records exactly as the source
//! files spell them (every field is text, column names are the original
//! Chinese headers), and the domain types the services derive from them.

use crate::constants::columns;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Raw Records
// =============================================================================

/// Accept either a JSON string or a JSON number and keep it as text
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(text) => text,
        Field::Number(number) => number.to_string(),
        Field::Null(()) => String::new(),
    })
}

/// One entry of the weather-station metadata feed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationRecord {
    #[serde(rename = "StationID", deserialize_with = "string_or_number")]
    pub station_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub station_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub station_latitude: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub station_longitude: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub station_altitude: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub county_name: String,
}

/// Accumulated rainfall at one station for one typhoon
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RainRecord {
    #[serde(rename = "測站", alias = "测站")]
    pub station: String,
    #[serde(rename = "颱風編號", default)]
    pub typhoon_id: String,
    #[serde(rename = "颱風名稱", default)]
    pub typhoon_name: String,
    #[serde(rename = "累積結束時間", default)]
    pub acc_end_time: String,
    #[serde(rename = "累積雨量", default)]
    pub acc_precipitation: String,
}

/// Maximum wind observed at one station at one time
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindRecord {
    #[serde(rename = "測站", alias = "测站")]
    pub station: String,
    #[serde(rename = "觀測時間", default)]
    pub obs_time: String,
    #[serde(rename = "最大風風速", default)]
    pub max_wind_speed: String,
    #[serde(rename = "最大風風向", default)]
    pub max_wind_direction: String,
}

/// One best-track fix with its time split into components
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackRecord {
    #[serde(rename = "颱風編號")]
    pub typhoon_id: String,
    #[serde(rename = "年", default)]
    pub year: String,
    #[serde(rename = "月", default)]
    pub month: String,
    #[serde(rename = "日", default)]
    pub day: String,
    #[serde(rename = "時", default)]
    pub hour: String,
    #[serde(rename = "經度", default)]
    pub longitude: String,
    #[serde(rename = "緯度", default)]
    pub latitude: String,
    #[serde(rename = "最大風速", default)]
    pub wind_speed: String,
    #[serde(rename = "中心氣壓", default)]
    pub pressure: String,
    #[serde(rename = "階級", default)]
    pub level: String,
}

/// A city landmark and the station that reports for it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityRecord {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Longitude", default)]
    pub longitude: String,
    #[serde(rename = "Latitude", default)]
    pub latitude: String,
    #[serde(rename = "測站", alias = "测站", default)]
    pub station: String,
}

/// One hourly row of the combined precipitation and wind file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CombinedRecord {
    #[serde(rename = "測站", alias = "测站", default)]
    pub station: String,
    #[serde(rename = "日期", default)]
    pub date: String,
    #[serde(rename = "觀測時間(hour)", default)]
    pub hour: String,
    #[serde(rename = "降水量(mm)", default)]
    pub precipitation: String,
    #[serde(rename = "風速(m/s)", default)]
    pub wind_speed: String,
}

/// Raw inputs of the observation view, all arrived
#[derive(Debug, Clone, Default)]
pub struct ObservationInputs {
    pub stations: Vec<StationRecord>,
    pub rain: Vec<RainRecord>,
    pub wind: Vec<WindRecord>,
}

/// Raw inputs of the track view, all arrived
#[derive(Debug, Clone, Default)]
pub struct TrackInputs {
    pub tracks: Vec<TrackRecord>,
    pub cities: Vec<CityRecord>,
    pub combined: Vec<CombinedRecord>,
}

// =============================================================================
// Domain Types
// =============================================================================

/// Weather station metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub county: String,
}

/// Station fields copied onto an observation when its station is known
///
/// Kept as one optional block so the four fields are present or absent
/// together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSite {
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub county: String,
}

impl From<&Station> for ObservationSite {
    fn from(station: &Station) -> Self {
        Self {
            station_name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            county: station.county.clone(),
        }
    }
}

/// Joined rainfall and wind reading for one station at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub typhoon_id: String,
    pub typhoon_name: String,
    pub station_id: String,
    #[serde(flatten)]
    pub site: Option<ObservationSite>,
    pub acc_precipitation: f64,
    pub max_wind_speed: f64,
    /// Degrees
    pub max_wind_direction: f64,
    pub timestamp: NaiveDateTime,
}

impl Observation {
    pub fn station_name(&self) -> Option<&str> {
        self.site.as_ref().map(|site| site.station_name.as_str())
    }

    pub fn latitude(&self) -> Option<f64> {
        self.site.as_ref().map(|site| site.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.site.as_ref().map(|site| site.longitude)
    }

    pub fn county(&self) -> Option<&str> {
        self.site.as_ref().map(|site| site.county.as_str())
    }
}

/// One position and intensity sample of a typhoon's path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub typhoon_id: String,
    pub time: NaiveDateTime,
    pub longitude: f64,
    pub latitude: f64,
    pub wind_speed: f64,
    pub pressure: f64,
    pub level: String,
}

/// A typhoon and its retained track, ascending by time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typhoon {
    pub id: String,
    pub points: Vec<TrackPoint>,
}

impl Typhoon {
    pub fn new(id: impl Into<String>, points: Vec<TrackPoint>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }

    /// Time of the first retained fix
    pub fn first_time(&self) -> Option<NaiveDateTime> {
        self.points.first().map(|p| p.time)
    }

    /// Time of the last retained fix
    pub fn last_time(&self) -> Option<NaiveDateTime> {
        self.points.last().map(|p| p.time)
    }

    /// Last minus first fix, `None` for an empty track
    pub fn duration(&self) -> Option<Duration> {
        Some(self.last_time()? - self.first_time()?)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Brushed sub-range of the track timeline
///
/// Offsets are measured from each typhoon's first retained fix, so one
/// brush selects "days 1 to 3" of every active typhoon at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushRange {
    pub start: Duration,
    pub end: Duration,
}

impl BrushRange {
    /// Build a range, swapping the bounds if given in reverse
    pub fn new(start: Duration, end: Duration) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Range from fractional day offsets, as the timeline axis reports them
    pub fn from_days(start_days: f64, end_days: f64) -> Self {
        let to_duration = |days: f64| Duration::milliseconds((days * 86_400_000.0).round() as i64);
        Self::new(to_duration(start_days), to_duration(end_days))
    }

    /// Inclusive containment of an offset
    pub fn contains(&self, offset: Duration) -> bool {
        offset >= self.start && offset <= self.end
    }
}

/// City landmark plotted on the track map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub station_id: String,
}

/// Cleaned hourly reading from the combined observation file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityObservation {
    pub station: String,
    pub time: NaiveDateTime,
    pub precipitation_mm: f64,
    pub wind_speed_ms: f64,
}

/// The six input datasets of the two views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    Stations,
    Rain,
    Wind,
    Track,
    City,
    Combined,
}

impl DatasetKind {
    /// Short name used in logs and load errors
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Stations => "stations",
            DatasetKind::Rain => "rain",
            DatasetKind::Wind => "wind",
            DatasetKind::Track => "track",
            DatasetKind::City => "city",
            DatasetKind::Combined => "combined",
        }
    }

    /// Columns a CSV dataset must carry in its header row
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::Stations => &[],
            DatasetKind::Rain => &[
                columns::TYPHOON_ID,
                columns::TYPHOON_NAME,
                columns::ACC_END_TIME,
                columns::ACC_PRECIPITATION,
            ],
            DatasetKind::Wind => &[
                columns::OBS_TIME,
                columns::MAX_WIND_SPEED,
                columns::MAX_WIND_DIRECTION,
            ],
            DatasetKind::Track => &[
                columns::TYPHOON_ID,
                columns::YEAR,
                columns::MONTH,
                columns::DAY,
                columns::HOUR,
                columns::LONGITUDE,
                columns::LATITUDE,
            ],
            DatasetKind::City => &["City", "Longitude", "Latitude"],
            DatasetKind::Combined => &[
                columns::DATE,
                columns::OBS_HOUR,
                columns::PRECIPITATION_MM,
                columns::WIND_SPEED_MS,
            ],
        }
    }

    /// Whether the header must also carry a station column (either spelling)
    pub fn requires_station_column(&self) -> bool {
        !matches!(self, DatasetKind::Stations | DatasetKind::Track)
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
