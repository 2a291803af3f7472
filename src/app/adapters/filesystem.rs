//! Dataset loading from the data directory
//!
//! Each view needs several files. They are read concurrently and the view
//! is only built once all of them have arrived; the first failure aborts
//! the whole load with [`Error::DatasetLoad`].

use crate::app::models::{
    CityRecord, CombinedRecord, DatasetKind, ObservationInputs, RainRecord, StationRecord,
    TrackInputs, TrackRecord, WindRecord,
};
use crate::app::services::station_registry::parse_station_feed;
use crate::config::DataConfig;
use crate::constants::columns;
use crate::{Error, Result};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// Fold any error into a load failure of `kind`
fn load_error(kind: DatasetKind, error: Error) -> Error {
    match error {
        e @ Error::DatasetLoad { .. } => e,
        other => Error::dataset_load(kind.label(), other.to_string()),
    }
}

async fn read_dataset(path: &Path, kind: DatasetKind) -> Result<String> {
    debug!("Reading {} dataset from {}", kind, path.display());
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::dataset_load(kind.label(), format!("{}: {}", path.display(), e))
    })?;
    Ok(content.trim_start_matches('\u{feff}').to_string())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Check a CSV header row against the columns a dataset needs
pub fn validate_headers(headers: &csv::StringRecord, kind: DatasetKind) -> Result<()> {
    let has = |column: &str| headers.iter().any(|h| h.trim() == column);

    if kind.requires_station_column() && !has(columns::STATION) && !has(columns::STATION_ALT) {
        return Err(Error::dataset_load(
            kind.label(),
            format!("missing column '{}'", columns::STATION),
        ));
    }
    if let Some(missing) = kind.required_columns().iter().find(|c| !has(**c)) {
        return Err(Error::dataset_load(
            kind.label(),
            format!("missing column '{}'", missing),
        ));
    }
    Ok(())
}

/// Parse CSV text into records of one dataset
///
/// Rows may be shorter than the header; absent fields read as blank.
pub fn parse_csv_records<T: DeserializeOwned>(
    content: &str,
    kind: DatasetKind,
    file: &str,
) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing(file, "Failed to read header row", Some(e)))?
        .clone();
    validate_headers(&headers, kind)?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<T>().enumerate() {
        let record = row.map_err(|e| {
            Error::csv_parsing(file, format!("Invalid row {}", index + 2), Some(e))
        })?;
        records.push(record);
    }

    debug!("Parsed {} {} records from {}", records.len(), kind, file);
    Ok(records)
}

/// Load the station metadata feed
pub async fn load_stations(path: &Path) -> Result<Vec<StationRecord>> {
    let content = read_dataset(path, DatasetKind::Stations).await?;
    parse_station_feed(&content, &file_name(path))
        .map_err(|e| load_error(DatasetKind::Stations, e))
}

/// Load one CSV dataset
pub async fn load_csv<T: DeserializeOwned>(path: &Path, kind: DatasetKind) -> Result<Vec<T>> {
    let content = read_dataset(path, kind).await?;
    parse_csv_records(&content, kind, &file_name(path)).map_err(|e| load_error(kind, e))
}

/// Load station, rainfall and wind data together
pub async fn load_observation_inputs(config: &DataConfig) -> Result<ObservationInputs> {
    let stations_path = config.path(DatasetKind::Stations);
    let rain_path = config.path(DatasetKind::Rain);
    let wind_path = config.path(DatasetKind::Wind);

    let (stations, rain, wind) = tokio::try_join!(
        load_stations(&stations_path),
        load_csv::<RainRecord>(&rain_path, DatasetKind::Rain),
        load_csv::<WindRecord>(&wind_path, DatasetKind::Wind),
    )?;

    info!(
        "Loaded observation inputs: {} stations, {} rain records, {} wind records",
        stations.len(),
        rain.len(),
        wind.len()
    );
    Ok(ObservationInputs {
        stations,
        rain,
        wind,
    })
}

/// Load track, city and combined observation data together
pub async fn load_track_inputs(config: &DataConfig) -> Result<TrackInputs> {
    let track_path = config.path(DatasetKind::Track);
    let city_path = config.path(DatasetKind::City);
    let combined_path = config.path(DatasetKind::Combined);

    let (tracks, cities, combined) = tokio::try_join!(
        load_csv::<TrackRecord>(&track_path, DatasetKind::Track),
        load_csv::<CityRecord>(&city_path, DatasetKind::City),
        load_csv::<CombinedRecord>(&combined_path, DatasetKind::Combined),
    )?;

    info!(
        "Loaded track inputs: {} fixes, {} cities, {} combined rows",
        tracks.len(),
        cities.len(),
        combined.len()
    );
    Ok(TrackInputs {
        tracks,
        cities,
        combined,
    })
}
