//! Shared components for CLI commands
//!
//! Logging setup, layered configuration, progress spinners and the track
//! view plumbing used by both the tracks and the city commands.

use crate::app::adapters::filesystem::load_track_inputs;
use crate::app::services::selection::{TrackEvent, TrackView, ViewState};
use crate::cli::args::{CommonArgs, TrackSelectionArgs};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("typhoon_tracks={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Configuration from defaults, file, environment, then command-line flags
pub fn load_config(args: &CommonArgs) -> Result<Config> {
    let config_file = match &args.config_file {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    };

    let mut config = Config::load_layered(config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    info!("Using data directory {}", config.data.data_dir.display());
    Ok(config)
}

/// Command-line flags win over every other layer
pub fn apply_cli_overrides(config: &mut Config, args: &CommonArgs) {
    if let Some(data_dir) = &args.data_dir {
        config.data.data_dir = data_dir.clone();
    }
}

/// Spinner shown while the inputs of a view load
pub fn create_spinner(message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}

/// Load the track view and apply the command-line selection to it
pub async fn load_track_view(
    common: &CommonArgs,
    config: &Config,
    selection: &TrackSelectionArgs,
) -> Result<ViewState<TrackView>> {
    let spinner = create_spinner("Loading track, city and combined data...", common.show_progress());
    let loaded = load_track_inputs(&config.data)
        .await
        .map(|inputs| TrackView::build(&inputs, config));
    spinner.finish_and_clear();

    let mut state = ViewState::from_load(loaded);
    for event in track_events(selection) {
        state.dispatch(event)?;
    }
    Ok(state)
}

/// Events equivalent to the command-line selection
pub fn track_events(selection: &TrackSelectionArgs) -> Vec<TrackEvent> {
    let mut events = Vec::new();
    if selection.all {
        events.push(TrackEvent::SelectAll);
    } else if !selection.active.is_empty() {
        events.push(TrackEvent::SelectNone);
        // Toggles flip state: each id once
        let mut seen = HashSet::new();
        events.extend(
            selection
                .active
                .iter()
                .map(|id| id.trim())
                .filter(|id| seen.insert(*id))
                .map(|id| TrackEvent::Toggle(id.to_string())),
        );
    }
    if let Some(range) = selection.brush {
        events.push(TrackEvent::Brush(range));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::BrushRange;
    use crate::cli::args::OutputFormat;
    use std::path::PathBuf;

    fn common_args() -> CommonArgs {
        CommonArgs {
            data_dir: Some(PathBuf::from("/srv/typhoon")),
            config_file: None,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }

    #[test]
    fn test_cli_overrides_data_dir() {
        let mut config = Config::default();
        apply_cli_overrides(&mut config, &common_args());
        assert_eq!(config.data.data_dir, PathBuf::from("/srv/typhoon"));
    }

    #[test]
    fn test_track_events_from_active_list() {
        let selection = TrackSelectionArgs {
            active: vec!["202418".to_string(), " 202401".to_string()],
            all: false,
            brush: Some(BrushRange::from_days(0.0, 1.0)),
        };

        let events = track_events(&selection);

        assert_eq!(
            events,
            vec![
                TrackEvent::SelectNone,
                TrackEvent::Toggle("202418".to_string()),
                TrackEvent::Toggle("202401".to_string()),
                TrackEvent::Brush(BrushRange::from_days(0.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_track_events_repeated_id_toggled_once() {
        let selection = TrackSelectionArgs {
            active: vec!["202418".to_string(), "202418 ".to_string()],
            all: false,
            brush: None,
        };

        let events = track_events(&selection);

        assert_eq!(
            events,
            vec![
                TrackEvent::SelectNone,
                TrackEvent::Toggle("202418".to_string()),
            ]
        );
    }

    #[test]
    fn test_track_events_default_selection_is_untouched() {
        let selection = TrackSelectionArgs {
            active: Vec::new(),
            all: false,
            brush: None,
        };
        assert!(track_events(&selection).is_empty());
    }
}
