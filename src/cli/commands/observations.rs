//! Observations command: the observation map at one instant

use super::shared::{create_spinner, load_config, print_json, setup_logging};
use crate::app::adapters::filesystem::load_observation_inputs;
use crate::app::services::map_frame::MapFrame;
use crate::app::services::selection::{ObservationEvent, ObservationView, ViewState};
use crate::cli::args::{ObservationsArgs, OutputFormat};
use crate::Result;
use colored::*;
use tracing::{debug, info};

pub async fn run_observations(args: ObservationsArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Observations arguments: {:?}", args);

    let config = load_config(&args.common)?;

    let spinner = create_spinner(
        "Loading station, rainfall and wind data...",
        args.common.show_progress(),
    );
    let loaded = load_observation_inputs(&config.data)
        .await
        .map(|inputs| ObservationView::build(&inputs, &config));
    spinner.finish_and_clear();

    let mut state = ViewState::from_load(loaded);
    if let Some(typhoon) = &args.typhoon {
        state.dispatch(ObservationEvent::SelectTyphoon(typhoon.clone()))?;
    }
    if let Some(instant) = args.at {
        state.dispatch(ObservationEvent::ScrubTo(instant))?;
    }
    let view = state.require_ready()?;

    info!("{}", view.join_stats.summary());

    if args.list {
        return match args.common.output_format {
            OutputFormat::Json => print_json(&view.typhoon_menu()),
            OutputFormat::Human => {
                println!("{}", "Typhoons".bold());
                for name in view.typhoon_menu() {
                    println!("   • {}", name);
                }
                Ok(())
            }
        };
    }

    let frame = view.frame();
    match args.common.output_format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "typhoon": view.selection.selected_typhoon,
            "instant": view.selection.selected_instant,
            "timeline": view.timeline().timestamps(),
            "frame": frame,
            "join": {
                "rain_records": view.join_stats.rain_records,
                "matched": view.join_stats.matched,
                "unmatched_wind": view.join_stats.unmatched_wind,
                "unresolved_stations": view.join_stats.unresolved_stations,
            },
        })),
        OutputFormat::Human => {
            print_frame_report(view, frame.as_ref());
            Ok(())
        }
    }
}

fn print_frame_report(view: &ObservationView, frame: Option<&MapFrame>) {
    let timeline = view.timeline();

    println!(
        "\n{} {}",
        "Typhoon".bold(),
        view.selection.selected_typhoon.cyan()
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    match (timeline.first(), timeline.last()) {
        (Some(first), Some(last)) => println!(
            "   • Timeline: {} to {} ({} steps over {} days)",
            first,
            last,
            timeline.len(),
            timeline.days().len()
        ),
        _ => println!("   • Timeline: {}", "no observations".yellow()),
    }
    println!("   • {}", view.join_stats.summary());

    let Some(frame) = frame else {
        return;
    };
    println!(
        "\n{} {} ({} stations, {} without position)",
        "Frame at".bold(),
        frame.instant.to_string().green(),
        frame.markers.len(),
        frame.unplaced
    );
    for marker in &frame.markers {
        println!(
            "   • {} {:<8} rain {:>7.1} mm  wind {:>5.1} m/s @ {:>3.0}°  r={:.1}",
            marker.station_id,
            marker.station_name,
            marker.acc_precipitation,
            marker.max_wind_speed,
            marker.max_wind_direction,
            marker.radius
        );
    }
}
