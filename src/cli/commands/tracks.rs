//! Tracks command: trajectories for the active set and brushed range

use super::shared::{load_config, load_track_view, print_json, setup_logging};
use crate::app::services::selection::TrackView;
use crate::cli::args::{OutputFormat, TracksArgs};
use crate::Result;
use colored::*;
use tracing::{debug, info};

pub async fn run_tracks(args: TracksArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Tracks arguments: {:?}", args);

    let config = load_config(&args.common)?;
    let state = load_track_view(&args.common, &config, &args.selection).await?;
    let view = state.require_ready()?;

    info!("{}", view.track_stats.summary());

    match args.common.output_format {
        OutputFormat::Json => {
            let visible = view.visible();
            let range = view.selection.effective_range();
            let typhoons = if args.points {
                serde_json::to_value(visible.as_slice())?
            } else {
                visible
                    .iter()
                    .map(|t| serde_json::json!({ "id": t.id, "points": t.points.len() }))
                    .collect()
            };
            print_json(&serde_json::json!({
                "active": view.selection.active,
                "span_days": view.selection.span_days(),
                "brushed": view.selection.is_brushed(),
                "range_days": [
                    range.start.num_milliseconds() as f64 / 86_400_000.0,
                    range.end.num_milliseconds() as f64 / 86_400_000.0,
                ],
                "typhoons": typhoons,
                "cities": view.landmarks,
            }))
        }
        OutputFormat::Human => {
            print_track_report(view, args.points);
            Ok(())
        }
    }
}

fn print_track_report(view: &TrackView, show_points: bool) {
    let visible = view.visible();

    println!("\n{}", "Typhoon Tracks".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • {}", view.track_stats.summary());
    println!(
        "   • Active: {} of {} | Span: {:.2} days | Brush: {}",
        view.selection.active.len(),
        view.typhoons.len(),
        view.selection.span_days(),
        if view.selection.is_brushed() { "on" } else { "off" }
    );

    for (typhoon, shown) in view.typhoons.iter().zip(visible.iter()) {
        let marker = if view.selection.is_active(&typhoon.id) {
            "[x]".green()
        } else {
            "[ ]".dimmed()
        };
        let span = typhoon
            .duration()
            .map(|d| format!("{:.1} days", d.num_minutes() as f64 / 1440.0))
            .unwrap_or_else(|| "no fixes on map".to_string());
        println!(
            "   {} {:<10} {:>4} fixes, {:>4} shown  ({})",
            marker,
            typhoon.id,
            typhoon.points.len(),
            shown.points.len(),
            span
        );
        if show_points {
            for point in &shown.points {
                println!(
                    "        {}  {:>7.2}E {:>6.2}N  {:>5.1} m/s  {:>6.1} hPa  {}",
                    point.time,
                    point.longitude,
                    point.latitude,
                    point.wind_speed,
                    point.pressure,
                    point.level
                );
            }
        }
    }

    if !view.landmarks.is_empty() {
        println!("\n{}", "Cities".bold());
        for landmark in &view.landmarks {
            println!(
                "   • {} (station {}) at ({:.0}, {:.0})",
                landmark.city.name, landmark.city.station_id, landmark.x, landmark.y
            );
        }
    }
}
