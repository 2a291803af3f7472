//! City command: hourly weather at one city during the active typhoons

use super::shared::{load_config, load_track_view, print_json, setup_logging};
use crate::app::services::city_filter::TyphoonCityObservations;
use crate::cli::args::{CityArgs, OutputFormat};
use crate::Result;
use colored::*;
use tracing::debug;

pub async fn run_city(args: CityArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("City arguments: {:?}", args);

    let config = load_config(&args.common)?;
    let state = load_track_view(&args.common, &config, &args.selection).await?;
    let view = state.require_ready()?;

    let details = view.city_details(&args.city)?;

    match args.common.output_format {
        OutputFormat::Json => print_json(&details),
        OutputFormat::Human => {
            print_city_report(&args.city, &details);
            Ok(())
        }
    }
}

fn print_city_report(city: &str, details: &[TyphoonCityObservations]) {
    println!("\n{} {}", "Weather at".bold(), city.cyan());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for typhoon in details {
        println!(
            "\n{} {} ({} to {}, {} hours)",
            "Typhoon".bold(),
            typhoon.typhoon_id.green(),
            typhoon.start,
            typhoon.end,
            typhoon.rows.len()
        );
        println!(
            "   Axis maxima: precipitation {:.1} mm, wind {:.1} m/s",
            typhoon.precipitation_axis_max(),
            typhoon.wind_axis_max()
        );
        for (row, day) in typhoon.rows.iter().zip(typhoon.day_offsets()) {
            println!(
                "   day {:>5.2}  {}  {:>6.1} mm  {:>5.1} m/s",
                day, row.time, row.precipitation_mm, row.wind_speed_ms
            );
        }
    }
}
