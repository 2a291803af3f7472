//! Command implementations for the typhoon pipeline CLI
//!
//! Each command loads the inputs of one view, applies the selection given
//! on the command line as events, and reports what the view would show:
//! - `observations`: the observation map at one instant
//! - `tracks`: the track map for the active set and brush
//! - `city`: the per-city chart data

pub mod city;
pub mod observations;
pub mod shared;
pub mod tracks;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the subcommand handler
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Observations(observation_args) => {
            observations::run_observations(observation_args).await
        }
        Commands::Tracks(track_args) => tracks::run_tracks(track_args).await,
        Commands::City(city_args) => city::run_city(city_args).await,
    }
}
