use anyhow::Context;
use clap::Parser;
use std::process;
use typhoon_tracks::cli::{
    args::{Args, Commands},
    commands,
};

fn main() {
    let args = Args::parse();
    let command = match &args.command {
        Commands::Observations(_) => "observations",
        Commands::Tracks(_) => "tracks",
        Commands::City(_) => "city",
    };

    let result = tokio::runtime::Runtime::new()
        .context("Failed to create async runtime")
        .and_then(|runtime| {
            runtime
                .block_on(commands::run(args))
                .with_context(|| format!("The {} command failed", command))
        });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(exit_code(&error));
    }
}

/// 2 for load failures, 3 when the selection has no data, 1 otherwise
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<typhoon_tracks::Error>() {
        Some(e) if e.is_load_failure() => 2,
        Some(typhoon_tracks::Error::ViewNotReady { .. }) => 2,
        Some(typhoon_tracks::Error::NoCityData { .. }) => 3,
        _ => 1,
    }
}
