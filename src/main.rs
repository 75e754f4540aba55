mod config;
mod detector;
mod error;
mod namer;
mod normalizer;
mod renamer;
mod sequencer;
mod utils;

use anyhow::{Context, Result};
use config::Config;
use log::{error, info};
use normalizer::Normalizer;
use std::env;

fn main() {
    // Progress goes to stdout alongside the final summary
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }

    println!("\nDone!");
}

fn run() -> Result<()> {
    let config = Config::from_args(env::args().skip(1))?;

    info!("Normalizing media under {:?}", config.root);

    let report = Normalizer::new()
        .run(&config.root)
        .with_context(|| format!("Failed to normalize {:?}", config.root))?;

    info!(
        "Visited {} director(ies): renamed {}, already in place {}, skipped {} collision(s), removed {} empty director(ies)",
        report.directories_visited,
        report.files_renamed,
        report.files_in_place,
        report.collisions_skipped,
        report.directories_removed
    );

    Ok(())
}
