#![deny(
    // Overly strict on purpose: the point is to force inline allows wherever we knowingly deviate,
    // so a reviewer can see where to take a second look.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]
//! `SkipSim` synthetic dataset generator command line interface.
//!
//! With no arguments this reproduces the reference dataset: seed 42, 2000 users, 5000 tracks,
//! 20000 sessions, written to `data/synthetic_sessions.csv`.  See binary --help for overrides.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ss_gen::GeneratorConfig;
use tracing::info;

/// ss-gen command-line interface to generate a labeled skip-prediction dataset
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML file with the generator configuration; missing fields keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random stream (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of users to generate (overrides the config file).
    #[arg(long)]
    users: Option<u32>,

    /// Number of tracks to generate (overrides the config file).
    #[arg(long)]
    tracks: Option<u32>,

    /// Number of sessions to generate (overrides the config file).
    #[arg(long)]
    sessions: Option<u32>,

    /// Path of the CSV file to write (overrides the config file).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

impl Cli {
    /// Resolve the effective configuration: defaults, then the config file, then flags.
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading generator config from {}", path.display());
                GeneratorConfig::load(path)?
            },
            None => GeneratorConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(users) = self.users {
            config.n_users = users;
        }
        if let Some(tracks) = self.tracks {
            config.n_tracks = tracks;
        }
        if let Some(sessions) = self.sessions {
            config.n_sessions = sessions;
        }
        if let Some(output) = &self.output {
            config.output_path.clone_from(output);
        }
        Ok(config)
    }
}

/// Parse flags, set up logging and run the generator.
fn main() -> Result<()> {
    let args = Cli::parse();

    ss_core::logging::setup(&args.verbosity);

    let config = args.generator_config()?;
    info!(
        seed = config.seed,
        users = config.n_users,
        tracks = config.n_tracks,
        sessions = config.n_sessions,
        "Starting generation"
    );
    ss_gen::simulation::run(&config)
}
