//! CLI frontend for the narrative dice probability engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{PoolArgs, SamplingArgs};

#[derive(Parser)]
#[command(
    name = "nd",
    about = "Narrative dice — estimate the odds of a dice pool",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the probability that a pool shows the queried results
    Estimate {
        #[command(flatten)]
        pool: PoolArgs,

        /// Hyphen-joined attributes, e.g. success-advantage
        #[arg(short, long)]
        query: String,

        #[command(flatten)]
        sampling: SamplingArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a pool once and show the net symbols
    Roll {
        #[command(flatten)]
        pool: PoolArgs,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the six dice and their faces
    Dice,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nd_dice=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Estimate {
            pool,
            query,
            sampling,
            json,
        } => commands::estimate::run(&pool, &query, &sampling, json),
        Commands::Roll { pool, seed } => commands::roll::run(&pool, seed),
        Commands::Dice => commands::dice::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
