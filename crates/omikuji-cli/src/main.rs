//! CLI frontend for the daily omikuji draw.

mod cache;
mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "omikuji",
    about = "Omikuji — a once-per-day fortune draw",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw today's fortune (at most once per calendar day)
    Draw {
        /// Directory holding draw state (default: ~/.omikuji)
        #[arg(short, long)]
        state_dir: Option<PathBuf>,

        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show whether a draw is available and today's reading if drawn
    Status {
        /// Directory holding draw state (default: ~/.omikuji)
        #[arg(short, long)]
        state_dir: Option<PathBuf>,
    },

    /// Print a sample reading without gating or persistence
    Sample {
        /// RNG seed for a reproducible sample
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Draw { state_dir, seed } => commands::draw::run(state_dir.as_deref(), seed),
        Commands::Status { state_dir } => commands::status::run(state_dir.as_deref()),
        Commands::Sample { seed } => commands::sample::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
