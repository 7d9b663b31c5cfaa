//! Tensile CLI — simulation, benchmarking, and input validation.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tensile")]
#[command(version, about = "Tensile — mass-spring grid surface engine")]
struct Cli {
    /// Log every timestep event through the tracing sink.
    #[arg(long, global = true)]
    trace_events: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from an input file (JSON or TOML).
    Simulate {
        /// Path to the simulation input.
        input: String,

        /// Write per-step frames to this JSON file.
        #[arg(short, long)]
        frames: Option<String>,

        /// Write final positions and metrics to this JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (flat_sheet, sagging_sheet, plucked_sheet, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Step on the rayon thread pool.
        #[arg(long)]
        parallel: bool,

        /// Output file path; `.json` writes JSON, anything else CSV.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a simulation input without running it.
    Validate {
        /// Path to the simulation input.
        input: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { input, frames, output } => {
            commands::simulate(&input, frames.as_deref(), output.as_deref(), cli.trace_events)
        }
        Commands::Benchmark { scenario, parallel, output } => {
            commands::benchmark(&scenario, parallel, output.as_deref(), cli.trace_events)
        }
        Commands::Validate { input } => commands::validate(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
