// src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ripple", version, about = "Fuzzy Cognitive Map simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Picks the map to operate on: a map file path or a bundled preset.
#[derive(Args, Debug, Clone)]
pub struct MapSource {
    /// Path to a map file (TOML or JSON)
    #[arg(value_name = "MAP")]
    pub map: Option<PathBuf>,
    /// Use a bundled preset instead of a file
    #[arg(long, value_name = "NAME", conflicts_with = "map")]
    pub preset: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate influence propagation and print final values
    Run {
        #[command(flatten)]
        source: MapSource,
        /// Number of propagation steps (overrides the map file)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        steps: Option<u8>,
        /// Damping factor applied to incoming influence
        #[arg(long, allow_hyphen_values = true)]
        damping: Option<f64>,
        /// Print the per-step trajectory instead of final values only
        #[arg(long)]
        trace: bool,
        /// Write the final-values table as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },
    /// Report leverage points (most influential concepts)
    Rank {
        #[command(flatten)]
        source: MapSource,
        /// How many concepts to list per direction
        #[arg(long, default_value = "5")]
        top: usize,
        /// Rank by signed out-strength instead of out-degree
        #[arg(long)]
        weighted: bool,
    },
    /// Re-run the simulation with one influence overridden and diff the results
    Scenario {
        #[command(flatten)]
        source: MapSource,
        /// Source concept of the influence to override
        #[arg(long, value_name = "CONCEPT")]
        from: String,
        /// Target concept of the influence to override
        #[arg(long, value_name = "CONCEPT")]
        to: String,
        /// New weight in [-1, 1] (0 removes a missing edge's effect)
        #[arg(long, allow_hyphen_values = true)]
        weight: f64,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        steps: Option<u8>,
        #[arg(long, allow_hyphen_values = true)]
        damping: Option<f64>,
        /// Write the comparison table as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },
    /// Dump the map as CSV tables
    Export {
        #[command(flatten)]
        source: MapSource,
        /// Write the final-values table here
        #[arg(long, value_name = "FILE")]
        nodes: Option<PathBuf>,
        /// Write the edge table here
        #[arg(long, value_name = "FILE")]
        edges: Option<PathBuf>,
    },
    /// List bundled presets, or print one as TOML
    Presets {
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
}
